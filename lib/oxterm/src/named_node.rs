use oxiri::{Iri, IriParseError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An owned RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri).
///
/// An IRI is its string. Validation only rejects what is not an IRI and never rewrites it,
/// so `http://example.com/~` and `http://example.com/%7e` stay two distinct IRIs.
/// ```
/// use oxterm::NamedNode;
///
/// let iri: NamedNode = "http://example.com/foo".parse()?;
/// assert_eq!(iri, "http://example.com/foo");
/// assert_eq!(iri.to_string(), "<http://example.com/foo>");
/// assert!("foo".parse::<NamedNode>().is_err());
/// # Result::<_,oxterm::IriParseError>::Ok(())
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NamedNode {
    iri: String,
}

impl NamedNode {
    /// Checks that `iri` is an absolute IRI and wraps it unchanged.
    pub fn new(iri: impl Into<String>) -> Result<Self, IriParseError> {
        let iri = Iri::parse(iri.into())?;
        Ok(Self {
            iri: iri.into_inner(),
        })
    }

    /// Wraps `iri` as is.
    ///
    /// This is the constructor for strings coming from a trusted store:
    /// it never fails and the caller is responsible for `iri` being valid and normalized.
    #[inline]
    pub fn new_unchecked(iri: impl Into<String>) -> Self {
        Self { iri: iri.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.iri
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.iri
    }

    #[inline]
    pub fn as_ref(&self) -> NamedNodeRef<'_> {
        NamedNodeRef { iri: &self.iri }
    }

    /// `<iri>`, without any escaping.
    #[inline]
    pub fn ntriples_string(&self) -> String {
        self.to_string()
    }
}

impl FromStr for NamedNode {
    type Err = IriParseError;

    #[inline]
    fn from_str(iri: &str) -> Result<Self, Self::Err> {
        Self::new(iri)
    }
}

impl fmt::Display for NamedNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

impl From<NamedNode> for String {
    #[inline]
    fn from(node: NamedNode) -> Self {
        node.iri
    }
}

impl PartialEq<str> for NamedNode {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.iri == other
    }
}

impl PartialEq<&str> for NamedNode {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.iri == *other
    }
}

impl PartialEq<NamedNode> for &str {
    #[inline]
    fn eq(&self, other: &NamedNode) -> bool {
        *self == other.iri
    }
}

/// A borrowed IRI, mostly used for the [`vocab`](crate::vocab) constants and datatype accessors.
///
/// It compares equal to a [`NamedNode`] with the same string.
/// ```
/// use oxterm::NamedNode;
/// use oxterm::vocab::xsd;
///
/// assert_eq!(xsd::INTEGER, NamedNode::new("http://www.w3.org/2001/XMLSchema#integer")?);
/// assert_eq!(xsd::INTEGER.to_string(), "<http://www.w3.org/2001/XMLSchema#integer>");
/// # Result::<_,oxterm::IriParseError>::Ok(())
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub struct NamedNodeRef<'a> {
    iri: &'a str,
}

impl<'a> NamedNodeRef<'a> {
    /// Wraps `iri` as is, in `const` contexts too.
    #[inline]
    pub const fn new_unchecked(iri: &'a str) -> Self {
        Self { iri }
    }

    #[inline]
    pub const fn as_str(self) -> &'a str {
        self.iri
    }

    #[inline]
    pub fn into_owned(self) -> NamedNode {
        NamedNode::new_unchecked(self.iri)
    }
}

impl fmt::Display for NamedNodeRef<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

impl From<NamedNodeRef<'_>> for NamedNode {
    #[inline]
    fn from(node: NamedNodeRef<'_>) -> Self {
        node.into_owned()
    }
}

impl<'a> From<&'a NamedNode> for NamedNodeRef<'a> {
    #[inline]
    fn from(node: &'a NamedNode) -> Self {
        node.as_ref()
    }
}

impl PartialEq<NamedNode> for NamedNodeRef<'_> {
    #[inline]
    fn eq(&self, other: &NamedNode) -> bool {
        self.iri == other.iri
    }
}

impl PartialEq<NamedNodeRef<'_>> for NamedNode {
    #[inline]
    fn eq(&self, other: &NamedNodeRef<'_>) -> bool {
        self.iri == other.iri
    }
}

impl PartialEq<str> for NamedNodeRef<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.iri == other
    }
}

impl PartialEq<&str> for NamedNodeRef<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.iri == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{rdf, xsd};
    use std::collections::HashSet;

    #[test]
    fn identity_is_the_string() {
        let trusted = NamedNode::new_unchecked("http://example.com/");
        let checked: NamedNode = "http://example.com/".parse().unwrap();
        let mut set = HashSet::new();
        set.insert(trusted.clone());
        assert!(set.contains(&checked));
        assert_eq!(trusted, checked.as_ref());
        assert_eq!("http://example.com/", trusted);
        assert_ne!(trusted, NamedNode::new_unchecked("http://example.com"));
    }

    #[test]
    fn validation_keeps_the_string() {
        for iri in [
            "http://example.com/%7e",
            "HTTP://example.com/",
            "http://example.com/a/../b",
        ] {
            assert_eq!(NamedNode::new(iri).unwrap().as_str(), iri);
        }
        assert_ne!(
            NamedNode::new("http://example.com/%7e").unwrap(),
            NamedNode::new("http://example.com/~").unwrap()
        );
        NamedNode::new("/relative").unwrap_err();
        NamedNode::new("not an iri").unwrap_err();
        assert_eq!(NamedNode::new_unchecked("not an iri"), "not an iri");
    }

    #[test]
    fn vocabulary_is_valid() {
        for iri in [
            rdf::HTML,
            rdf::LANG_STRING,
            xsd::BOOLEAN,
            xsd::DATE,
            xsd::DOUBLE,
            xsd::FLOAT,
            xsd::INTEGER,
            xsd::STRING,
        ] {
            assert_eq!(NamedNode::new(iri.as_str()).unwrap(), iri);
        }
    }

    #[test]
    fn ntriples_string() {
        let iri = NamedNode::new_unchecked("http://example.com/");
        assert_eq!(iri.ntriples_string(), "<http://example.com/>");
        assert_eq!(iri.as_ref().to_string(), iri.ntriples_string());
        assert_eq!(String::from(iri), "http://example.com/");
    }
}

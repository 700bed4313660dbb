use crate::error::DatatypeMismatchError;
use crate::named_node::{NamedNode, NamedNodeRef};
use crate::vocab::{rdf, xsd};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The datatype of a [`Literal`](crate::Literal).
///
/// `xsd:string` and `rdf:langString` get their own variants because the model gives them a
/// special meaning. Any other IRI is a [`SpecificDataType`].
///
/// Two datatypes are equal if and only if their IRIs are equal, whatever the variant holding them.
/// ```
/// use oxterm::vocab::xsd;
/// use oxterm::{DataType, StringDataType};
///
/// assert_eq!(DataType::new(xsd::STRING), DataType::String(StringDataType::new()));
/// assert!(DataType::new(xsd::STRING).is_string());
/// assert_eq!(DataType::new(xsd::INTEGER).iri()?, xsd::INTEGER);
/// # Result::<_,oxterm::DatatypeMismatchError>::Ok(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataType {
    String(StringDataType),
    LangString(LangStringDataType),
    Specific(SpecificDataType),
}

impl DataType {
    /// Picks the variant matching `iri`.
    pub fn new(iri: impl Into<NamedNode>) -> Self {
        let iri = iri.into();
        if iri == xsd::STRING {
            Self::String(StringDataType::new_unchecked(iri))
        } else if iri == rdf::LANG_STRING {
            Self::LangString(LangStringDataType::new_unchecked(iri))
        } else {
            Self::Specific(SpecificDataType::new(iri))
        }
    }

    /// The datatype IRI.
    ///
    /// Fails if the variant has a fixed IRI but holds another one.
    pub fn iri(&self) -> Result<NamedNodeRef<'_>, DatatypeMismatchError> {
        match self {
            Self::String(datatype) => datatype.iri(),
            Self::LangString(datatype) => datatype.iri(),
            Self::Specific(datatype) => Ok(datatype.iri()),
        }
    }

    /// Checks if the IRI is `xsd:string`, whatever the variant holding it.
    #[inline]
    pub fn is_string(&self) -> bool {
        self.stored_iri() == xsd::STRING
    }

    /// Checks if the IRI is `rdf:langString`, whatever the variant holding it.
    #[inline]
    pub fn is_lang_string(&self) -> bool {
        self.stored_iri() == rdf::LANG_STRING
    }

    /// The stored IRI, without checking it against the variant.
    #[inline]
    pub(crate) fn stored_iri(&self) -> NamedNodeRef<'_> {
        match self {
            Self::String(datatype) => datatype.iri.as_ref(),
            Self::LangString(datatype) => datatype.iri.as_ref(),
            Self::Specific(datatype) => datatype.iri.as_ref(),
        }
    }
}

impl PartialEq for DataType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.stored_iri() == other.stored_iri()
    }
}

impl Eq for DataType {}

impl Hash for DataType {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.stored_iri().hash(state)
    }
}

impl fmt::Display for DataType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stored_iri().fmt(f)
    }
}

impl From<StringDataType> for DataType {
    #[inline]
    fn from(datatype: StringDataType) -> Self {
        Self::String(datatype)
    }
}

impl From<LangStringDataType> for DataType {
    #[inline]
    fn from(datatype: LangStringDataType) -> Self {
        Self::LangString(datatype)
    }
}

impl From<SpecificDataType> for DataType {
    #[inline]
    fn from(datatype: SpecificDataType) -> Self {
        Self::Specific(datatype)
    }
}

impl From<NamedNode> for DataType {
    #[inline]
    fn from(iri: NamedNode) -> Self {
        Self::new(iri)
    }
}

impl From<NamedNodeRef<'_>> for DataType {
    #[inline]
    fn from(iri: NamedNodeRef<'_>) -> Self {
        Self::new(iri)
    }
}

/// The `xsd:string` datatype.
///
/// The IRI is stored and checked again each time it is read:
/// a value built with [`StringDataType::new_unchecked`] or deserialized from a corrupted source
/// reports a [`DatatypeMismatchError`] instead of pretending to be `xsd:string`.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StringDataType {
    iri: NamedNode,
}

impl StringDataType {
    #[inline]
    pub fn new() -> Self {
        Self {
            iri: xsd::STRING.into_owned(),
        }
    }

    /// Wraps `iri` without checking that it is `xsd:string`.
    #[inline]
    pub fn new_unchecked(iri: impl Into<NamedNode>) -> Self {
        Self { iri: iri.into() }
    }

    pub fn iri(&self) -> Result<NamedNodeRef<'_>, DatatypeMismatchError> {
        if self.iri == xsd::STRING {
            Ok(self.iri.as_ref())
        } else {
            Err(DatatypeMismatchError::new(xsd::STRING, self.iri.clone()))
        }
    }
}

impl Default for StringDataType {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<NamedNode> for StringDataType {
    type Error = DatatypeMismatchError;

    #[inline]
    fn try_from(iri: NamedNode) -> Result<Self, Self::Error> {
        if iri == xsd::STRING {
            Ok(Self { iri })
        } else {
            Err(DatatypeMismatchError::new(xsd::STRING, iri))
        }
    }
}

/// The `rdf:langString` datatype of language-tagged strings.
///
/// Like [`StringDataType`], the IRI is checked again each time it is read.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LangStringDataType {
    iri: NamedNode,
}

impl LangStringDataType {
    #[inline]
    pub fn new() -> Self {
        Self {
            iri: rdf::LANG_STRING.into_owned(),
        }
    }

    /// Wraps `iri` without checking that it is `rdf:langString`.
    #[inline]
    pub fn new_unchecked(iri: impl Into<NamedNode>) -> Self {
        Self { iri: iri.into() }
    }

    pub fn iri(&self) -> Result<NamedNodeRef<'_>, DatatypeMismatchError> {
        if self.iri == rdf::LANG_STRING {
            Ok(self.iri.as_ref())
        } else {
            Err(DatatypeMismatchError::new(rdf::LANG_STRING, self.iri.clone()))
        }
    }
}

impl Default for LangStringDataType {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<NamedNode> for LangStringDataType {
    type Error = DatatypeMismatchError;

    #[inline]
    fn try_from(iri: NamedNode) -> Result<Self, Self::Error> {
        if iri == rdf::LANG_STRING {
            Ok(Self { iri })
        } else {
            Err(DatatypeMismatchError::new(rdf::LANG_STRING, iri))
        }
    }
}

/// Any datatype identified by an arbitrary IRI.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpecificDataType {
    iri: NamedNode,
}

impl SpecificDataType {
    #[inline]
    pub fn new(iri: impl Into<NamedNode>) -> Self {
        Self { iri: iri.into() }
    }

    #[inline]
    pub fn iri(&self) -> NamedNodeRef<'_> {
        self.iri.as_ref()
    }

    #[inline]
    pub fn into_iri(self) -> NamedNode {
        self.iri
    }
}

impl From<NamedNode> for SpecificDataType {
    #[inline]
    fn from(iri: NamedNode) -> Self {
        Self::new(iri)
    }
}

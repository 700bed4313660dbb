use crate::blank_node::BlankNode;
use crate::error::TermKindError;
use crate::literal::Literal;
use crate::named_node::{NamedNode, NamedNodeRef};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// An owned RDF [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term).
///
/// It is the union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri), [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node) and [literals](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
/// Exactly one of [`Term::is_named_node`], [`Term::is_blank_node`] and [`Term::is_literal`] is true.
///
/// The typed accessors fail with a [`TermKindError`] when the term has another kind:
/// ```
/// use oxterm::{NamedNode, Term};
///
/// let term = Term::from(NamedNode::new("http://example.com")?);
/// assert_eq!(term.named_node()?.as_str(), "http://example.com");
/// assert!(term.literal().is_err());
/// assert_eq!(term.to_string(), "<http://example.com>");
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    #[inline]
    pub fn is_named_node(&self) -> bool {
        self.kind() == TermKind::NamedNode
    }

    #[inline]
    pub fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    #[inline]
    pub fn kind(&self) -> TermKind {
        match self {
            Self::NamedNode(_) => TermKind::NamedNode,
            Self::BlankNode(_) => TermKind::BlankNode,
            Self::Literal(_) => TermKind::Literal,
        }
    }

    pub fn named_node(&self) -> Result<&NamedNode, TermKindError> {
        if let Self::NamedNode(node) = self {
            Ok(node)
        } else {
            Err(self.kind_error(TermKind::NamedNode))
        }
    }

    pub fn blank_node(&self) -> Result<&BlankNode, TermKindError> {
        if let Self::BlankNode(node) = self {
            Ok(node)
        } else {
            Err(self.kind_error(TermKind::BlankNode))
        }
    }

    pub fn literal(&self) -> Result<&Literal, TermKindError> {
        if let Self::Literal(literal) = self {
            Ok(literal)
        } else {
            Err(self.kind_error(TermKind::Literal))
        }
    }

    pub fn into_named_node(self) -> Result<NamedNode, TermKindError> {
        match self {
            Self::NamedNode(node) => Ok(node),
            other => Err(other.kind_error(TermKind::NamedNode)),
        }
    }

    pub fn into_blank_node(self) -> Result<BlankNode, TermKindError> {
        match self {
            Self::BlankNode(node) => Ok(node),
            other => Err(other.kind_error(TermKind::BlankNode)),
        }
    }

    pub fn into_literal(self) -> Result<Literal, TermKindError> {
        match self {
            Self::Literal(literal) => Ok(literal),
            other => Err(other.kind_error(TermKind::Literal)),
        }
    }

    /// The canonical N-Triples form of this term.
    #[inline]
    pub fn ntriples_string(&self) -> String {
        self.to_string()
    }

    #[inline]
    fn kind_error(&self, expected: TermKind) -> TermKindError {
        TermKindError::new(expected, self.kind())
    }
}

impl fmt::Display for Term {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => node.fmt(f),
            Self::BlankNode(node) => node.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<NamedNode> for Term {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<NamedNodeRef<'_>> for Term {
    #[inline]
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self::NamedNode(node.into_owned())
    }
}

impl From<BlankNode> for Term {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<Literal> for Term {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl TryFrom<Term> for NamedNode {
    type Error = TermKindError;

    #[inline]
    fn try_from(term: Term) -> Result<Self, Self::Error> {
        term.into_named_node()
    }
}

impl TryFrom<Term> for BlankNode {
    type Error = TermKindError;

    #[inline]
    fn try_from(term: Term) -> Result<Self, Self::Error> {
        term.into_blank_node()
    }
}

impl TryFrom<Term> for Literal {
    type Error = TermKindError;

    #[inline]
    fn try_from(term: Term) -> Result<Self, Self::Error> {
        term.into_literal()
    }
}

/// The kind of a [`Term`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TermKind {
    NamedNode,
    BlankNode,
    Literal,
}

impl fmt::Display for TermKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NamedNode => "an IRI",
            Self::BlankNode => "a blank node",
            Self::Literal => "a literal",
        })
    }
}

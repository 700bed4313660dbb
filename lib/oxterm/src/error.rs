use crate::named_node::{NamedNode, NamedNodeRef};
use crate::term::{Term, TermKind};
use crate::triple::TriplePosition;
use oxilangtag::LanguageTagParseError;

/// An error raised when a [`Term`] accessor is called on a term of another kind.
///
/// ```
/// use oxterm::{Literal, Term, TermKind};
///
/// let term = Term::from(Literal::new_simple_literal("foo"));
/// let error = term.named_node().unwrap_err();
/// assert_eq!(error.expected(), TermKind::NamedNode);
/// assert_eq!(error.actual(), TermKind::Literal);
/// assert_eq!(error.to_string(), "This term is not an IRI, it is a literal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("This term is not {expected}, it is {actual}")]
pub struct TermKindError {
    expected: TermKind,
    actual: TermKind,
}

impl TermKindError {
    #[inline]
    pub(crate) fn new(expected: TermKind, actual: TermKind) -> Self {
        Self { expected, actual }
    }

    /// The kind the caller asked for.
    #[inline]
    pub fn expected(&self) -> TermKind {
        self.expected
    }

    /// The kind the term actually has.
    #[inline]
    pub fn actual(&self) -> TermKind {
        self.actual
    }
}

/// An error raised when a [`Triple`](crate::Triple) or [`Quad`](crate::Quad) position
/// holds a term of a kind that is not allowed there, like a literal as subject.
///
/// The offending term is kept for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The {position} must be {}, found {term}", .position.expectation())]
pub struct PositionError {
    position: TriplePosition,
    term: Term,
}

impl PositionError {
    #[inline]
    pub(crate) fn new(position: TriplePosition, term: Term) -> Self {
        Self { position, term }
    }

    #[inline]
    pub fn position(&self) -> TriplePosition {
        self.position
    }

    /// The term found at this position.
    #[inline]
    pub fn term(&self) -> &Term {
        &self.term
    }

    #[inline]
    pub fn into_term(self) -> Term {
        self.term
    }
}

/// An error raised when a datatype wrapper with a fixed IRI,
/// like [`StringDataType`](crate::StringDataType), holds another IRI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected the datatype {expected}, found {found}")]
pub struct DatatypeMismatchError {
    expected: NamedNodeRef<'static>,
    found: NamedNode,
}

impl DatatypeMismatchError {
    #[inline]
    pub(crate) fn new(expected: NamedNodeRef<'static>, found: NamedNode) -> Self {
        Self { expected, found }
    }

    #[inline]
    pub fn expected(&self) -> NamedNodeRef<'static> {
        self.expected
    }

    #[inline]
    pub fn found(&self) -> &NamedNode {
        &self.found
    }
}

/// An error raised when the components given to [`Literal::new`](crate::Literal::new) do not form a valid literal.
#[derive(Debug, thiserror::Error)]
pub enum LiteralError {
    /// A language tag has been given with a datatype that is not `rdf:langString`.
    #[error(
        "A language-tagged literal must have the datatype <http://www.w3.org/1999/02/22-rdf-syntax-ns#langString>, found {0}"
    )]
    LanguageWithDatatype(NamedNode),
    /// The datatype `rdf:langString` has been given without language tag.
    #[error(
        "The datatype <http://www.w3.org/1999/02/22-rdf-syntax-ns#langString> requires a language tag"
    )]
    MissingLanguage,
    #[error(transparent)]
    InvalidLanguageTag(#[from] LanguageTagParseError),
}

/// A violation of the model contract observed when reading a value.
///
/// It gathers the errors returned by the accessors of terms, triples, quads and datatypes
/// so that they can all be propagated with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStateError {
    #[error(transparent)]
    TermKind(#[from] TermKindError),
    #[error(transparent)]
    Position(#[from] PositionError),
    #[error(transparent)]
    Datatype(#[from] DatatypeMismatchError),
}

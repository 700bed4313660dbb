use crate::blank_node::BlankNode;
use crate::error::{PositionError, TermKindError};
use crate::named_node::{NamedNode, NamedNodeRef};
use crate::term::{Term, TermKind};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// The owned union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri) and [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// This is the set of terms allowed as triple subject.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NamedOrBlankNode {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
}

impl NamedOrBlankNode {
    #[inline]
    pub fn is_named_node(&self) -> bool {
        matches!(self, Self::NamedNode(_))
    }

    #[inline]
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }
}

impl fmt::Display for NamedOrBlankNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => node.fmt(f),
            Self::BlankNode(node) => node.fmt(f),
        }
    }
}

impl From<NamedNode> for NamedOrBlankNode {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<NamedNodeRef<'_>> for NamedOrBlankNode {
    #[inline]
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self::NamedNode(node.into_owned())
    }
}

impl From<BlankNode> for NamedOrBlankNode {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<NamedOrBlankNode> for Term {
    #[inline]
    fn from(node: NamedOrBlankNode) -> Self {
        match node {
            NamedOrBlankNode::NamedNode(node) => node.into(),
            NamedOrBlankNode::BlankNode(node) => node.into(),
        }
    }
}

impl TryFrom<Term> for NamedOrBlankNode {
    type Error = TermKindError;

    /// Fails on literals, reporting that an IRI was expected.
    #[inline]
    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::NamedNode(node) => Ok(node.into()),
            Term::BlankNode(node) => Ok(node.into()),
            Term::Literal(_) => Err(TermKindError::new(TermKind::NamedNode, TermKind::Literal)),
        }
    }
}

/// A possible owned graph name.
///
/// It is the union of [IRIs](https://www.w3.org/TR/rdf11-concepts/#dfn-iri), [blank nodes](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node), and the [default graph name](https://www.w3.org/TR/rdf11-concepts/#dfn-default-graph).
#[derive(Eq, PartialEq, Debug, Clone, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GraphName {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    #[default]
    DefaultGraph,
}

impl GraphName {
    #[inline]
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Self::DefaultGraph)
    }

    /// The graph name as a term, `None` for the default graph.
    #[inline]
    pub fn into_term(self) -> Option<Term> {
        match self {
            Self::NamedNode(node) => Some(node.into()),
            Self::BlankNode(node) => Some(node.into()),
            Self::DefaultGraph => None,
        }
    }
}

impl fmt::Display for GraphName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamedNode(node) => node.fmt(f),
            Self::BlankNode(node) => node.fmt(f),
            Self::DefaultGraph => f.write_str("DEFAULT"),
        }
    }
}

impl From<NamedNode> for GraphName {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::NamedNode(node)
    }
}

impl From<NamedNodeRef<'_>> for GraphName {
    #[inline]
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self::NamedNode(node.into_owned())
    }
}

impl From<BlankNode> for GraphName {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<NamedOrBlankNode> for GraphName {
    #[inline]
    fn from(node: NamedOrBlankNode) -> Self {
        match node {
            NamedOrBlankNode::NamedNode(node) => node.into(),
            NamedOrBlankNode::BlankNode(node) => node.into(),
        }
    }
}

impl From<Option<NamedOrBlankNode>> for GraphName {
    #[inline]
    fn from(name: Option<NamedOrBlankNode>) -> Self {
        name.map_or(Self::DefaultGraph, Into::into)
    }
}

/// A position inside a [`Triple`] or a [`Quad`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriplePosition {
    Subject,
    Predicate,
    Object,
    GraphName,
}

impl TriplePosition {
    /// Checks if a term of the given kind is allowed at this position.
    #[inline]
    pub fn accepts(self, kind: TermKind) -> bool {
        match self {
            Self::Subject | Self::GraphName => kind != TermKind::Literal,
            Self::Predicate => kind == TermKind::NamedNode,
            Self::Object => true,
        }
    }

    pub(crate) fn expectation(self) -> &'static str {
        match self {
            Self::Subject | Self::GraphName => "an IRI or a blank node",
            Self::Predicate => "an IRI",
            Self::Object => "an IRI, a blank node or a literal",
        }
    }

    fn check(self, term: &Term) -> Result<&Term, PositionError> {
        if self.accepts(term.kind()) {
            Ok(term)
        } else {
            Err(PositionError::new(self, term.clone()))
        }
    }
}

impl fmt::Display for TriplePosition {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Subject => "subject",
            Self::Predicate => "predicate",
            Self::Object => "object",
            Self::GraphName => "graph name",
        })
    }
}

/// An owned [RDF triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple).
///
/// A triple may be built from arbitrary [`Term`]s with [`Triple::from_terms`].
/// The positional constraints (no literal as subject, only IRIs as predicate) are then checked each time a position is read:
/// ```
/// use oxterm::{Literal, NamedNode, Term, Triple, TriplePosition};
///
/// let ex = NamedNode::new("http://example.com")?;
/// let triple = Triple::from_terms(Literal::new_simple_literal("s"), ex.clone(), ex.clone());
/// assert_eq!(triple.subject().unwrap_err().position(), TriplePosition::Subject);
/// assert_eq!(triple.object()?, &Term::from(ex.clone()));
///
/// let triple = Triple::new(ex.clone(), ex.clone(), ex);
/// assert_eq!(
///     triple.ntriples_string(),
///     "<http://example.com> <http://example.com> <http://example.com> ."
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triple {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl Triple {
    /// Builds an RDF [triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple) whose positions are valid by construction.
    #[inline]
    pub fn new(
        subject: impl Into<NamedOrBlankNode>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) -> Self {
        let subject: NamedOrBlankNode = subject.into();
        let predicate: NamedNode = predicate.into();
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Builds a triple from arbitrary terms without checking their positions.
    #[inline]
    pub fn from_terms(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// The [subject](https://www.w3.org/TR/rdf11-concepts/#dfn-subject) of this triple.
    ///
    /// Fails if it is a literal.
    #[inline]
    pub fn subject(&self) -> Result<&Term, PositionError> {
        TriplePosition::Subject.check(&self.subject)
    }

    /// The [predicate](https://www.w3.org/TR/rdf11-concepts/#dfn-predicate) of this triple.
    ///
    /// Fails if it is not an IRI.
    #[inline]
    pub fn predicate(&self) -> Result<&Term, PositionError> {
        TriplePosition::Predicate.check(&self.predicate)
    }

    /// The [object](https://www.w3.org/TR/rdf11-concepts/#dfn-object) of this triple.
    #[inline]
    pub fn object(&self) -> Result<&Term, PositionError> {
        TriplePosition::Object.check(&self.object)
    }

    /// Checks all the positions at once.
    pub fn validate(&self) -> Result<(), PositionError> {
        self.subject()?;
        self.predicate()?;
        self.object()?;
        Ok(())
    }

    /// Extracts the terms without checking their positions.
    #[inline]
    pub fn into_terms(self) -> (Term, Term, Term) {
        (self.subject, self.predicate, self.object)
    }

    /// Encodes that this triple is in an [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
    #[inline]
    pub fn in_graph(self, graph_name: impl Into<GraphName>) -> Quad {
        Quad {
            subject: self.subject,
            predicate: self.predicate,
            object: self.object,
            graph_name: graph_name.into().into_term(),
        }
    }

    /// The N-Triples line of this triple, with the final ` .`.
    #[inline]
    pub fn ntriples_string(&self) -> String {
        format!("{self} .")
    }
}

impl fmt::Display for Triple {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// An owned [triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple) in an [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
///
/// A missing graph name means the [default graph](https://www.w3.org/TR/rdf11-concepts/#dfn-default-graph).
/// The positions are checked when read, like for [`Triple`].
/// ```
/// use oxterm::{NamedNode, Quad, Term};
///
/// let ex = NamedNode::new("http://example.com")?;
/// let quad = Quad::new(ex.clone(), ex.clone(), ex.clone(), ex.clone());
/// assert_eq!(quad.graph_name()?, Some(&Term::from(ex)));
/// assert_eq!(
///     quad.ntriples_string(),
///     "<http://example.com> <http://example.com> <http://example.com> <http://example.com> ."
/// );
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quad {
    subject: Term,
    predicate: Term,
    object: Term,
    graph_name: Option<Term>,
}

impl Quad {
    /// Builds an RDF [triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple) in an [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
    #[inline]
    pub fn new(
        subject: impl Into<NamedOrBlankNode>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
        graph_name: impl Into<GraphName>,
    ) -> Self {
        Triple::new(subject, predicate, object).in_graph(graph_name)
    }

    /// Builds a quad from arbitrary terms without checking their positions.
    ///
    /// `None` as graph name stands for the default graph.
    #[inline]
    pub fn from_terms(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
        graph_name: Option<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph_name,
        }
    }

    #[inline]
    pub fn subject(&self) -> Result<&Term, PositionError> {
        TriplePosition::Subject.check(&self.subject)
    }

    #[inline]
    pub fn predicate(&self) -> Result<&Term, PositionError> {
        TriplePosition::Predicate.check(&self.predicate)
    }

    #[inline]
    pub fn object(&self) -> Result<&Term, PositionError> {
        TriplePosition::Object.check(&self.object)
    }

    /// The name of the graph this quad is in, `None` for the default graph.
    ///
    /// Fails if it is a literal.
    #[inline]
    pub fn graph_name(&self) -> Result<Option<&Term>, PositionError> {
        self.graph_name
            .as_ref()
            .map(|name| TriplePosition::GraphName.check(name))
            .transpose()
    }

    #[inline]
    pub fn is_in_default_graph(&self) -> bool {
        self.graph_name.is_none()
    }

    pub fn validate(&self) -> Result<(), PositionError> {
        self.subject()?;
        self.predicate()?;
        self.object()?;
        self.graph_name()?;
        Ok(())
    }

    /// The triple part of this quad.
    #[inline]
    pub fn triple(&self) -> Triple {
        Triple::from_terms(
            self.subject.clone(),
            self.predicate.clone(),
            self.object.clone(),
        )
    }

    /// Extracts the terms without checking their positions.
    #[inline]
    pub fn into_terms(self) -> (Term, Term, Term, Option<Term>) {
        (self.subject, self.predicate, self.object, self.graph_name)
    }

    /// The N-Quads line of this quad, with the final ` .`.
    #[inline]
    pub fn ntriples_string(&self) -> String {
        format!("{self} .")
    }
}

impl fmt::Display for Quad {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if let Some(graph_name) = &self.graph_name {
            write!(f, " {graph_name}")?;
        }
        Ok(())
    }
}

impl From<Quad> for Triple {
    #[inline]
    fn from(quad: Quad) -> Self {
        Self {
            subject: quad.subject,
            predicate: quad.predicate,
            object: quad.object,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Literal;

    fn ex(suffix: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.com/{suffix}"))
    }

    #[test]
    fn positional_checks_are_deferred() {
        let literal = Term::from(Literal::new_simple_literal("l"));
        let triple = Triple::from_terms(literal.clone(), literal.clone(), literal.clone());
        let error = triple.subject().unwrap_err();
        assert_eq!(error.position(), TriplePosition::Subject);
        assert_eq!(error.term(), &literal);
        assert_eq!(
            triple.predicate().unwrap_err().position(),
            TriplePosition::Predicate
        );
        assert_eq!(triple.object().unwrap(), &literal);
        triple.validate().unwrap_err();
        assert_eq!(triple.to_string(), "\"l\" \"l\" \"l\"");
    }

    #[test]
    fn blank_node_predicate_is_rejected() {
        let triple = Triple::from_terms(ex("s"), BlankNode::default(), ex("o"));
        assert_eq!(
            triple.validate().unwrap_err().position(),
            TriplePosition::Predicate
        );
        assert!(triple.subject().unwrap().is_named_node());
    }

    #[test]
    fn position_acceptance() {
        assert!(TriplePosition::Subject.accepts(TermKind::BlankNode));
        assert!(!TriplePosition::Subject.accepts(TermKind::Literal));
        assert!(!TriplePosition::Predicate.accepts(TermKind::BlankNode));
        assert!(TriplePosition::Object.accepts(TermKind::Literal));
        assert!(!TriplePosition::GraphName.accepts(TermKind::Literal));
    }

    #[test]
    fn quad_graph_name() {
        let quad = Quad::new(ex("s"), ex("p"), ex("o"), GraphName::DefaultGraph);
        assert!(quad.is_in_default_graph());
        assert_eq!(quad.graph_name().unwrap(), None);
        assert_eq!(
            quad.to_string(),
            "<http://example.com/s> <http://example.com/p> <http://example.com/o>"
        );

        let quad = Quad::from_terms(
            ex("s"),
            ex("p"),
            ex("o"),
            Some(Literal::new_simple_literal("g").into()),
        );
        assert_eq!(
            quad.graph_name().unwrap_err().position(),
            TriplePosition::GraphName
        );
        quad.validate().unwrap_err();
        assert_eq!(quad.triple(), Triple::new(ex("s"), ex("p"), ex("o")));
    }

    #[test]
    fn triple_in_graph() {
        let graph = BlankNode::new_unchecked("g");
        let quad = Triple::new(ex("s"), ex("p"), Literal::from(1)).in_graph(graph.clone());
        assert_eq!(quad.graph_name().unwrap(), Some(&Term::from(graph)));
        assert_eq!(
            quad.ntriples_string(),
            "<http://example.com/s> <http://example.com/p> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> _:g ."
        );
        assert_eq!(
            Triple::from(quad),
            Triple::new(ex("s"), ex("p"), Literal::from(1))
        );
    }

    #[test]
    fn named_or_blank_node_from_term() {
        assert!(
            NamedOrBlankNode::try_from(Term::from(ex("s")))
                .unwrap()
                .is_named_node()
        );
        assert_eq!(
            NamedOrBlankNode::try_from(Term::from(Literal::from(true)))
                .unwrap_err()
                .actual(),
            TermKind::Literal
        );
    }

    #[test]
    fn equality_is_component_wise() {
        assert_eq!(
            Triple::new(ex("s"), ex("p"), ex("o")),
            Triple::from_terms(ex("s"), ex("p"), ex("o"))
        );
        assert_ne!(
            Triple::new(ex("s"), ex("p"), ex("o")),
            Triple::new(ex("o"), ex("p"), ex("s"))
        );
        assert_ne!(
            Quad::new(ex("s"), ex("p"), ex("o"), ex("g")),
            Quad::new(ex("s"), ex("p"), ex("o"), GraphName::DefaultGraph)
        );
    }
}

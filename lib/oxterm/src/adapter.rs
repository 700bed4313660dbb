//! Conversion between the model and the terms of a store using its own blank node identifiers.
//!
//! Stores usually identify blank nodes with short local labels that are only unique inside the store.
//! The adapters of this module give each store a [`Salt`] so that the blank nodes they hand out never
//! collide with the blank nodes of another store or of another adapter on the same store.
//!
//! ```
//! use oxterm::{LocalStatement, LocalTerm, Salt, TermAdapter};
//!
//! let adapter = TermAdapter::with_salt(Salt::from_u128(1));
//! let statement = LocalStatement::new(
//!     LocalTerm::blank_node("b0"),
//!     LocalTerm::iri("http://example.com/p"),
//!     LocalTerm::simple_literal("o"),
//! );
//! let triple = adapter.to_triple(&statement)?;
//! assert_eq!(
//!     triple.ntriples_string(),
//!     "_:s00000000000000000000000000000001_b0 <http://example.com/p> \"o\" ."
//! );
//! assert_eq!(adapter.to_local_statement(&triple)?, statement);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

use crate::blank_node::BlankNode;
use crate::error::{InvalidStateError, LiteralError};
use crate::language_tag::LanguageTag;
use crate::literal::{Literal, print_quoted_str};
use crate::named_node::NamedNode;
use crate::salt::Salt;
use crate::term::Term;
use crate::triple::{Quad, Triple};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// A term in the representation of a store.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LocalTerm {
    Iri(String),
    /// A blank node with its store-local label.
    BlankNode(String),
    Literal {
        lexical_form: String,
        /// `None` for stores without explicit `xsd:string` or `rdf:langString` datatypes.
        datatype: Option<String>,
        language: Option<String>,
    },
}

impl LocalTerm {
    #[inline]
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    #[inline]
    pub fn blank_node(id: impl Into<String>) -> Self {
        Self::BlankNode(id.into())
    }

    #[inline]
    pub fn simple_literal(lexical_form: impl Into<String>) -> Self {
        Self::Literal {
            lexical_form: lexical_form.into(),
            datatype: None,
            language: None,
        }
    }

    #[inline]
    pub fn typed_literal(lexical_form: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal {
            lexical_form: lexical_form.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    #[inline]
    pub fn language_tagged_literal(
        lexical_form: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self::Literal {
            lexical_form: lexical_form.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }
}

impl fmt::Display for LocalTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::BlankNode(id) => write!(f, "_:{id}"),
            Self::Literal {
                lexical_form,
                datatype,
                language,
            } => {
                print_quoted_str(lexical_form, f)?;
                if let Some(language) = language {
                    write!(f, "@{language}")?;
                }
                if let Some(datatype) = datatype {
                    write!(f, "^^<{datatype}>")?;
                }
                Ok(())
            }
        }
    }
}

/// A statement in the representation of a store, with an optional context for the named graph.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalStatement {
    pub subject: LocalTerm,
    pub predicate: LocalTerm,
    pub object: LocalTerm,
    pub context: Option<LocalTerm>,
}

impl LocalStatement {
    /// A statement in the default context.
    #[inline]
    pub fn new(subject: LocalTerm, predicate: LocalTerm, object: LocalTerm) -> Self {
        Self {
            subject,
            predicate,
            object,
            context: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn in_context(self, context: LocalTerm) -> Self {
        Self {
            context: Some(context),
            ..self
        }
    }
}

#[derive(Debug, Default)]
struct ForeignBlankNodes {
    local_ids: HashMap<BlankNode, String>,
    nodes: HashMap<String, BlankNode>,
}

/// Converts terms between a store and the model, salting the store blank nodes.
///
/// Blank nodes read from the store become [`Salt::blank_node`] of their label,
/// so the same label always gives the same [`BlankNode`] through the same adapter.
/// Blank nodes written to the store are given back their label if they carry the adapter salt.
/// Other blank nodes, built with another salt or by [`BlankNode::default`],
/// get a fresh label that is remembered so that they keep the same label and convert back to themselves.
///
/// Cloning an adapter is cheap and the clone shares the registry of foreign blank nodes.
/// The registry keeps every foreign blank node written through the adapter until
/// [`TermAdapter::forget_foreign_blank_nodes`] is called.
#[derive(Debug, Clone)]
pub struct TermAdapter {
    salt: Salt,
    foreign: Arc<Mutex<ForeignBlankNodes>>,
}

impl TermAdapter {
    /// An adapter with a fresh random salt.
    #[inline]
    pub fn new() -> Self {
        Self::with_salt(Salt::random())
    }

    pub fn with_salt(salt: Salt) -> Self {
        debug!(%salt, "created a term adapter");
        Self {
            salt,
            foreign: Arc::default(),
        }
    }

    #[inline]
    pub fn salt(&self) -> Salt {
        self.salt
    }

    /// An adapter for a sub-scope of this one, like a named graph,
    /// with a salt derived from `discriminator` and the same foreign blank node registry.
    #[must_use]
    pub fn scoped(&self, discriminator: &str) -> Self {
        let salt = self.salt.derive(discriminator);
        debug!(parent = %self.salt, %salt, discriminator, "derived a sub-salt");
        Self {
            salt,
            foreign: Arc::clone(&self.foreign),
        }
    }

    /// A blank node minted in this adapter scope.
    pub fn create_blank_node(&self) -> BlankNode {
        self.salt.blank_node(BlankNode::default().unique_reference())
    }

    /// The blank node for the store label `name` in this adapter scope.
    #[inline]
    pub fn create_blank_node_named(&self, name: &str) -> BlankNode {
        self.blank_node(name)
    }

    pub fn to_term(&self, term: &LocalTerm) -> Result<Term, LiteralError> {
        Ok(match term {
            LocalTerm::Iri(iri) => NamedNode::new_unchecked(iri.as_str()).into(),
            LocalTerm::BlankNode(id) => self.blank_node(id).into(),
            LocalTerm::Literal {
                lexical_form,
                datatype,
                language,
            } => Literal::new(
                lexical_form.as_str(),
                datatype.as_deref().map(NamedNode::new_unchecked),
                language.as_deref().map(LanguageTag::new).transpose()?,
            )?
            .into(),
        })
    }

    /// Converts a store statement, ignoring its context.
    ///
    /// The positions are not checked: a store statement with a literal subject is
    /// reported when the subject of the returned triple is read.
    pub fn to_triple(&self, statement: &LocalStatement) -> Result<Triple, LiteralError> {
        Ok(Triple::from_terms(
            self.to_term(&statement.subject)?,
            self.to_term(&statement.predicate)?,
            self.to_term(&statement.object)?,
        ))
    }

    /// Converts a store statement, its context becoming the graph name.
    pub fn to_quad(&self, statement: &LocalStatement) -> Result<Quad, LiteralError> {
        Ok(Quad::from_terms(
            self.to_term(&statement.subject)?,
            self.to_term(&statement.predicate)?,
            self.to_term(&statement.object)?,
            statement
                .context
                .as_ref()
                .map(|context| self.to_term(context))
                .transpose()?,
        ))
    }

    /// Converts a term to the store representation.
    ///
    /// The datatype of simple literals and language-tagged strings is left implicit.
    pub fn to_local_term(&self, term: &Term) -> Result<LocalTerm, InvalidStateError> {
        Ok(match term {
            Term::NamedNode(node) => LocalTerm::Iri(node.as_str().into()),
            Term::BlankNode(node) => LocalTerm::BlankNode(self.local_blank_node_id(node)),
            Term::Literal(literal) => {
                let datatype = literal.datatype_iri()?;
                LocalTerm::Literal {
                    lexical_form: literal.lexical_form().into(),
                    datatype: (!literal.is_plain()).then(|| datatype.as_str().into()),
                    language: literal.language().map(|l| l.as_str().into()),
                }
            }
        })
    }

    /// Converts a triple to a store statement in the default context.
    pub fn to_local_statement(&self, triple: &Triple) -> Result<LocalStatement, InvalidStateError> {
        Ok(LocalStatement::new(
            self.to_local_term(triple.subject()?)?,
            self.to_local_term(triple.predicate()?)?,
            self.to_local_term(triple.object()?)?,
        ))
    }

    /// Converts a quad to a store statement, its graph name becoming the context.
    pub fn to_local_quad(&self, quad: &Quad) -> Result<LocalStatement, InvalidStateError> {
        Ok(LocalStatement {
            subject: self.to_local_term(quad.subject()?)?,
            predicate: self.to_local_term(quad.predicate()?)?,
            object: self.to_local_term(quad.object()?)?,
            context: quad
                .graph_name()?
                .map(|name| self.to_local_term(name))
                .transpose()?,
        })
    }

    /// Empties the foreign blank node registry shared with the clones and scoped adapters.
    ///
    /// Labels given before to foreign blank nodes are no longer resolved to them:
    /// reading such a label again gives a blank node of the adapter scope.
    pub fn forget_foreign_blank_nodes(&self) {
        let mut registry = self.registry();
        debug!(
            count = registry.nodes.len(),
            "forgetting foreign blank nodes"
        );
        registry.local_ids.clear();
        registry.nodes.clear();
    }

    fn blank_node(&self, id: &str) -> BlankNode {
        if let Some(node) = self.registry().nodes.get(id) {
            return node.clone();
        }
        self.salt.blank_node(id)
    }

    fn local_blank_node_id(&self, node: &BlankNode) -> String {
        if let Some(id) = self.salt.local_id(node) {
            return id.into();
        }
        let mut registry = self.registry();
        if let Some(id) = registry.local_ids.get(node) {
            return id.clone();
        }
        let id = BlankNode::default().into_unique_reference();
        trace!(%node, %id, "minted a local id for a foreign blank node");
        registry.nodes.insert(id.clone(), node.clone());
        registry.local_ids.insert(node.clone(), id.clone());
        id
    }

    fn registry(&self) -> MutexGuard<'_, ForeignBlankNodes> {
        // Both maps are always updated together
        self.foreign.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TermAdapter {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Converts statements between a store with named graphs and the model.
///
/// The statements of the default graph and the graph names are converted with the master salt.
/// The statements of each named graph are converted with a salt derived from the graph name,
/// so the same store label denotes distinct blank nodes in distinct graphs.
/// ```
/// use oxterm::{DatasetAdapter, LocalStatement, LocalTerm, Salt};
///
/// let adapter = DatasetAdapter::with_salt(Salt::from_u128(7));
/// let statement = |graph: &str| {
///     LocalStatement::new(
///         LocalTerm::blank_node("b0"),
///         LocalTerm::iri("http://example.com/p"),
///         LocalTerm::iri("http://example.com/o"),
///     )
///     .in_context(LocalTerm::iri(graph))
/// };
/// let q1 = adapter.to_quad(&statement("http://example.com/g1"))?;
/// let q2 = adapter.to_quad(&statement("http://example.com/g2"))?;
/// assert_ne!(q1.subject()?, q2.subject()?);
/// assert_eq!(adapter.to_local_statement(&q1)?, statement("http://example.com/g1"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetAdapter {
    master: TermAdapter,
}

impl DatasetAdapter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_salt(salt: Salt) -> Self {
        Self {
            master: TermAdapter::with_salt(salt),
        }
    }

    #[inline]
    pub fn salt(&self) -> Salt {
        self.master.salt()
    }

    /// The adapter for the statements in `context`, the default graph if `None`.
    pub fn graph_adapter(&self, context: Option<&LocalTerm>) -> TermAdapter {
        match context {
            Some(context) => self.master.scoped(&context.to_string()),
            None => self.master.clone(),
        }
    }

    pub fn to_quad(&self, statement: &LocalStatement) -> Result<Quad, LiteralError> {
        let graph = self.graph_adapter(statement.context.as_ref());
        Ok(Quad::from_terms(
            graph.to_term(&statement.subject)?,
            graph.to_term(&statement.predicate)?,
            graph.to_term(&statement.object)?,
            statement
                .context
                .as_ref()
                .map(|context| self.master.to_term(context))
                .transpose()?,
        ))
    }

    pub fn to_local_statement(&self, quad: &Quad) -> Result<LocalStatement, InvalidStateError> {
        let context = quad
            .graph_name()?
            .map(|name| self.master.to_local_term(name))
            .transpose()?;
        let graph = self.graph_adapter(context.as_ref());
        Ok(LocalStatement {
            subject: graph.to_local_term(quad.subject()?)?,
            predicate: graph.to_local_term(quad.predicate()?)?,
            object: graph.to_local_term(quad.object()?)?,
            context,
        })
    }
}

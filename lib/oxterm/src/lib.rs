#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod adapter;
mod blank_node;
mod datatype;
mod error;
mod language_tag;
mod literal;
mod named_node;
mod salt;
mod term;
mod triple;
pub mod vocab;

pub use crate::adapter::{DatasetAdapter, LocalStatement, LocalTerm, TermAdapter};
pub use crate::blank_node::{BlankNode, BlankNodeIdParseError};
pub use crate::datatype::{DataType, LangStringDataType, SpecificDataType, StringDataType};
pub use crate::error::{
    DatatypeMismatchError, InvalidStateError, LiteralError, PositionError, TermKindError,
};
pub use crate::language_tag::LanguageTag;
pub use crate::literal::Literal;
pub use crate::named_node::{NamedNode, NamedNodeRef};
pub use crate::salt::{Salt, SaltParseError};
pub use crate::term::{Term, TermKind};
pub use crate::triple::{GraphName, NamedOrBlankNode, Quad, Triple, TriplePosition};
pub use oxilangtag::LanguageTagParseError;
pub use oxiri::IriParseError;

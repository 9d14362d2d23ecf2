//! A "prelude" for users of the `cypher-builder` crate.
pub use crate::ast::*;
pub use crate::error::CompositionError;
pub use crate::scope::{Binding, ClauseSequence, Scope};
pub use crate::visitor::{Cypher, CypherQuery, Visitor};

//! # cypher-builder
//!
//! A typed intermediate representation for Cypher statements.
//!
//! Translation code composes clauses, expressions and variables from the
//! [ast](ast/index.html) module and never writes query text by hand. Every
//! clause sequence is checked against an explicit [Scope](scope/struct.Scope.html)
//! while it is being composed, so a finished tree always renders: the
//! [visitor](visitor/index.html) module turns it into query text and a map of
//! extracted parameters in a single pass.
//!
//! ```rust
//! # use cypher_builder::{ast::*, scope::*, visitor::{Cypher, Visitor}};
//! # fn main() -> Result<(), cypher_builder::CompositionError> {
//! let mut variables = VariableAllocator::new();
//! let this = variables.named("this");
//!
//! let statement = ClauseSequence::new(Scope::new())
//!     .then(Match::new(NodePattern::new(&this).label("Movie")).so_that(this.property("title").equals("Matrix")))?
//!     .then(Return::new().item(this.project(["title"]).alias(&this)))?
//!     .build();
//!
//! let query = Cypher::build(statement);
//!
//! assert_eq!(
//!     "MATCH (this:Movie)\nWHERE this.title = $param0\nRETURN this { .title } AS this",
//!     query.text
//! );
//! # Ok(())
//! # }
//! ```
#![deny(rust_2018_idioms, unsafe_code)]

pub mod ast;
pub mod error;
pub mod prelude;
pub mod scope;
pub mod visitor;

pub use error::CompositionError;

//! # query-compiler
//!
//! Turns reads against a [schema model](../schema_model/index.html) into
//! Cypher statements. The entity metadata decides the shape of every query:
//! which attributes are projected and under which property name, which
//! members a union read has to visit, and whether a result is a list or a
//! single value.
//!
//! Translation composes [cypher_builder](../cypher_builder/index.html) clauses
//! and checks them against the running scope. Rendering happens once, at the
//! very end.
#![deny(rust_2018_idioms, unsafe_code)]

mod error;
mod options;
mod translate;

pub mod projection;

pub use error::{TranslateError, TranslateResult};
pub use options::{Direction, GraphQLOptions, SortField};
pub use projection::{add_sort_and_limit_options_to_clause, collect_union_subqueries_results, create_union_subqueries};
pub use translate::{
    AggregateOperation, AggregationSelection, translate_aggregation, translate_concrete_read, translate_union_read,
};

//! An abstract syntax tree for Cypher statements.
//!
//! The ast module handles everything related to building Cypher statements
//! without producing any text. Rendering lives in the
//! [visitor](../visitor/index.html) module.
//!
//! For prelude, all important imports are in `cypher_builder::ast::*`.
mod call;
mod clause;
mod compare;
mod expression;
mod function;
mod map;
mod match_clause;
mod ordering;
mod pattern;
mod projection;
mod returning;
mod union;
mod unwind;
mod values;
mod variable;
mod with;

pub use call::Call;
pub use clause::{Clause, concat};
pub use compare::{Comparable, Condition, ConditionTree};
pub use expression::{Expression, Property};
pub use function::*;
pub use map::{MapExpression, MapProjection};
pub use match_clause::Match;
pub use ordering::{IntoOrderDefinition, Order, OrderDefinition, Orderable, Ordering};
pub use pattern::NodePattern;
pub use projection::{Aliasable, Projection, ProjectionClause, ProjectionItem};
pub use returning::Return;
pub use union::Union;
pub use unwind::Unwind;
pub use values::{IntoRaw, Params, Raw, Value};
pub use variable::{Variable, VariableAllocator};
pub use with::With;

mod aggregate;
mod read;
mod union;

pub use aggregate::{AggregateOperation, AggregationSelection, translate_aggregation};
pub use read::translate_concrete_read;
pub use union::translate_union_read;

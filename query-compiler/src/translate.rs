mod query;

pub use query::{
    AggregateOperation, AggregationSelection, translate_aggregation, translate_concrete_read, translate_union_read,
};

use crate::{TranslateError, TranslateResult};
use schema_model::{
    SchemaModel,
    walkers::{CompositeEntityWalker, ConcreteEntityWalker, EntityWalker},
};

/// The variable every statement returns its result under.
pub(crate) const ROOT: &str = "this";

pub(crate) fn find_concrete<'db>(model: &'db SchemaModel, name: &str) -> TranslateResult<ConcreteEntityWalker<'db>> {
    match model.find_entity(name) {
        Some(EntityWalker::Concrete(entity)) => Ok(entity),
        Some(EntityWalker::Composite(_)) => Err(TranslateError::NotAConcreteEntity { name: name.to_owned() }),
        None => Err(TranslateError::entity_not_found(name)),
    }
}

pub(crate) fn find_composite<'db>(model: &'db SchemaModel, name: &str) -> TranslateResult<CompositeEntityWalker<'db>> {
    match model.find_entity(name) {
        Some(EntityWalker::Composite(entity)) => Ok(entity),
        Some(EntityWalker::Concrete(_)) => Err(TranslateError::NotACompositeEntity { name: name.to_owned() }),
        None => Err(TranslateError::entity_not_found(name)),
    }
}

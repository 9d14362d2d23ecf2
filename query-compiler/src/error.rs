use crate::translate::AggregateOperation;
use cypher_builder::CompositionError;
use thiserror::Error;

pub type TranslateResult<T> = Result<T, TranslateError>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TranslateError {
    #[error("Entity `{name}` does not exist in the schema.")]
    EntityNotFound { name: String },

    #[error("Entity `{name}` is not an object type.")]
    NotAConcreteEntity { name: String },

    #[error("Entity `{name}` is not a union.")]
    NotACompositeEntity { name: String },

    #[error("Entity `{entity}` has no attribute `{attribute}`.")]
    AttributeNotFound { entity: String, attribute: String },

    #[error("Attribute `{entity}.{attribute}` is resolved by a @cypher statement and cannot be read as a property.")]
    CustomStatementAttribute { entity: String, attribute: String },

    #[error("Aggregation `{operation}` is not available on attribute `{entity}.{attribute}`.")]
    UnsupportedAggregation {
        entity: String,
        attribute: String,
        operation: AggregateOperation,
    },

    #[error("{}", _0)]
    Composition(#[from] CompositionError),
}

impl TranslateError {
    pub(crate) fn entity_not_found(name: &str) -> Self {
        Self::EntityNotFound { name: name.to_owned() }
    }

    pub(crate) fn attribute_not_found(entity: &str, attribute: &str) -> Self {
        Self::AttributeNotFound {
            entity: entity.to_owned(),
            attribute: attribute.to_owned(),
        }
    }
}

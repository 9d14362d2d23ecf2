use thiserror::Error;

/// Everything that makes a set of type definitions unusable. Generation stops
/// at the first error, no partial model is ever returned.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SchemaError {
    #[error("Failed to parse the type definitions: {0}")]
    Parse(String),

    #[error("Duplicate node {name}")]
    DuplicateEntity { name: String },

    #[error("Duplicate attribute {attribute} on {entity}")]
    DuplicateAttribute { entity: String, attribute: String },

    #[error("Could not find concrete entity with name {member} in composite entity {composite}")]
    UnresolvedCompositeMember { composite: String, member: String },

    #[error("Composite entity {name} has no concrete entities")]
    EmptyComposite { name: String },

    #[error("@cypher statement required on {entity}.{field}")]
    MissingStatement { entity: String, field: String },

    #[error("@{directive} argument `{argument}` required on {entity}.{field}")]
    MissingAnnotationArgument {
        directive: String,
        argument: String,
        entity: String,
        field: String,
    },
}

impl SchemaError {
    pub fn parse(message: impl ToString) -> Self {
        Self::Parse(message.to_string())
    }

    pub(crate) fn missing_argument(directive: &str, argument: &str, entity: &str, field: &str) -> Self {
        Self::MissingAnnotationArgument {
            directive: directive.to_owned(),
            argument: argument.to_owned(),
            entity: entity.to_owned(),
            field: field.to_owned(),
        }
    }
}

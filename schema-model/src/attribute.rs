use crate::{annotation::Annotation, config::GeneratorConfig};
use graphql_parser::schema::{Text, Type};
use std::fmt;

/// The scalar types an attribute can have.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Boolean,
    ID,
    Int,
    BigInt,
    Float,
    String,
    DateTime,
    LocalDateTime,
    Time,
    LocalTime,
    Date,
    Duration,
    Point,
    CartesianPoint,
    /// A scalar declared by the schema author and enabled in the
    /// [GeneratorConfig](struct.GeneratorConfig.html).
    Custom(String),
}

impl ScalarKind {
    /// Resolves a type name to a scalar kind. `None` for anything that is
    /// not a scalar, such as object types and unions.
    pub fn from_type_name(name: &str, config: &GeneratorConfig) -> Option<Self> {
        let kind = match name {
            "Boolean" => Self::Boolean,
            "ID" => Self::ID,
            "Int" => Self::Int,
            "BigInt" => Self::BigInt,
            "Float" => Self::Float,
            "String" => Self::String,
            "DateTime" => Self::DateTime,
            "LocalDateTime" => Self::LocalDateTime,
            "Time" => Self::Time,
            "LocalTime" => Self::LocalTime,
            "Date" => Self::Date,
            "Duration" => Self::Duration,
            "Point" => Self::Point,
            "CartesianPoint" => Self::CartesianPoint,
            name if config.is_custom_scalar(name) => Self::Custom(name.to_owned()),
            _ => return None,
        };

        Some(kind)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => "Boolean",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::BigInt => "BigInt",
            Self::Float => "Float",
            Self::String => "String",
            Self::DateTime => "DateTime",
            Self::LocalDateTime => "LocalDateTime",
            Self::Time => "Time",
            Self::LocalTime => "LocalTime",
            Self::Date => "Date",
            Self::Duration => "Duration",
            Self::Point => "Point",
            Self::CartesianPoint => "CartesianPoint",
            Self::Custom(name) => name,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::BigInt | Self::Float)
    }

    /// Strings and identifiers, compared by length when aggregated.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::String | Self::ID)
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::DateTime | Self::LocalDateTime | Self::Time | Self::LocalTime | Self::Date | Self::Duration
        )
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    Scalar(ScalarKind),
    /// A reference to another entity by name.
    Entity(String),
}

/// The declared type of an attribute. `[String!]!` is a required list of
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeType {
    pub kind: AttributeKind,
    pub is_list: bool,
    pub is_required: bool,
}

impl AttributeType {
    /// Reads a field type, resolving the innermost named type with `resolve`.
    pub(crate) fn from_field_type<'a, T, F>(field_type: &Type<'a, T>, resolve: F) -> Self
    where
        T: Text<'a>,
        F: FnOnce(&str) -> AttributeKind,
    {
        let (is_required, inner) = match field_type {
            Type::NonNullType(inner) => (true, inner.as_ref()),
            other => (false, other),
        };

        let mut is_list = false;
        let mut current = inner;

        let name = loop {
            match current {
                Type::NamedType(name) => break name.as_ref(),
                Type::ListType(inner) => {
                    is_list = true;
                    current = &**inner;
                }
                Type::NonNullType(inner) => current = &**inner,
            }
        };

        Self {
            kind: resolve(name),
            is_list,
            is_required,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarKind> {
        match &self.kind {
            AttributeKind::Scalar(kind) => Some(kind),
            AttributeKind::Entity(_) => None,
        }
    }
}

/// A typed field of a concrete entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) attribute_type: AttributeType,
    pub(crate) annotations: Vec<Annotation>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, attribute_type: AttributeType, annotations: Vec<Annotation>) -> Self {
        Self {
            name: name.into(),
            attribute_type,
            annotations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute_type(&self) -> &AttributeType {
        &self.attribute_type
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(field_type: &Type<'static, String>) -> AttributeType {
        AttributeType::from_field_type(field_type, |name| {
            ScalarKind::from_type_name(name, &GeneratorConfig::default())
                .map(AttributeKind::Scalar)
                .unwrap_or_else(|| AttributeKind::Entity(name.to_owned()))
        })
    }

    #[test]
    fn required_lists_of_required_scalars() {
        let field_type = Type::NonNullType(Box::new(Type::ListType(Box::new(Type::NonNullType(Box::new(
            Type::NamedType("String".to_owned()),
        ))))));

        let attribute_type = read(&field_type);

        assert_eq!(AttributeKind::Scalar(ScalarKind::String), attribute_type.kind);
        assert!(attribute_type.is_list);
        assert!(attribute_type.is_required);
    }

    #[test]
    fn optional_named_types() {
        let attribute_type = read(&Type::NamedType("Actor".to_owned()));

        assert_eq!(AttributeKind::Entity("Actor".into()), attribute_type.kind);
        assert!(!attribute_type.is_list);
        assert!(!attribute_type.is_required);
    }

    #[test]
    fn custom_scalars_need_to_be_enabled() {
        let config = GeneratorConfig::default().with_custom_scalar("Email");

        assert_eq!(None, ScalarKind::from_type_name("Email", &GeneratorConfig::default()));
        assert_eq!(
            Some(ScalarKind::Custom("Email".into())),
            ScalarKind::from_type_name("Email", &config)
        );
    }
}

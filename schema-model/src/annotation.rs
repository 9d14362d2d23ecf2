use crate::error::SchemaError;
use graphql_parser::schema::{Directive, Text, Value};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use tracing::trace;

/// A recognized directive on an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// `@cypher(statement: "...")`, the attribute is resolved by a custom statement.
    Cypher(CypherAnnotation),
    /// `@alias(property: "...")`, the attribute is stored under another property name.
    Alias(AliasAnnotation),
    /// `@id`
    Id,
    /// `@unique(constraintName: "...")`
    Unique(UniqueAnnotation),
}

impl Annotation {
    pub fn as_cypher(&self) -> Option<&CypherAnnotation> {
        match self {
            Annotation::Cypher(cypher) => Some(cypher),
            _ => None,
        }
    }

    pub fn as_alias(&self) -> Option<&AliasAnnotation> {
        match self {
            Annotation::Alias(alias) => Some(alias),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CypherAnnotation {
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasAnnotation {
    pub property: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueAnnotation {
    pub constraint_name: Option<String>,
}

/// A directive argument value, by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    Enum(String),
    List(Vec<ArgumentValue>),
    Object(BTreeMap<String, ArgumentValue>),
    Null,
    Variable(String),
}

impl ArgumentValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgumentValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ArgumentValue::String(_) => "string",
            ArgumentValue::Int(_) => "int",
            ArgumentValue::Float(_) => "float",
            ArgumentValue::Boolean(_) => "boolean",
            ArgumentValue::Enum(_) => "enum",
            ArgumentValue::List(_) => "list",
            ArgumentValue::Object(_) => "object",
            ArgumentValue::Null => "null",
            ArgumentValue::Variable(_) => "variable",
        }
    }
}

impl<'a, T> From<&Value<'a, T>> for ArgumentValue
where
    T: Text<'a>,
{
    fn from(value: &Value<'a, T>) -> Self {
        match value {
            Value::Variable(name) => ArgumentValue::Variable(name.as_ref().to_owned()),
            Value::Int(i) => i.as_i64().map_or(ArgumentValue::Null, ArgumentValue::Int),
            Value::Float(f) => ArgumentValue::Float(*f),
            Value::String(s) => ArgumentValue::String(s.clone()),
            Value::Boolean(b) => ArgumentValue::Boolean(*b),
            Value::Null => ArgumentValue::Null,
            Value::Enum(e) => ArgumentValue::Enum(e.as_ref().to_owned()),
            Value::List(values) => ArgumentValue::List(values.iter().map(ArgumentValue::from).collect()),
            Value::Object(map) => ArgumentValue::Object(
                map.iter()
                    .map(|(k, v)| (k.as_ref().to_owned(), ArgumentValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// The string arguments of a directive.
///
/// Only string values are read into annotations. Arguments of any other
/// kind are skipped, so `@cypher(statement: 1)` reads as if `statement` was
/// not given at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveArguments {
    values: IndexMap<String, String>,
}

impl DirectiveArguments {
    pub fn new<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = (S, ArgumentValue)>,
        S: Into<String>,
    {
        let mut values = IndexMap::new();

        for (name, value) in arguments {
            let name = name.into();

            match value {
                ArgumentValue::String(s) => {
                    values.insert(name, s);
                }
                other => trace!(argument = %name, kind = other.kind(), "skipping non-string directive argument"),
            }
        }

        Self { values }
    }

    pub fn from_directive<'a, T>(directive: &Directive<'a, T>) -> Self
    where
        T: Text<'a>,
    {
        Self::new(
            directive
                .arguments
                .iter()
                .map(|(name, value)| (name.as_ref(), ArgumentValue::from(value))),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Reads the recognized directives of a field into annotations, in
/// declaration order. Unrecognized directives are skipped.
pub(crate) fn parse_annotations<'a, T>(
    directives: &[Directive<'a, T>],
    entity: &str,
    field: &str,
) -> Result<Vec<Annotation>, SchemaError>
where
    T: Text<'a>,
{
    let mut annotations = Vec::with_capacity(directives.len());

    for directive in directives {
        let arguments = DirectiveArguments::from_directive(directive);

        let annotation = match directive.name.as_ref() {
            "cypher" => {
                let statement = arguments
                    .get("statement")
                    .filter(|statement| !statement.is_empty())
                    .ok_or_else(|| SchemaError::MissingStatement {
                        entity: entity.to_owned(),
                        field: field.to_owned(),
                    })?;

                Annotation::Cypher(CypherAnnotation {
                    statement: statement.to_owned(),
                })
            }
            "alias" => {
                let property = arguments
                    .get("property")
                    .filter(|property| !property.is_empty())
                    .ok_or_else(|| SchemaError::missing_argument("alias", "property", entity, field))?;

                Annotation::Alias(AliasAnnotation {
                    property: property.to_owned(),
                })
            }
            "id" => Annotation::Id,
            "unique" => Annotation::Unique(UniqueAnnotation {
                constraint_name: arguments.get("constraintName").map(ToOwned::to_owned),
            }),
            name => {
                trace!(directive = name, entity, field, "skipping unrecognized directive");
                continue;
            }
        };

        annotations.push(annotation);
    }

    Ok(annotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_string_arguments_are_kept() {
        let arguments = DirectiveArguments::new([
            ("statement", ArgumentValue::String("RETURN 1".into())),
            ("limit", ArgumentValue::Int(10)),
            ("columnName", ArgumentValue::Enum("NAME".into())),
            ("nested", ArgumentValue::List(vec![ArgumentValue::String("a".into())])),
        ]);

        assert_eq!(1, arguments.len());
        assert_eq!(Some("RETURN 1"), arguments.get("statement"));
        assert_eq!(None, arguments.get("limit"));
        assert_eq!(None, arguments.get("nested"));
    }

    #[test]
    fn later_arguments_win() {
        let arguments = DirectiveArguments::new([
            ("property", ArgumentValue::String("first".into())),
            ("property", ArgumentValue::String("second".into())),
        ]);

        assert_eq!(Some("second"), arguments.get("property"));
    }

    #[test]
    fn annotation_accessors() {
        let cypher = Annotation::Cypher(CypherAnnotation {
            statement: "RETURN 1".into(),
        });

        assert_eq!("RETURN 1", cypher.as_cypher().unwrap().statement);
        assert!(cypher.as_alias().is_none());
    }
}

use crate::ast::*;

/// A Cypher expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A bound variable.
    Variable(Variable),
    /// Property access, `variable.key`.
    Property(Property),
    /// A value extracted into the parameter map.
    Parameter(Value),
    /// A value written into the query text.
    Raw(Raw),
    /// A list literal, `[a, b]`.
    List(Vec<Expression>),
    /// A map literal, `{ key: value }`.
    Map(MapExpression),
    /// A map projection, `variable { .key, other: value }`.
    MapProjection(MapProjection),
    /// A function call or aggregation.
    Function(Function),
}

impl Expression {
    /// Visits every variable referenced by the expression, in order.
    pub(crate) fn for_each_variable<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Variable, Option<&'a str>),
    {
        match self {
            Expression::Variable(variable) => f(variable, None),
            Expression::Property(property) => f(&property.variable, Some(&property.key)),
            Expression::Parameter(_) | Expression::Raw(_) => (),
            Expression::List(items) => {
                for item in items {
                    item.for_each_variable(f);
                }
            }
            Expression::Map(map) => {
                for value in map.entries.values() {
                    value.for_each_variable(f);
                }
            }
            Expression::MapProjection(projection) => {
                f(&projection.variable, None);

                for (key, value) in projection.items.iter() {
                    match value {
                        Some(value) => value.for_each_variable(f),
                        None => f(&projection.variable, Some(key)),
                    }
                }
            }
            Expression::Function(function) => function.argument().for_each_variable(f),
        }
    }

    /// True if an aggregating function appears anywhere in the expression.
    pub fn contains_aggregate(&self) -> bool {
        match self {
            Expression::Function(function) => function.is_aggregate() || function.argument().contains_aggregate(),
            Expression::List(items) => items.iter().any(Expression::contains_aggregate),
            Expression::Map(map) => map.entries.values().any(Expression::contains_aggregate),
            Expression::MapProjection(projection) => projection.values().any(Expression::contains_aggregate),
            Expression::Variable(_) | Expression::Property(_) | Expression::Parameter(_) | Expression::Raw(_) => false,
        }
    }

    /// The variable itself when the expression is a bare variable.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Expression::Variable(variable) => Some(variable),
            _ => None,
        }
    }
}

/// Property access on a variable, `variable.key`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub(crate) variable: Variable,
    pub(crate) key: String,
}

impl Property {
    pub fn new(variable: Variable, key: impl Into<String>) -> Self {
        Self {
            variable,
            key: key.into(),
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl From<Property> for Expression {
    fn from(property: Property) -> Self {
        Expression::Property(property)
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Parameter(value)
    }
}

impl From<Raw> for Expression {
    fn from(raw: Raw) -> Self {
        Expression::Raw(raw)
    }
}

impl From<Vec<Expression>> for Expression {
    fn from(items: Vec<Expression>) -> Self {
        Expression::List(items)
    }
}

macro_rules! parameterized {
    ($($kind:ty),*) => (
        $(
            impl From<$kind> for Expression {
                fn from(value: $kind) -> Self {
                    Expression::Parameter(value.into())
                }
            }
        )*
    );
}

parameterized!(&str, String, bool, i32, i64, f64);

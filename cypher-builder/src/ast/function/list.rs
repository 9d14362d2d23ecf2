use super::Function;
use crate::ast::Expression;

#[derive(Debug, Clone, PartialEq)]
pub struct Head {
    pub(crate) expression: Box<Expression>,
}

/// The first element of a list, or null for an empty list.
///
/// ```rust
/// # use cypher_builder::{ast::*, visitor::{Visitor, Cypher}};
/// let mut variables = VariableAllocator::new();
/// let result = variables.variable();
///
/// let query = Cypher::build(Return::new().item(head(collect(&result)).alias(&result)));
/// assert_eq!("RETURN head(collect(var0)) AS var0", query.text);
/// ```
pub fn head<E>(expression: E) -> Function
where
    E: Into<Expression>,
{
    Head {
        expression: Box::new(expression.into()),
    }
    .into()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Last {
    pub(crate) expression: Box<Expression>,
}

/// The last element of a list, or null for an empty list.
pub fn last<E>(expression: E) -> Function
where
    E: Into<Expression>,
{
    Last {
        expression: Box::new(expression.into()),
    }
    .into()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Size {
    pub(crate) expression: Box<Expression>,
}

/// The length of a string or a list.
pub fn size<E>(expression: E) -> Function
where
    E: Into<Expression>,
{
    Size {
        expression: Box::new(expression.into()),
    }
    .into()
}

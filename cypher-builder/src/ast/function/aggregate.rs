use super::Function;
use crate::ast::Expression;

#[derive(Debug, Clone, PartialEq)]
pub struct Collect {
    pub(crate) expression: Box<Expression>,
    pub(crate) distinct: bool,
}

impl Collect {
    /// Drops duplicate values, `collect(DISTINCT x)`.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}

/// Aggregates the values into an ordered list.
///
/// ```rust
/// # use cypher_builder::{ast::*, visitor::{Visitor, Cypher}};
/// let mut variables = VariableAllocator::new();
/// let this = variables.named("this");
///
/// let query = Cypher::build(Return::new().item(collect(&this).alias(&this)));
/// assert_eq!("RETURN collect(this) AS this", query.text);
/// ```
pub fn collect<E>(expression: E) -> Collect
where
    E: Into<Expression>,
{
    Collect {
        expression: Box::new(expression.into()),
        distinct: false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    pub(crate) expression: Box<Expression>,
    pub(crate) distinct: bool,
}

impl Count {
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}

/// Counts the non-null values.
pub fn count<E>(expression: E) -> Count
where
    E: Into<Expression>,
{
    Count {
        expression: Box::new(expression.into()),
        distinct: false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Min {
    pub(crate) expression: Box<Expression>,
}

pub fn min<E>(expression: E) -> Function
where
    E: Into<Expression>,
{
    Min {
        expression: Box::new(expression.into()),
    }
    .into()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Max {
    pub(crate) expression: Box<Expression>,
}

pub fn max<E>(expression: E) -> Function
where
    E: Into<Expression>,
{
    Max {
        expression: Box::new(expression.into()),
    }
    .into()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Average {
    pub(crate) expression: Box<Expression>,
}

/// The arithmetic mean, `avg(x)`.
pub fn avg<E>(expression: E) -> Function
where
    E: Into<Expression>,
{
    Average {
        expression: Box::new(expression.into()),
    }
    .into()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sum {
    pub(crate) expression: Box<Expression>,
}

pub fn sum<E>(expression: E) -> Function
where
    E: Into<Expression>,
{
    Sum {
        expression: Box::new(expression.into()),
    }
    .into()
}

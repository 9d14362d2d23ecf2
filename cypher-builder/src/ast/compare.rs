use crate::ast::Expression;

/// A comparison between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equals(Box<Expression>, Box<Expression>),
    NotEquals(Box<Expression>, Box<Expression>),
    IsNull(Box<Expression>),
    IsNotNull(Box<Expression>),
}

impl Condition {
    pub(crate) fn expressions(&self) -> impl Iterator<Item = &Expression> {
        let (left, right) = match self {
            Condition::Equals(left, right) | Condition::NotEquals(left, right) => (&**left, Some(&**right)),
            Condition::IsNull(expr) | Condition::IsNotNull(expr) => (&**expr, None),
        };

        std::iter::once(left).chain(right)
    }
}

/// A conjunction of conditions, rendered as a `WHERE` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionTree(pub(crate) Vec<Condition>);

impl ConditionTree {
    pub fn and(mut self, condition: Condition) -> Self {
        self.0.push(condition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.0.iter()
    }
}

impl From<Condition> for ConditionTree {
    fn from(condition: Condition) -> Self {
        ConditionTree(vec![condition])
    }
}

pub trait Comparable {
    /// Tests if both sides are the same value.
    ///
    /// ```rust
    /// # use cypher_builder::{ast::*, visitor::{Visitor, Cypher}};
    /// let mut variables = VariableAllocator::new();
    /// let this = variables.named("this");
    ///
    /// let query = Match::new(NodePattern::new(&this)).so_that(this.property("title").equals("Matrix"));
    /// let query = Cypher::build(query);
    ///
    /// assert_eq!("MATCH (this)\nWHERE this.title = $param0", query.text);
    /// assert_eq!(Some(&Value::from("Matrix")), query.params.get("param0"));
    /// ```
    fn equals<T>(self, comparison: T) -> Condition
    where
        T: Into<Expression>;

    /// Tests if both sides are not the same value.
    fn not_equals<T>(self, comparison: T) -> Condition
    where
        T: Into<Expression>;

    /// Tests if the left side is `null`.
    fn is_null(self) -> Condition;

    /// Tests if the left side is not `null`.
    fn is_not_null(self) -> Condition;
}

impl<U> Comparable for U
where
    U: Into<Expression>,
{
    fn equals<T>(self, comparison: T) -> Condition
    where
        T: Into<Expression>,
    {
        Condition::Equals(Box::new(self.into()), Box::new(comparison.into()))
    }

    fn not_equals<T>(self, comparison: T) -> Condition
    where
        T: Into<Expression>,
    {
        Condition::NotEquals(Box::new(self.into()), Box::new(comparison.into()))
    }

    fn is_null(self) -> Condition {
        Condition::IsNull(Box::new(self.into()))
    }

    fn is_not_null(self) -> Condition {
        Condition::IsNotNull(Box::new(self.into()))
    }
}

use crate::ast::*;

/// A builder for an `UNWIND` clause, `UNWIND list AS alias`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unwind {
    pub(crate) expression: Expression,
    pub(crate) alias: Variable,
}

impl Unwind {
    pub fn new<E>(expression: E, alias: &Variable) -> Self
    where
        E: Into<Expression>,
    {
        Self {
            expression: expression.into(),
            alias: alias.clone(),
        }
    }
}

impl From<Unwind> for Clause {
    fn from(unwind: Unwind) -> Self {
        Clause::Unwind(unwind)
    }
}

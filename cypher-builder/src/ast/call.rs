use crate::ast::*;

/// A subquery, `CALL { WITH imported ... }`.
///
/// The body only sees the imported variables. Whatever the body returns is
/// bound in the enclosing statement after the call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub(crate) imports: Vec<Variable>,
    pub(crate) body: Box<Clause>,
}

impl Call {
    pub fn new<C>(body: C) -> Self
    where
        C: Into<Clause>,
    {
        Self {
            imports: Vec::new(),
            body: Box::new(body.into()),
        }
    }

    /// Makes an outer variable visible inside the body.
    pub fn import(mut self, variable: &Variable) -> Self {
        if !self.imports.contains(variable) {
            self.imports.push(variable.clone());
        }

        self
    }

    pub fn body(&self) -> &Clause {
        &self.body
    }
}

impl From<Call> for Clause {
    fn from(call: Call) -> Self {
        Clause::Call(call)
    }
}

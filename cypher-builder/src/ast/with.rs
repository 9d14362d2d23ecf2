use crate::ast::*;

/// A builder for a `WITH` clause. It carries the projected variables forward
/// and hides everything else from the clauses that follow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct With {
    pub(crate) projection: Projection,
}

impl With {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carries the given variables forward unchanged.
    ///
    /// ```rust
    /// # use cypher_builder::{ast::*, visitor::{Visitor, Cypher}};
    /// let mut variables = VariableAllocator::new();
    /// let this = variables.named("this");
    ///
    /// let query = With::variables([&this]).order_by(this.property("title").descend()).limit(10);
    /// let query = Cypher::build(query);
    ///
    /// assert_eq!("WITH this\nORDER BY this.title DESC\nLIMIT $param0", query.text);
    /// ```
    pub fn variables<'a, I>(variables: I) -> Self
    where
        I: IntoIterator<Item = &'a Variable>,
    {
        variables.into_iter().fold(Self::new(), |with, variable| with.item(variable))
    }
}

impl ProjectionClause for With {
    fn projection(&self) -> &Projection {
        &self.projection
    }

    fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }
}

impl From<With> for Clause {
    fn from(with: With) -> Self {
        Clause::With(with)
    }
}

use crate::ast::*;

/// A builder for a `RETURN` clause. Nothing but a `UNION` can follow it in
/// the same statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Return {
    pub(crate) projection: Projection,
}

impl Return {
    pub fn new() -> Self {
        Self::default()
    }

    /// The returned column names, in order. Items without an alias and
    /// without a plain variable get no name and are left out.
    pub fn columns(&self) -> impl Iterator<Item = &Variable> {
        self.projection.items.iter().filter_map(ProjectionItem::output_variable)
    }
}

impl ProjectionClause for Return {
    fn projection(&self) -> &Projection {
        &self.projection
    }

    fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }
}

impl From<Return> for Clause {
    fn from(ret: Return) -> Self {
        Clause::Return(ret)
    }
}

use crate::ast::*;

/// A set operation over statements returning the same columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    pub(crate) branches: Vec<Clause>,
    pub(crate) all: bool,
}

impl Union {
    /// `UNION`, removing duplicate rows.
    pub fn distinct<I, C>(branches: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Clause>,
    {
        Self {
            branches: branches.into_iter().map(Into::into).collect(),
            all: false,
        }
    }

    /// `UNION ALL`, keeping duplicate rows.
    pub fn all<I, C>(branches: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Clause>,
    {
        Self {
            branches: branches.into_iter().map(Into::into).collect(),
            all: true,
        }
    }

    pub fn branches(&self) -> &[Clause] {
        &self.branches
    }
}

impl From<Union> for Clause {
    fn from(union: Union) -> Self {
        Clause::Union(union)
    }
}

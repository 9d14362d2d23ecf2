//! Error module
use thiserror::Error;

/// Raised while composing clauses into a sequence. A tree that composed
/// without an error always renders.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CompositionError {
    #[error("Variable `{name}` is not defined in the current scope.")]
    OutOfScopeVariable { name: String },

    #[error("Variable `{name}` is already defined in the current scope.")]
    VariableAlreadyBound { name: String },

    #[error("Property `{key}` is not visible on variable `{variable}`.")]
    UnknownProperty { variable: String, key: String },

    #[error("Cannot sort by `{key}`: it is not a visible property of `{variable}`.")]
    InvalidSortKey { variable: String, key: String },

    #[error("{modifier} value {value} exceeds the largest Cypher integer.")]
    PaginationOutOfRange { modifier: String, value: u64 },

    #[error("Expressions projected by WITH must be aliased.")]
    UnaliasedProjection,

    #[error("Column `{name}` is projected more than once.")]
    DuplicateColumn { name: String },

    #[error("All sub queries in a UNION must return the same columns, found [{left}] and [{right}].")]
    UnionColumnMismatch { left: String, right: String },

    #[error("Every branch of a UNION must end with a RETURN clause.")]
    UnionWithoutReturn,

    #[error("A UNION needs at least one branch.")]
    EmptyUnion,

    #[error("No clause can follow a RETURN clause in the same statement.")]
    ClauseAfterReturn,
}

impl CompositionError {
    pub(crate) fn out_of_scope(name: impl Into<String>) -> Self {
        Self::OutOfScopeVariable { name: name.into() }
    }

    /// Re-labels a property lookup failure as a failing sort key.
    pub(crate) fn into_sort_key_error(self) -> Self {
        match self {
            Self::UnknownProperty { variable, key } => Self::InvalidSortKey { variable, key },
            other => other,
        }
    }
}

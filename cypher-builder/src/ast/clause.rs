use crate::ast::*;

/// A statement-level node of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Match(Match),
    With(With),
    Return(Return),
    Unwind(Unwind),
    Call(Call),
    Union(Union),
    /// Clauses of one statement, in order.
    Concat(Vec<Clause>),
}

impl Clause {
    /// An empty statement, rendering to nothing.
    pub fn empty() -> Self {
        Clause::Concat(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Clause::Concat(clauses) if clauses.iter().all(Clause::is_empty))
    }
}

/// Concatenates clauses into one statement, flattening nested
/// concatenations. Does not check scoping; see
/// [ClauseSequence](../scope/struct.ClauseSequence.html) for the checked
/// variant.
pub fn concat<I, C>(clauses: I) -> Clause
where
    I: IntoIterator<Item = C>,
    C: Into<Clause>,
{
    let mut flat = Vec::new();

    for clause in clauses {
        match clause.into() {
            Clause::Concat(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }

    Clause::Concat(flat)
}

mod aggregate;
mod list;

pub use aggregate::*;
pub use list::*;

use super::Expression;

/// A Cypher function call.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub(crate) typ_: FunctionType,
}

/// A Cypher function type
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FunctionType {
    Collect(Collect),
    Count(Count),
    Min(Min),
    Max(Max),
    Average(Average),
    Sum(Sum),
    Head(Head),
    Last(Last),
    Size(Size),
}

impl Function {
    /// The function name as written in Cypher.
    pub fn name(&self) -> &'static str {
        match self.typ_ {
            FunctionType::Collect(_) => "collect",
            FunctionType::Count(_) => "count",
            FunctionType::Min(_) => "min",
            FunctionType::Max(_) => "max",
            FunctionType::Average(_) => "avg",
            FunctionType::Sum(_) => "sum",
            FunctionType::Head(_) => "head",
            FunctionType::Last(_) => "last",
            FunctionType::Size(_) => "size",
        }
    }

    /// Aggregating functions collapse the rows they run over.
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self.typ_,
            FunctionType::Collect(_)
                | FunctionType::Count(_)
                | FunctionType::Min(_)
                | FunctionType::Max(_)
                | FunctionType::Average(_)
                | FunctionType::Sum(_)
        )
    }

    pub(crate) fn argument(&self) -> &Expression {
        match &self.typ_ {
            FunctionType::Collect(f) => &f.expression,
            FunctionType::Count(f) => &f.expression,
            FunctionType::Min(f) => &f.expression,
            FunctionType::Max(f) => &f.expression,
            FunctionType::Average(f) => &f.expression,
            FunctionType::Sum(f) => &f.expression,
            FunctionType::Head(f) => &f.expression,
            FunctionType::Last(f) => &f.expression,
            FunctionType::Size(f) => &f.expression,
        }
    }

    pub(crate) fn into_argument(self) -> Expression {
        let expression = match self.typ_ {
            FunctionType::Collect(f) => f.expression,
            FunctionType::Count(f) => f.expression,
            FunctionType::Min(f) => f.expression,
            FunctionType::Max(f) => f.expression,
            FunctionType::Average(f) => f.expression,
            FunctionType::Sum(f) => f.expression,
            FunctionType::Head(f) => f.expression,
            FunctionType::Last(f) => f.expression,
            FunctionType::Size(f) => f.expression,
        };

        *expression
    }

    pub(crate) fn is_distinct(&self) -> bool {
        match &self.typ_ {
            FunctionType::Collect(f) => f.distinct,
            FunctionType::Count(f) => f.distinct,
            _ => false,
        }
    }
}

macro_rules! function {
    ($($kind:ident),*) => (
        $(
            impl From<$kind> for Function {
                fn from(f: $kind) -> Self {
                    Function {
                        typ_: FunctionType::$kind(f),
                    }
                }
            }

            impl From<$kind> for Expression {
                fn from(f: $kind) -> Self {
                    Function::from(f).into()
                }
            }
        )*
    );
}

function!(Collect, Count, Min, Max, Average, Sum, Head, Last, Size);

impl From<Function> for Expression {
    fn from(f: Function) -> Self {
        Expression::Function(f)
    }
}

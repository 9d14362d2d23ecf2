use crate::options::GraphQLOptions;
use cypher_builder::{CompositionError, ast::*, scope::Scope};

/// Appends the sorting and pagination of `options` to a `WITH` or `RETURN`
/// clause, sorting by properties of `target`.
///
/// Every sort field has to be a property `target` exposes in `scope`, and
/// the offset and limit have to fit a Cypher integer. On error the clause
/// is left untouched.
///
/// ```rust
/// # use cypher_builder::{ast::*, scope::*, visitor::*};
/// # use query_compiler::*;
/// let mut variables = VariableAllocator::new();
/// let this = variables.named("this");
/// let scope = Scope::new().with_binding(&this, Binding::with_properties(["title"]));
///
/// let options = GraphQLOptions::new().sort_by("title", Direction::Desc).limit(10);
///
/// let mut with = With::variables([&this]);
/// add_sort_and_limit_options_to_clause(&options, &this, &mut with, &scope).unwrap();
///
/// assert_eq!("WITH this\nORDER BY this.title DESC\nLIMIT $param0", Cypher::build(with).text);
/// ```
pub fn add_sort_and_limit_options_to_clause<C>(
    options: &GraphQLOptions,
    target: &Variable,
    clause: &mut C,
    scope: &Scope,
) -> Result<(), CompositionError>
where
    C: ProjectionClause,
{
    let binding = scope.binding(target).ok_or_else(|| CompositionError::OutOfScopeVariable {
        name: target.name().to_owned(),
    })?;

    if let Some(sort) = options.sort.iter().find(|sort| !binding.exposes(&sort.field)) {
        return Err(CompositionError::InvalidSortKey {
            variable: target.name().to_owned(),
            key: sort.field.clone(),
        });
    }

    let offset = options.offset.map(|offset| cypher_integer("SKIP", offset)).transpose()?;
    let limit = options.limit.map(|limit| cypher_integer("LIMIT", limit)).transpose()?;

    for sort in options.sort.iter() {
        clause.add_order_by(target.property(sort.field.as_str()).ordered(sort.direction.order()));
    }

    if let Some(offset) = offset {
        clause.set_skip(offset);
    }

    if let Some(limit) = limit {
        clause.set_limit(limit);
    }

    Ok(())
}

fn cypher_integer(modifier: &str, value: u64) -> Result<i64, CompositionError> {
    i64::try_from(value).map_err(|_| CompositionError::PaginationOutOfRange {
        modifier: modifier.to_owned(),
        value,
    })
}

use super::{add_sort_and_limit_options_to_clause, node_pattern, project_attributes, stored_attributes};
use crate::options::GraphQLOptions;
use cypher_builder::{
    CompositionError,
    ast::*,
    scope::{ClauseSequence, Scope},
};
use schema_model::walkers::{CompositeEntityWalker, ConcreteEntityWalker};

/// The map key naming the member a union result came from.
pub const RESOLVE_TYPE: &str = "__resolveType";

/// Reads every member of a union into `result`.
///
/// Each member gets its own branch, `MATCH (node:Member) RETURN node { ... } AS result`,
/// projecting its stored attributes and the member name under
/// [RESOLVE_TYPE](constant.RESOLVE_TYPE.html). The branches are combined
/// with `UNION` inside a `CALL` subquery.
pub fn create_union_subqueries(
    composite: CompositeEntityWalker<'_>,
    variables: &mut VariableAllocator,
    result: &Variable,
) -> Call {
    let mut branches = Vec::with_capacity(composite.members().len());

    for member in composite.members() {
        let node = variables.variable();
        branches.push(member_subquery(member, &node, result));
    }

    Call::new(Union::distinct(branches))
}

fn member_subquery(member: ConcreteEntityWalker<'_>, node: &Variable, result: &Variable) -> Clause {
    let projection = project_attributes(node, stored_attributes(member)).entry(RESOLVE_TYPE, member.name().raw());

    concat([
        Clause::from(Match::new(node_pattern(member, node))),
        Return::new().item(projection.alias(result)).into(),
    ])
}

/// Collects the rows of `result_variable` after sorting and paginating them.
///
/// `WITH result` carries the sorting and pagination of `options`, then the
/// rows are collected into a list. For a single value only the first
/// element of the list is returned.
///
/// ```rust
/// # use cypher_builder::{ast::*, scope::*, visitor::*};
/// # use query_compiler::*;
/// let mut variables = VariableAllocator::new();
/// let result = variables.named("this");
/// let scope = Scope::new().with_binding(&result, Binding::unknown());
///
/// let clause = collect_union_subqueries_results(&scope, &result, &GraphQLOptions::new(), false).unwrap();
///
/// assert_eq!("WITH this\nRETURN head(collect(this)) AS this", Cypher::build(clause).text);
/// ```
pub fn collect_union_subqueries_results(
    scope: &Scope,
    result_variable: &Variable,
    options: &GraphQLOptions,
    is_array: bool,
) -> Result<Clause, CompositionError> {
    let with_sort_clause = create_with_sort_and_pagination_clause(scope, result_variable, options)?;

    let collected = collect(result_variable);

    let return_projection: Expression = if is_array {
        collected.into()
    } else {
        head(collected).into()
    };

    let return_clause = Return::new().item(return_projection.alias(result_variable));

    let statement = ClauseSequence::new(scope.clone())
        .then(with_sort_clause)?
        .then(return_clause)?;

    Ok(statement.build())
}

fn create_with_sort_and_pagination_clause(
    scope: &Scope,
    variable: &Variable,
    options: &GraphQLOptions,
) -> Result<With, CompositionError> {
    let mut with_sort_clause = With::variables([variable]);
    add_sort_and_limit_options_to_clause(options, variable, &mut with_sort_clause, scope)?;

    Ok(with_sort_clause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Direction;
    use cypher_builder::{
        scope::Binding,
        visitor::{Cypher, Visitor},
    };
    use expect_test::expect;
    use pretty_assertions::assert_eq;

    fn result_scope() -> (Variable, Scope) {
        let mut variables = VariableAllocator::new();
        let result = variables.named("r");
        let scope = Scope::new().with_binding(&result, Binding::with_properties(["name", "title"]));

        (result, scope)
    }

    #[test]
    fn lists_sort_and_paginate_before_collecting() {
        let (r, scope) = result_scope();
        let options = GraphQLOptions::new().sort_by("name", Direction::Asc).limit(5);

        let clause = collect_union_subqueries_results(&scope, &r, &options, true).unwrap();

        let expected = expect![[r#"
            WITH r
            ORDER BY r.name ASC
            LIMIT $param0
            RETURN collect(r) AS r"#]];
        expected.assert_eq(&Cypher::build(clause).text);
    }

    #[test]
    fn single_values_take_the_first_collected_element() {
        let (r, scope) = result_scope();
        let options = GraphQLOptions::new().sort_by("title", Direction::Desc).offset(1).limit(1);

        let clause = collect_union_subqueries_results(&scope, &r, &options, false).unwrap();

        let expected = expect![[r#"
            WITH r
            ORDER BY r.title DESC
            SKIP $param0
            LIMIT $param1
            RETURN head(collect(r)) AS r"#]];
        expected.assert_eq(&Cypher::build(clause).text);
    }

    #[test]
    fn the_result_is_an_unrendered_clause_pair() {
        let (r, scope) = result_scope();

        let Clause::Concat(clauses) =
            collect_union_subqueries_results(&scope, &r, &GraphQLOptions::new(), true).unwrap()
        else {
            panic!("expected a clause sequence");
        };

        assert_eq!(2, clauses.len());
        assert!(matches!(clauses[0], Clause::With(_)));
        assert!(matches!(clauses[1], Clause::Return(_)));
    }

    #[test]
    fn sort_keys_must_be_visible_on_the_result() {
        let (r, scope) = result_scope();
        let options = GraphQLOptions::new().sort_by("released", Direction::Asc);

        let error = collect_union_subqueries_results(&scope, &r, &options, true).unwrap_err();

        assert_eq!(
            CompositionError::InvalidSortKey {
                variable: "r".into(),
                key: "released".into(),
            },
            error
        );
    }

    #[test]
    fn the_result_variable_must_be_bound() {
        let (r, _) = result_scope();

        let error = collect_union_subqueries_results(&Scope::new(), &r, &GraphQLOptions::new(), true).unwrap_err();

        assert_eq!(CompositionError::OutOfScopeVariable { name: "r".into() }, error);
    }
}

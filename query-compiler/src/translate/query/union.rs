use crate::{
    TranslateResult,
    options::GraphQLOptions,
    projection::{collect_union_subqueries_results, create_union_subqueries},
    translate::{ROOT, find_composite},
};
use cypher_builder::prelude::*;
use schema_model::SchemaModel;

/// Reads a union-typed root field.
///
/// Every member is matched in its own branch of a `CALL` subquery, the
/// results are then sorted, paginated and collected. With `is_array` unset
/// only the first result is returned.
#[tracing::instrument(skip(model, options))]
pub fn translate_union_read(
    model: &SchemaModel,
    composite_name: &str,
    options: &GraphQLOptions,
    is_array: bool,
) -> TranslateResult<CypherQuery> {
    let composite = find_composite(model, composite_name)?;

    let mut variables = VariableAllocator::new();
    let result = variables.named(ROOT);

    let subqueries = create_union_subqueries(composite, &mut variables, &result);
    let mut sequence = ClauseSequence::new(Scope::new()).then(subqueries)?;

    let collected = collect_union_subqueries_results(sequence.scope(), &result, options, is_array)?;
    sequence.push(collected)?;

    Ok(Cypher::build(sequence.build()))
}

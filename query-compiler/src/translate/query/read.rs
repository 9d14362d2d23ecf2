use crate::{
    TranslateError, TranslateResult,
    options::{GraphQLOptions, SortField},
    projection::{add_sort_and_limit_options_to_clause, node_pattern, project_attributes, stored_attributes},
    translate::{ROOT, find_concrete},
};
use cypher_builder::prelude::*;
use schema_model::{
    SchemaModel,
    walkers::{AttributeWalker, ConcreteEntityWalker},
};

/// Reads the nodes of an object type.
///
/// `selection` names the attributes to return, in order. An empty selection
/// returns every attribute stored on the node. Sort fields use the attribute
/// names of the API and are translated to the properties they are stored
/// under.
#[tracing::instrument(skip(model, options))]
pub fn translate_concrete_read(
    model: &SchemaModel,
    entity_name: &str,
    selection: &[&str],
    options: &GraphQLOptions,
) -> TranslateResult<CypherQuery> {
    let entity = find_concrete(model, entity_name)?;
    let attributes = selected_attributes(entity, selection)?;

    let mut variables = VariableAllocator::new();
    let this = variables.named(ROOT);

    let mut sequence = ClauseSequence::new(Scope::new()).then(Match::new(node_pattern(entity, &this)))?;

    if !options.is_empty() {
        let mut with = With::variables([&this]);
        let options = database_options(entity, &this, options)?;
        add_sort_and_limit_options_to_clause(&options, &this, &mut with, sequence.scope())?;
        sequence.push(with)?;
    }

    sequence.push(Return::new().item(project_attributes(&this, attributes).alias(&this)))?;

    Ok(Cypher::build(sequence.build()))
}

fn selected_attributes<'db>(
    entity: ConcreteEntityWalker<'db>,
    selection: &[&str],
) -> TranslateResult<Vec<AttributeWalker<'db>>> {
    if selection.is_empty() {
        return Ok(stored_attributes(entity).collect());
    }

    selection
        .iter()
        .map(|name| {
            let attribute = entity
                .find_attribute(name)
                .ok_or_else(|| TranslateError::attribute_not_found(entity.name(), name))?;

            if attribute.cypher_annotation().is_some() {
                return Err(TranslateError::CustomStatementAttribute {
                    entity: entity.name().to_owned(),
                    attribute: attribute.name().to_owned(),
                });
            }

            Ok(attribute)
        })
        .collect()
}

/// Sorting happens before the projection, on the stored properties. Sort
/// fields must name stored attributes of the API.
fn database_options(
    entity: ConcreteEntityWalker<'_>,
    this: &Variable,
    options: &GraphQLOptions,
) -> TranslateResult<GraphQLOptions> {
    let sort = options
        .sort
        .iter()
        .map(|sort| -> TranslateResult<SortField> {
            let attribute = entity
                .find_attribute(&sort.field)
                .filter(|attribute| attribute.cypher_annotation().is_none())
                .ok_or_else(|| CompositionError::InvalidSortKey {
                    variable: this.name().to_owned(),
                    key: sort.field.clone(),
                })?;

            Ok(SortField {
                field: attribute.database_name().to_owned(),
                direction: sort.direction,
            })
        })
        .collect::<TranslateResult<Vec<_>>>()?;

    Ok(GraphQLOptions { sort, ..options.clone() })
}

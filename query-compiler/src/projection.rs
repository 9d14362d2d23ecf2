//! Building blocks shared by the translations: projecting the attributes of
//! an entity, sorting and paginating a projection, and reading the members of
//! a union.

mod sort_and_limit;
mod subquery;

pub use sort_and_limit::add_sort_and_limit_options_to_clause;
pub use subquery::{RESOLVE_TYPE, collect_union_subqueries_results, create_union_subqueries};

use cypher_builder::ast::*;
use schema_model::walkers::{AttributeWalker, ConcreteEntityWalker};

/// Attributes resolved by a `@cypher` statement are not stored on the node.
pub(crate) fn stored_attributes<'db>(
    entity: ConcreteEntityWalker<'db>,
) -> impl Iterator<Item = AttributeWalker<'db>> + 'db {
    entity
        .attributes()
        .filter(|attribute| attribute.cypher_annotation().is_none())
}

/// `MATCH (node:Entity)`, with the stored property names known to the scope.
pub(crate) fn node_pattern(entity: ConcreteEntityWalker<'_>, node: &Variable) -> NodePattern {
    NodePattern::new(node)
        .label(entity.name())
        .known_properties(stored_attributes(entity).map(|attribute| attribute.database_name()))
}

/// Projects the attributes under their API names, in order. Aliased
/// attributes read the property they are stored under,
/// `node { .title, myName: node.name }`.
pub(crate) fn project_attributes<'db, I>(node: &Variable, attributes: I) -> MapProjection
where
    I: IntoIterator<Item = AttributeWalker<'db>>,
{
    attributes
        .into_iter()
        .fold(MapProjection::new(node), |projection, attribute| match attribute.alias() {
            Some(property) => projection.entry(attribute.name(), node.property(property)),
            None => projection.property(attribute.name()),
        })
}

use crate::{
    TranslateError, TranslateResult,
    projection::node_pattern,
    translate::{ROOT, find_concrete},
};
use cypher_builder::prelude::*;
use indexmap::IndexMap;
use schema_model::{
    ScalarKind, SchemaModel,
    walkers::{AttributeWalker, ConcreteEntityWalker},
};
use std::fmt;

/// The result key of the node count.
const COUNT: &str = "count";

/// The result key of the attribute aggregates.
const NODE: &str = "node";

/// An aggregate computed over one attribute of all nodes of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOperation {
    Min,
    Max,
    Average,
    Sum,
    /// The value with the fewest characters.
    Shortest,
    /// The value with the most characters.
    Longest,
}

impl AggregateOperation {
    /// The key the aggregate is returned under.
    pub fn name(self) -> &'static str {
        match self {
            AggregateOperation::Min => "min",
            AggregateOperation::Max => "max",
            AggregateOperation::Average => "average",
            AggregateOperation::Sum => "sum",
            AggregateOperation::Shortest => "shortest",
            AggregateOperation::Longest => "longest",
        }
    }

    /// Whether the aggregate can be computed over values of `kind`.
    pub fn supports(self, kind: &ScalarKind) -> bool {
        match self {
            AggregateOperation::Min | AggregateOperation::Max => kind.is_numeric() || kind.is_temporal(),
            AggregateOperation::Average | AggregateOperation::Sum => kind.is_numeric(),
            AggregateOperation::Shortest | AggregateOperation::Longest => kind.is_textual(),
        }
    }
}

impl fmt::Display for AggregateOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an aggregation query returns: optionally the node count, and the
/// requested aggregates per attribute, keyed by the attribute name of the
/// API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationSelection {
    pub count: bool,
    pub fields: IndexMap<String, Vec<AggregateOperation>>,
}

impl AggregationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self) -> Self {
        self.count = true;
        self
    }

    /// Adds aggregates for an attribute. Selecting the same attribute twice
    /// merges the operations.
    pub fn field<I>(mut self, name: impl Into<String>, operations: I) -> Self
    where
        I: IntoIterator<Item = AggregateOperation>,
    {
        let selected = self.fields.entry(name.into()).or_default();

        for operation in operations {
            if !selected.contains(&operation) {
                selected.push(operation);
            }
        }

        self
    }
}

/// Aggregates over all nodes of an object type.
///
/// Every aggregate is computed in its own `CALL` subquery matching the
/// nodes again. The final `RETURN` gathers the subquery results in one
/// map, with the attribute aggregates under `node`:
///
/// ```text
/// CALL {
///     MATCH (this:Movie)
///     RETURN count(this) AS var0
/// }
/// CALL {
///     MATCH (this:Movie)
///     RETURN { min: min(this.released) } AS var1
/// }
/// RETURN { count: var0, node: { released: var1 } } AS this
/// ```
///
/// Attributes without operations are left out of the result, and `node` is
/// left out when no attribute is aggregated.
#[tracing::instrument(skip(model, selection))]
pub fn translate_aggregation(
    model: &SchemaModel,
    entity_name: &str,
    selection: &AggregationSelection,
) -> TranslateResult<CypherQuery> {
    let entity = find_concrete(model, entity_name)?;

    let mut variables = VariableAllocator::new();
    let this = variables.named(ROOT);

    let mut sequence = ClauseSequence::new(Scope::new());
    let mut result = MapExpression::new();
    let mut node = MapExpression::new();

    if selection.count {
        let column = variables.variable();
        sequence.push(count_subquery(entity, &this, &column))?;
        result = result.entry(COUNT, &column);
    }

    for (field, operations) in selection.fields.iter().filter(|(_, operations)| !operations.is_empty()) {
        let attribute = aggregated_attribute(entity, field, operations)?;

        let column = variables.variable();
        sequence.push(attribute_subquery(attribute, operations, &this, &column, &mut variables))?;
        node = node.entry(field.as_str(), &column);
    }

    if !node.is_empty() {
        result = result.entry(NODE, node);
    }

    sequence.push(Return::new().item(result.alias(&this)))?;

    Ok(Cypher::build(sequence.build()))
}

/// Checks the attribute is stored on the node and every operation applies
/// to its type.
fn aggregated_attribute<'db>(
    entity: ConcreteEntityWalker<'db>,
    field: &str,
    operations: &[AggregateOperation],
) -> TranslateResult<AttributeWalker<'db>> {
    let attribute = entity
        .find_attribute(field)
        .ok_or_else(|| TranslateError::attribute_not_found(entity.name(), field))?;

    if attribute.cypher_annotation().is_some() {
        return Err(TranslateError::CustomStatementAttribute {
            entity: entity.name().to_owned(),
            attribute: field.to_owned(),
        });
    }

    let unsupported = operations
        .iter()
        .find(|operation| !attribute.scalar_kind().is_some_and(|kind| operation.supports(kind)));

    match unsupported {
        Some(operation) => Err(TranslateError::UnsupportedAggregation {
            entity: entity.name().to_owned(),
            attribute: field.to_owned(),
            operation: *operation,
        }),
        None => Ok(attribute),
    }
}

fn count_subquery(entity: ConcreteEntityWalker<'_>, this: &Variable, column: &Variable) -> Call {
    Call::new(concat([
        Clause::from(Match::new(node_pattern(entity, this))),
        Return::new().item(count(this).alias(column)).into(),
    ]))
}

fn attribute_subquery(
    attribute: AttributeWalker<'_>,
    operations: &[AggregateOperation],
    this: &Variable,
    column: &Variable,
    variables: &mut VariableAllocator,
) -> Call {
    let property = attribute.database_name();
    let matching = Clause::from(Match::new(node_pattern(attribute.entity(), this)));

    let body = if attribute.scalar_kind().is_some_and(ScalarKind::is_textual) {
        // Longest first, so the list ends with the shortest value.
        let list = variables.named("list");

        let aggregates = operations.iter().fold(MapExpression::new(), |map, operation| match operation {
            AggregateOperation::Longest => map.entry(operation.name(), head(&list)),
            _ => map.entry(operation.name(), last(&list)),
        });

        concat([
            matching,
            With::variables([this])
                .order_by(size(this.property(property)).descend())
                .into(),
            With::new().item(collect(this.property(property)).alias(&list)).into(),
            Return::new().item(aggregates.alias(column)).into(),
        ])
    } else {
        let aggregates = operations.iter().fold(MapExpression::new(), |map, operation| {
            let value = this.property(property);

            let aggregate = match operation {
                AggregateOperation::Min => min(value),
                AggregateOperation::Max => max(value),
                AggregateOperation::Average => avg(value),
                _ => sum(value),
            };

            map.entry(operation.name(), aggregate)
        });

        concat([matching, Return::new().item(aggregates.alias(column)).into()])
    };

    Call::new(body)
}

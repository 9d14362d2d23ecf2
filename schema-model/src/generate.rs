use crate::{
    annotation::parse_annotations,
    attribute::{Attribute, AttributeKind, AttributeType, ScalarKind},
    config::GeneratorConfig,
    entity::{CompositeEntity, ConcreteEntity},
    error::SchemaError,
    model::{SchemaModel, SchemaModelBuilder},
};
use graphql_parser::schema::{Definition, Document, Field, ObjectType, Text, TypeDefinition, UnionType};
use tracing::{debug, trace};

/// Generates the model with the default configuration.
pub fn generate_model<'a, T>(document: &Document<'a, T>) -> Result<SchemaModel, SchemaError>
where
    T: Text<'a>,
{
    generate_model_with(document, &GeneratorConfig::default())
}

/// Builds the entity model of a parsed schema document.
///
/// Every object type becomes a concrete entity, every union a composite
/// entity. Fields that are not of a scalar type are left out. The first
/// invalid definition fails the whole generation.
#[tracing::instrument(skip_all, fields(definitions = document.definitions.len()))]
pub fn generate_model_with<'a, T>(
    document: &Document<'a, T>,
    config: &GeneratorConfig,
) -> Result<SchemaModel, SchemaError>
where
    T: Text<'a>,
{
    let (object_types, union_types) = definition_nodes(document);
    let mut builder = SchemaModelBuilder::new();

    for object_type in object_types {
        builder.insert_concrete(generate_concrete_entity(object_type, config)?)?;
    }

    for union_type in union_types {
        let composite = generate_composite_entity(union_type, &builder)?;
        builder.insert_composite(composite)?;
    }

    let model = builder.finish();
    debug!(entities = model.len(), "generated schema model");

    Ok(model)
}

/// Parses the type definitions and generates the model with the default
/// configuration.
pub fn parse_and_generate(type_defs: &str) -> Result<SchemaModel, SchemaError> {
    parse_and_generate_with(type_defs, &GeneratorConfig::default())
}

pub fn parse_and_generate_with(type_defs: &str, config: &GeneratorConfig) -> Result<SchemaModel, SchemaError> {
    let document = graphql_parser::parse_schema::<String>(type_defs).map_err(SchemaError::parse)?;
    generate_model_with(&document, config)
}

#[allow(clippy::type_complexity)]
fn definition_nodes<'d, 'a, T>(document: &'d Document<'a, T>) -> (Vec<&'d ObjectType<'a, T>>, Vec<&'d UnionType<'a, T>>)
where
    T: Text<'a>,
{
    let mut object_types = Vec::new();
    let mut union_types = Vec::new();

    for definition in document.definitions.iter() {
        match definition {
            Definition::TypeDefinition(TypeDefinition::Object(object_type)) => object_types.push(object_type),
            Definition::TypeDefinition(TypeDefinition::Union(union_type)) => union_types.push(union_type),
            _ => (),
        }
    }

    (object_types, union_types)
}

fn generate_concrete_entity<'a, T>(
    definition: &ObjectType<'a, T>,
    config: &GeneratorConfig,
) -> Result<ConcreteEntity, SchemaError>
where
    T: Text<'a>,
{
    let name = definition.name.as_ref();
    let mut attributes = Vec::with_capacity(definition.fields.len());

    for field in definition.fields.iter() {
        if let Some(attribute) = generate_attribute(name, field, config)? {
            attributes.push(attribute);
        }
    }

    ConcreteEntity::new(name, attributes)
}

fn generate_attribute<'a, T>(
    entity: &str,
    field: &Field<'a, T>,
    config: &GeneratorConfig,
) -> Result<Option<Attribute>, SchemaError>
where
    T: Text<'a>,
{
    let attribute_type = AttributeType::from_field_type(&field.field_type, |name| {
        ScalarKind::from_type_name(name, config)
            .map(AttributeKind::Scalar)
            .unwrap_or_else(|| AttributeKind::Entity(name.to_owned()))
    });

    let name = field.name.as_ref();

    if let AttributeKind::Entity(target) = &attribute_type.kind {
        trace!(entity, field = name, target = %target, "skipping non-scalar field");
        return Ok(None);
    }

    let annotations = parse_annotations(&field.directives, entity, name)?;

    Ok(Some(Attribute::new(name, attribute_type, annotations)))
}

fn generate_composite_entity<'a, T>(
    definition: &UnionType<'a, T>,
    builder: &SchemaModelBuilder,
) -> Result<CompositeEntity, SchemaError>
where
    T: Text<'a>,
{
    let name = definition.name.as_ref();

    let members = definition
        .types
        .iter()
        .map(|member| {
            builder
                .find_concrete(member.as_ref())
                .ok_or_else(|| SchemaError::UnresolvedCompositeMember {
                    composite: name.to_owned(),
                    member: member.as_ref().to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    CompositeEntity::new(name, members)
}

//! # schema-model
//!
//! The entity model behind a set of GraphQL type definitions.
//!
//! Object types become [concrete entities](struct.ConcreteEntity.html) with
//! their scalar fields as attributes, unions become
//! [composite entities](struct.CompositeEntity.html) referencing their
//! members. Generation either succeeds with a fully validated
//! [SchemaModel](struct.SchemaModel.html) or fails on the first problem found.
//!
//! ```rust
//! # use schema_model::*;
//! # fn main() -> Result<(), SchemaError> {
//! let model = parse_and_generate(r#"
//!     type Movie { title: String, rating: Float @cypher(statement: "RETURN 5.0") }
//!     type Series { title: String }
//!     union Production = Movie | Series
//! "#)?;
//!
//! let movie = model.find_concrete_entity("Movie").unwrap();
//! assert_eq!(2, movie.attributes().count());
//!
//! let production = model.find_composite_entity("Production").unwrap();
//! let members: Vec<_> = production.members().map(|member| member.name()).collect();
//! assert_eq!(vec!["Movie", "Series"], members);
//! # Ok(())
//! # }
//! ```
#![deny(rust_2018_idioms, unsafe_code)]

mod annotation;
mod attribute;
mod config;
mod entity;
mod error;
mod generate;
mod model;

pub mod walkers;

pub use annotation::{
    AliasAnnotation, Annotation, ArgumentValue, CypherAnnotation, DirectiveArguments, UniqueAnnotation,
};
pub use attribute::{Attribute, AttributeKind, AttributeType, ScalarKind};
pub use config::GeneratorConfig;
pub use entity::{AttributeId, CompositeEntity, CompositeEntityId, ConcreteEntity, ConcreteEntityId, EntityId};
pub use error::SchemaError;
pub use generate::{generate_model, generate_model_with, parse_and_generate, parse_and_generate_with};
pub use model::{SchemaModel, SchemaModelBuilder};

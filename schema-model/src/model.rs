use crate::{
    entity::{CompositeEntity, CompositeEntityId, ConcreteEntity, ConcreteEntityId, EntityId},
    error::SchemaError,
    walkers::{CompositeEntityWalker, ConcreteEntityWalker, EntityWalker, Walker},
};
use indexmap::IndexMap;
use std::ops::Index;

/// The entities of a schema, keyed by name.
///
/// Entities live in two arenas, one per kind, and the name index keeps
/// concrete entities first in declaration order, followed by the composites.
/// A model is immutable once built and can be shared between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModel {
    concrete_entities: Vec<ConcreteEntity>,
    composite_entities: Vec<CompositeEntity>,
    names: IndexMap<String, EntityId>,
}

impl SchemaModel {
    /// Find any entity by name.
    pub fn find_entity(&self, name: &str) -> Option<EntityWalker<'_>> {
        self.names.get(name).map(|id| match *id {
            EntityId::Concrete(id) => EntityWalker::Concrete(self.walk(id)),
            EntityId::Composite(id) => EntityWalker::Composite(self.walk(id)),
        })
    }

    pub fn find_concrete_entity(&self, name: &str) -> Option<ConcreteEntityWalker<'_>> {
        self.names
            .get(name)
            .and_then(|id| id.as_concrete())
            .map(|id| self.walk(id))
    }

    pub fn find_composite_entity(&self, name: &str) -> Option<CompositeEntityWalker<'_>> {
        self.names
            .get(name)
            .and_then(|id| id.as_composite())
            .map(|id| self.walk(id))
    }

    /// Traverse a schema element by id.
    pub fn walk<I>(&self, id: I) -> Walker<'_, I> {
        Walker { model: self, id }
    }

    /// Walk all the concrete entities, in declaration order.
    pub fn walk_concrete_entities(&self) -> impl ExactSizeIterator<Item = ConcreteEntityWalker<'_>> + '_ {
        (0..self.concrete_entities.len()).map(move |idx| self.walk(ConcreteEntityId(idx)))
    }

    /// Walk all the composite entities, in declaration order.
    pub fn walk_composite_entities(&self) -> impl ExactSizeIterator<Item = CompositeEntityWalker<'_>> + '_ {
        (0..self.composite_entities.len()).map(move |idx| self.walk(CompositeEntityId(idx)))
    }

    /// All entity names, concrete entities first.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Index<ConcreteEntityId> for SchemaModel {
    type Output = ConcreteEntity;

    fn index(&self, index: ConcreteEntityId) -> &Self::Output {
        &self.concrete_entities[index.0]
    }
}

impl Index<CompositeEntityId> for SchemaModel {
    type Output = CompositeEntity;

    fn index(&self, index: CompositeEntityId) -> &Self::Output {
        &self.composite_entities[index.0]
    }
}

/// Assembles a [SchemaModel](struct.SchemaModel.html). Every insert checks
/// the name is still free and fails otherwise.
#[derive(Debug, Default)]
pub struct SchemaModelBuilder {
    model: SchemaModel,
}

impl SchemaModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_concrete(&mut self, entity: ConcreteEntity) -> Result<ConcreteEntityId, SchemaError> {
        self.ensure_free(entity.name())?;

        let id = ConcreteEntityId(self.model.concrete_entities.len());
        self.model.names.insert(entity.name().to_owned(), EntityId::Concrete(id));
        self.model.concrete_entities.push(entity);

        Ok(id)
    }

    pub fn insert_composite(&mut self, entity: CompositeEntity) -> Result<CompositeEntityId, SchemaError> {
        self.ensure_free(entity.name())?;

        let id = CompositeEntityId(self.model.composite_entities.len());
        self.model.names.insert(entity.name().to_owned(), EntityId::Composite(id));
        self.model.composite_entities.push(entity);

        Ok(id)
    }

    /// The id of an already inserted concrete entity.
    pub fn find_concrete(&self, name: &str) -> Option<ConcreteEntityId> {
        self.model.names.get(name).and_then(|id| id.as_concrete())
    }

    pub fn finish(self) -> SchemaModel {
        self.model
    }

    fn ensure_free(&self, name: &str) -> Result<(), SchemaError> {
        if self.model.names.contains_key(name) {
            return Err(SchemaError::DuplicateEntity { name: name.to_owned() });
        }

        Ok(())
    }
}

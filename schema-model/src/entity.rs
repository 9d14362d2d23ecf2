use crate::{attribute::Attribute, error::SchemaError};
use std::collections::HashSet;

/// The position of a concrete entity in the model arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConcreteEntityId(pub(crate) usize);

/// The position of a composite entity in the model arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeEntityId(pub(crate) usize);

/// An attribute, by its entity and its position within the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeId(pub(crate) ConcreteEntityId, pub(crate) usize);

/// Any entity in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    Concrete(ConcreteEntityId),
    Composite(CompositeEntityId),
}

impl EntityId {
    pub fn as_concrete(self) -> Option<ConcreteEntityId> {
        match self {
            EntityId::Concrete(id) => Some(id),
            EntityId::Composite(_) => None,
        }
    }

    pub fn as_composite(self) -> Option<CompositeEntityId> {
        match self {
            EntityId::Composite(id) => Some(id),
            EntityId::Concrete(_) => None,
        }
    }
}

/// A node type with its scalar attributes in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteEntity {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
}

impl ConcreteEntity {
    /// Fails if two attributes share a name.
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Result<Self, SchemaError> {
        let name = name.into();
        let mut seen = HashSet::with_capacity(attributes.len());

        for attribute in attributes.iter() {
            if !seen.insert(attribute.name()) {
                return Err(SchemaError::DuplicateAttribute {
                    entity: name,
                    attribute: attribute.name().to_owned(),
                });
            }
        }

        Ok(Self { name, attributes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// A union of concrete entities. Members are arena positions, the entities
/// themselves are owned by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeEntity {
    pub(crate) name: String,
    pub(crate) members: Vec<ConcreteEntityId>,
}

impl CompositeEntity {
    /// Fails if there are no members.
    pub fn new(name: impl Into<String>, members: Vec<ConcreteEntityId>) -> Result<Self, SchemaError> {
        let name = name.into();

        if members.is_empty() {
            return Err(SchemaError::EmptyComposite { name });
        }

        Ok(Self { name, members })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[ConcreteEntityId] {
        &self.members
    }
}

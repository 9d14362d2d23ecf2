use crate::{
    entity::{AttributeId, ConcreteEntity, ConcreteEntityId},
    walkers::*,
};

/// A node type in the model.
pub type ConcreteEntityWalker<'db> = Walker<'db, ConcreteEntityId>;

impl<'db> ConcreteEntityWalker<'db> {
    /// The name of the entity, also its node label.
    pub fn name(self) -> &'db str {
        self.entity().name()
    }

    /// The attributes in declaration order.
    pub fn attributes(self) -> impl ExactSizeIterator<Item = AttributeWalker<'db>> + Clone + 'db {
        let model = self.model;
        let id = self.id;

        (0..self.entity().attributes().len()).map(move |idx| model.walk(AttributeId(id, idx)))
    }

    pub fn find_attribute(self, name: &str) -> Option<AttributeWalker<'db>> {
        self.attributes().find(|attribute| attribute.name() == name)
    }

    /// The composite entities this entity is a member of.
    pub fn composites(self) -> impl Iterator<Item = CompositeEntityWalker<'db>> + 'db {
        let id = self.id;

        self.model
            .walk_composite_entities()
            .filter(move |composite| composite.members().any(|member| member.id == id))
    }

    pub fn entity(self) -> &'db ConcreteEntity {
        &self.model[self.id]
    }
}

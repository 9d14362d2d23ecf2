use crate::{
    entity::{CompositeEntity, CompositeEntityId},
    walkers::*,
};

/// A union of concrete entities.
pub type CompositeEntityWalker<'db> = Walker<'db, CompositeEntityId>;

impl<'db> CompositeEntityWalker<'db> {
    pub fn name(self) -> &'db str {
        self.entity().name()
    }

    /// The member entities, in the order the union lists them.
    pub fn members(self) -> impl ExactSizeIterator<Item = ConcreteEntityWalker<'db>> + Clone + 'db {
        let model = self.model;

        self.entity().members().iter().map(move |id| model.walk(*id))
    }

    pub fn entity(self) -> &'db CompositeEntity {
        &self.model[self.id]
    }
}

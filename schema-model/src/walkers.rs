//! Convenient access to a schema model.
//!
//! A walker pairs an id with the model it belongs to, so navigating from a
//! composite to its members or from an entity to its attributes never needs
//! a second lookup by name.

mod attribute;
mod composite_entity;
mod concrete_entity;

pub use attribute::*;
pub use composite_entity::*;
pub use concrete_entity::*;

use crate::SchemaModel;

/// A generic walker. Only walkers instantiated with a concrete ID type (`I`) are useful.
#[derive(Clone, Copy)]
pub struct Walker<'db, I> {
    /// The schema model being traversed.
    pub model: &'db SchemaModel,
    /// The identifier of the focused element.
    pub id: I,
}

impl<'db, I> Walker<'db, I> {
    /// Traverse something else in the same model.
    pub fn walk<J>(self, other: J) -> Walker<'db, J> {
        self.model.walk(other)
    }
}

impl<I> PartialEq for Walker<'_, I>
where
    I: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.id.eq(&other.id)
    }
}

impl<I> std::fmt::Debug for Walker<'_, I>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walker").field("id", &self.id).finish()
    }
}

/// An entity of either kind, as returned by a lookup by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityWalker<'db> {
    Concrete(ConcreteEntityWalker<'db>),
    Composite(CompositeEntityWalker<'db>),
}

impl<'db> EntityWalker<'db> {
    pub fn name(self) -> &'db str {
        match self {
            EntityWalker::Concrete(entity) => entity.name(),
            EntityWalker::Composite(entity) => entity.name(),
        }
    }

    pub fn as_concrete(self) -> Option<ConcreteEntityWalker<'db>> {
        match self {
            EntityWalker::Concrete(entity) => Some(entity),
            EntityWalker::Composite(_) => None,
        }
    }

    pub fn as_composite(self) -> Option<CompositeEntityWalker<'db>> {
        match self {
            EntityWalker::Composite(entity) => Some(entity),
            EntityWalker::Concrete(_) => None,
        }
    }

    pub fn is_composite(self) -> bool {
        matches!(self, EntityWalker::Composite(_))
    }
}

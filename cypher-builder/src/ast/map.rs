use crate::ast::{Expression, Variable};
use indexmap::IndexMap;

/// A map literal, `{ key: value }`. Keys keep their insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapExpression {
    pub(crate) entries: IndexMap<String, Expression>,
}

impl MapExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry for `key`, replacing any previous value.
    pub fn entry<E>(mut self, key: impl Into<String>, value: E) -> Self
    where
        E: Into<Expression>,
    {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<MapExpression> for Expression {
    fn from(map: MapExpression) -> Self {
        Expression::Map(map)
    }
}

/// A map projection over a variable: `variable { .title, kind: "Movie" }`.
///
/// Shorthand selections and computed entries render in the order they were
/// added.
#[derive(Debug, Clone, PartialEq)]
pub struct MapProjection {
    pub(crate) variable: Variable,
    /// `None` for a shorthand selection, `.key`.
    pub(crate) items: IndexMap<String, Option<Expression>>,
}

impl MapProjection {
    pub fn new(variable: &Variable) -> Self {
        Self {
            variable: variable.clone(),
            items: IndexMap::new(),
        }
    }

    /// Adds a shorthand property selection, `.key`.
    pub fn property(mut self, key: impl Into<String>) -> Self {
        self.items.insert(key.into(), None);
        self
    }

    pub fn properties<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(keys.into_iter().map(|key| (key.into(), None)));
        self
    }

    /// Adds a computed entry, `key: value`. An existing key keeps its
    /// position and gets the new value.
    pub fn entry<E>(mut self, key: impl Into<String>, value: E) -> Self
    where
        E: Into<Expression>,
    {
        self.items.insert(key.into(), Some(value.into()));
        self
    }

    /// The keys of the projected map, in render order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.keys().map(String::as_str)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Expression> + '_ {
        self.items.values().flatten()
    }
}

impl From<MapProjection> for Expression {
    fn from(projection: MapProjection) -> Self {
        Expression::MapProjection(projection)
    }
}

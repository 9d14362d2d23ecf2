use crate::ast::{Expression, Variable};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// A node pattern, `(variable:Label { key: value })`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePattern {
    pub(crate) variable: Variable,
    pub(crate) labels: Vec<String>,
    pub(crate) properties: IndexMap<String, Expression>,
    pub(crate) known_properties: Option<BTreeSet<String>>,
}

impl NodePattern {
    pub fn new(variable: &Variable) -> Self {
        Self {
            variable: variable.clone(),
            labels: Vec::new(),
            properties: IndexMap::new(),
            known_properties: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// An inline property filter, `{ key: value }`.
    pub fn property<E>(mut self, key: impl Into<String>, value: E) -> Self
    where
        E: Into<Expression>,
    {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Restricts property access on the matched variable to the given keys
    /// for the rest of the clause sequence. Not rendered.
    pub fn known_properties<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_properties = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }
}

use super::{Expression, MapProjection, Property};
use std::{collections::HashSet, fmt, sync::Arc};

const GENERATED_PREFIX: &str = "var";

/// A Cypher variable. Variables bind by name, exactly like in the target
/// language: two handles with the same name refer to the same binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    name: Arc<str>,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Property access, `variable.key`.
    pub fn property(&self, key: impl Into<String>) -> Property {
        Property::new(self.clone(), key)
    }

    /// A map projection selecting the given properties, `variable { .a, .b }`.
    pub fn project<I, S>(&self, properties: I) -> MapProjection
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MapProjection::new(self).properties(properties)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Expression::Variable(variable)
    }
}

impl From<&Variable> for Expression {
    fn from(variable: &Variable) -> Self {
        Expression::Variable(variable.clone())
    }
}

/// Hands out variable names for one translation. Generated names never
/// collide with each other nor with names reserved through
/// [named](#method.named).
#[derive(Debug, Default)]
pub struct VariableAllocator {
    reserved: HashSet<Arc<str>>,
    counter: usize,
}

impl VariableAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A variable with a fixed name, such as `this`. Asking twice for the
    /// same name yields the same binding.
    pub fn named(&mut self, name: &str) -> Variable {
        let name: Arc<str> = match self.reserved.get(name) {
            Some(existing) => existing.clone(),
            None => {
                let name: Arc<str> = Arc::from(name);
                self.reserved.insert(name.clone());
                name
            }
        };

        Variable { name }
    }

    /// A fresh variable, `var0`, `var1`, ...
    pub fn variable(&mut self) -> Variable {
        self.prefixed(GENERATED_PREFIX)
    }

    /// A fresh variable with a custom prefix, sharing the counter with
    /// [variable](#method.variable).
    pub fn prefixed(&mut self, prefix: &str) -> Variable {
        loop {
            let candidate = format!("{prefix}{}", self.counter);
            self.counter += 1;

            if !self.reserved.contains(candidate.as_str()) {
                let name: Arc<str> = Arc::from(candidate);
                self.reserved.insert(name.clone());

                return Variable { name };
            }
        }
    }
}

//! Composition-time scope checking.
//!
//! Cypher binds variables by name inside a statement. A `WITH` clause
//! replaces the visible variables with the ones it projects, a `CALL`
//! subquery only sees what it imports, and a `RETURN` ends the statement.
//! [Scope](struct.Scope.html) models these rules as an explicit symbol table,
//! so a tree referencing an unbound variable is rejected while it is being
//! built instead of by the database.
use crate::{
    ast::*,
    error::CompositionError,
};
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::BTreeSet;

/// What is known about a bound variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    properties: Option<BTreeSet<String>>,
}

impl Binding {
    /// A binding allowing access to any property.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// A binding exposing exactly the given properties.
    pub fn with_properties<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: Some(keys.into_iter().map(Into::into).collect()),
        }
    }

    /// `None` when any property may be accessed.
    pub fn properties(&self) -> Option<&BTreeSet<String>> {
        self.properties.as_ref()
    }

    pub fn exposes(&self, key: &str) -> bool {
        self.properties.as_ref().is_none_or(|properties| properties.contains(key))
    }

    fn merge(&self, other: &Binding) -> Binding {
        let properties = match (&self.properties, &other.properties) {
            (Some(left), Some(right)) => Some(left.union(right).cloned().collect()),
            _ => None,
        };

        Binding { properties }
    }
}

/// The variables visible at one point of a statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    bindings: IndexMap<String, Binding>,
    returned: bool,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable, replacing any previous binding of the same name.
    pub fn bind(&mut self, variable: &Variable, binding: Binding) {
        self.bindings.insert(variable.name().to_owned(), binding);
    }

    /// Builder-style [bind](#method.bind).
    pub fn with_binding(mut self, variable: &Variable, binding: Binding) -> Self {
        self.bind(variable, binding);
        self
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.bindings.contains_key(variable.name())
    }

    pub fn binding(&self, variable: &Variable) -> Option<&Binding> {
        self.bindings.get(variable.name())
    }

    /// Names of the visible variables, in binding order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// True once a `RETURN` closed the statement.
    pub fn is_returned(&self) -> bool {
        self.returned
    }

    /// Checks that every variable and property the expression reads is visible.
    pub fn check_expression(&self, expression: &Expression) -> Result<(), CompositionError> {
        let mut result = Ok(());

        expression.for_each_variable(&mut |variable, key| {
            if result.is_ok() {
                result = self.check_access(variable, key);
            }
        });

        result
    }

    /// Applies the clause to the scope, or leaves the scope untouched and
    /// returns the first composition error.
    pub fn enter(&mut self, clause: &Clause) -> Result<(), CompositionError> {
        let mut next = self.clone();
        next.apply(clause)?;
        *self = next;

        Ok(())
    }

    fn check_access(&self, variable: &Variable, key: Option<&str>) -> Result<(), CompositionError> {
        let binding = self
            .binding(variable)
            .ok_or_else(|| CompositionError::out_of_scope(variable.name()))?;

        match key {
            Some(key) if !binding.exposes(key) => Err(CompositionError::UnknownProperty {
                variable: variable.name().to_owned(),
                key: key.to_owned(),
            }),
            _ => Ok(()),
        }
    }

    fn binding_of(&self, expression: &Expression) -> Binding {
        match expression {
            Expression::Variable(variable) => self.binding(variable).cloned().unwrap_or_default(),
            Expression::MapProjection(projection) => Binding::with_properties(projection.keys()),
            Expression::Map(map) => Binding::with_properties(map.entries.keys().map(String::as_str)),
            _ => Binding::unknown(),
        }
    }

    fn apply(&mut self, clause: &Clause) -> Result<(), CompositionError> {
        if self.returned && !clause.is_empty() {
            return Err(CompositionError::ClauseAfterReturn);
        }

        match clause {
            Clause::Match(m) => self.apply_match(m),
            Clause::With(with) => {
                self.bindings = self.project(&with.projection, true)?;
                Ok(())
            }
            Clause::Return(ret) => {
                self.bindings = self.project(&ret.projection, false)?;
                self.returned = true;
                Ok(())
            }
            Clause::Unwind(unwind) => {
                self.check_expression(&unwind.expression)?;
                self.bind_fresh(&unwind.alias, Binding::unknown())
            }
            Clause::Call(call) => self.apply_call(call),
            Clause::Union(union) => self.apply_union(union),
            Clause::Concat(clauses) => clauses.iter().try_for_each(|clause| self.apply(clause)),
        }
    }

    fn apply_match(&mut self, m: &Match) -> Result<(), CompositionError> {
        for value in m.pattern.properties.values() {
            self.check_expression(value)?;
        }

        let binding = Binding {
            properties: m.pattern.known_properties.clone(),
        };

        // Matching an already bound variable again constrains the same node.
        if !self.contains(&m.pattern.variable) {
            self.bind(&m.pattern.variable, binding);
        }

        for condition in m.conditions.iter() {
            for expression in condition.expressions() {
                self.check_expression(expression)?;
            }
        }

        Ok(())
    }

    fn apply_call(&mut self, call: &Call) -> Result<(), CompositionError> {
        let mut inner = Scope::new();

        for import in call.imports.iter() {
            let binding = self
                .binding(import)
                .ok_or_else(|| CompositionError::out_of_scope(import.name()))?;

            inner.bind(import, binding.clone());
        }

        inner.apply(&call.body)?;

        // A subquery without RETURN is a unit subquery and binds nothing.
        if inner.returned {
            for (name, binding) in inner.bindings {
                if self.bindings.contains_key(&name) {
                    return Err(CompositionError::VariableAlreadyBound { name });
                }

                self.bindings.insert(name, binding);
            }
        }

        Ok(())
    }

    fn apply_union(&mut self, union: &Union) -> Result<(), CompositionError> {
        let mut merged: Option<IndexMap<String, Binding>> = None;

        for branch in union.branches.iter() {
            let mut scope = self.clone();
            scope.apply(branch)?;

            if !scope.returned {
                return Err(CompositionError::UnionWithoutReturn);
            }

            merged = Some(match merged {
                None => scope.bindings,
                Some(mut columns) => {
                    if !columns.keys().eq(scope.bindings.keys()) {
                        return Err(CompositionError::UnionColumnMismatch {
                            left: columns.keys().join(", "),
                            right: scope.bindings.keys().join(", "),
                        });
                    }

                    for (name, binding) in scope.bindings.iter() {
                        if let Some(existing) = columns.get_mut(name) {
                            *existing = existing.merge(binding);
                        }
                    }

                    columns
                }
            });
        }

        self.bindings = merged.ok_or(CompositionError::EmptyUnion)?;
        self.returned = true;

        Ok(())
    }

    fn project(
        &self,
        projection: &Projection,
        aliases_required: bool,
    ) -> Result<IndexMap<String, Binding>, CompositionError> {
        let mut projected = IndexMap::new();

        for item in projection.items.iter() {
            self.check_expression(&item.expression)?;

            match item.output_variable() {
                Some(output) => {
                    let name = output.name().to_owned();

                    if projected.contains_key(&name) {
                        return Err(CompositionError::DuplicateColumn { name });
                    }

                    projected.insert(name, self.binding_of(&item.expression));
                }
                None if aliases_required => return Err(CompositionError::UnaliasedProjection),
                None => (),
            }
        }

        // After an aggregating projection only the projected names can be
        // sorted on, otherwise the previous ones stay readable as well.
        let aggregating = projection.items.iter().any(|item| item.expression.contains_aggregate());

        let modifiers_scope = if aggregating {
            Scope {
                bindings: projected.clone(),
                returned: false,
            }
        } else {
            let mut bindings = self.bindings.clone();
            bindings.extend(projected.clone());

            Scope {
                bindings,
                returned: false,
            }
        };

        for (expression, _) in projection.ordering.iter() {
            modifiers_scope
                .check_expression(expression)
                .map_err(CompositionError::into_sort_key_error)?;
        }

        for expression in projection.skip.iter().chain(projection.limit.iter()) {
            modifiers_scope.check_expression(expression)?;
        }

        Ok(projected)
    }

    fn bind_fresh(&mut self, variable: &Variable, binding: Binding) -> Result<(), CompositionError> {
        if self.contains(variable) {
            return Err(CompositionError::VariableAlreadyBound {
                name: variable.name().to_owned(),
            });
        }

        self.bind(variable, binding);

        Ok(())
    }
}

/// A statement under construction. Every clause is checked against the
/// running scope before it is appended.
#[derive(Debug, Clone, Default)]
pub struct ClauseSequence {
    clauses: Vec<Clause>,
    scope: Scope,
}

impl ClauseSequence {
    /// Starts a sequence in which the variables of `scope` are already bound.
    pub fn new(scope: Scope) -> Self {
        Self {
            clauses: Vec::new(),
            scope,
        }
    }

    /// Appends a clause after checking it.
    pub fn then<C>(mut self, clause: C) -> Result<Self, CompositionError>
    where
        C: Into<Clause>,
    {
        self.push(clause)?;
        Ok(self)
    }

    pub fn push<C>(&mut self, clause: C) -> Result<(), CompositionError>
    where
        C: Into<Clause>,
    {
        let clause = clause.into();
        self.scope.enter(&clause)?;
        self.clauses.push(clause);

        Ok(())
    }

    /// The scope after the last appended clause.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn build(self) -> Clause {
        concat(self.clauses)
    }

    pub fn into_parts(self) -> (Clause, Scope) {
        (concat(self.clauses), self.scope)
    }
}

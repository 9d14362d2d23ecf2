use crate::ast::*;

/// A projected expression with an optional alias, `expression AS alias`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionItem {
    pub(crate) expression: Expression,
    pub(crate) alias: Option<Variable>,
}

impl ProjectionItem {
    /// The name the item is visible under after the projection, if any.
    pub fn output_variable(&self) -> Option<&Variable> {
        self.alias.as_ref().or_else(|| self.expression.as_variable())
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

macro_rules! projectable {
    ($($kind:ty),*) => (
        $(
            impl From<$kind> for ProjectionItem {
                fn from(expression: $kind) -> Self {
                    ProjectionItem {
                        expression: expression.into(),
                        alias: None,
                    }
                }
            }
        )*
    );
}

projectable!(Expression, Variable, &Variable, Property, Function, Collect, Count, MapExpression, MapProjection);

/// An expression that can be projected under a variable name.
pub trait Aliasable {
    fn alias(self, alias: &Variable) -> ProjectionItem;
}

impl<T> Aliasable for T
where
    T: Into<Expression>,
{
    fn alias(self, alias: &Variable) -> ProjectionItem {
        ProjectionItem {
            expression: self.into(),
            alias: Some(alias.clone()),
        }
    }
}

/// The projection body shared by `WITH` and `RETURN`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    pub(crate) items: Vec<ProjectionItem>,
    pub(crate) distinct: bool,
    pub(crate) ordering: Ordering,
    pub(crate) skip: Option<Expression>,
    pub(crate) limit: Option<Expression>,
}

impl Projection {
    pub fn items(&self) -> &[ProjectionItem] {
        &self.items
    }

    pub fn ordering(&self) -> &Ordering {
        &self.ordering
    }

    pub fn has_pagination(&self) -> bool {
        self.skip.is_some() || self.limit.is_some()
    }
}

/// A clause ending in a projection. Sort and pagination modifiers can be
/// appended to any of them.
pub trait ProjectionClause: Sized {
    fn projection(&self) -> &Projection;

    fn projection_mut(&mut self) -> &mut Projection;

    /// Adds an item to the projection.
    fn item<T>(mut self, item: T) -> Self
    where
        T: Into<ProjectionItem>,
    {
        self.projection_mut().items.push(item.into());
        self
    }

    /// Projects unique rows only, `DISTINCT`.
    fn distinct(mut self) -> Self {
        self.projection_mut().distinct = true;
        self
    }

    /// Adds an ordering to the `ORDER BY` section.
    fn order_by<T>(mut self, value: T) -> Self
    where
        T: IntoOrderDefinition,
    {
        self.add_order_by(value);
        self
    }

    fn add_order_by<T>(&mut self, value: T)
    where
        T: IntoOrderDefinition,
    {
        let projection = self.projection_mut();
        projection.ordering = std::mem::take(&mut projection.ordering).append(value.into_order_definition());
    }

    /// Sets the `SKIP` value. Values are parameterized.
    fn skip<T>(mut self, skip: T) -> Self
    where
        T: Into<Expression>,
    {
        self.set_skip(skip);
        self
    }

    fn set_skip<T>(&mut self, skip: T)
    where
        T: Into<Expression>,
    {
        self.projection_mut().skip = Some(skip.into());
    }

    /// Sets the `LIMIT` value. Values are parameterized.
    fn limit<T>(mut self, limit: T) -> Self
    where
        T: Into<Expression>,
    {
        self.set_limit(limit);
        self
    }

    fn set_limit<T>(&mut self, limit: T)
    where
        T: Into<Expression>,
    {
        self.projection_mut().limit = Some(limit.into());
    }
}

use crate::ast::{Expression, Function, Property, Variable};

pub type OrderDefinition = (Expression, Option<Order>);

/// A list of definitions for the `ORDER BY` statement
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Ordering(pub Vec<OrderDefinition>);

impl Ordering {
    #[doc(hidden)]
    pub fn append(mut self, value: OrderDefinition) -> Self {
        self.0.push(value);
        self
    }

    pub fn new(values: Vec<OrderDefinition>) -> Self {
        Self(values)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderDefinition> {
        self.0.iter()
    }
}

/// The ordering direction
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// An item that can be used in the `ORDER BY` statement
pub trait Orderable
where
    Self: Sized,
{
    /// Order by `self` in the given order
    fn order(self, order: Option<Order>) -> OrderDefinition;

    /// Change the order to `ASC`
    fn ascend(self) -> OrderDefinition {
        self.order(Some(Order::Asc))
    }

    /// Change the order to `DESC`
    fn descend(self) -> OrderDefinition {
        self.order(Some(Order::Desc))
    }
}

/// Convert the value into an order definition with order item and direction
pub trait IntoOrderDefinition {
    fn into_order_definition(self) -> OrderDefinition;
}

impl IntoOrderDefinition for OrderDefinition {
    fn into_order_definition(self) -> OrderDefinition {
        self
    }
}

macro_rules! orderable {
    ($($kind:ty),*) => (
        $(
            impl IntoOrderDefinition for $kind {
                fn into_order_definition(self) -> OrderDefinition {
                    (self.into(), None)
                }
            }

            impl Orderable for $kind {
                fn order(self, order: Option<Order>) -> OrderDefinition {
                    (self.into(), order)
                }
            }
        )*
    );
}

orderable!(Expression, Variable, &Variable, Property, Function);

impl Property {
    /// Shorthand for ordering by a property in the given direction.
    pub fn ordered(self, order: Order) -> OrderDefinition {
        self.order(Some(order))
    }
}

impl Variable {
    /// Shorthand for ordering by the property `key` of this variable.
    pub fn order_by_property(&self, key: impl Into<String>, order: Order) -> OrderDefinition {
        self.property(key).ordered(order)
    }
}

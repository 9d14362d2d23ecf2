use crate::{
    annotation::{Annotation, CypherAnnotation},
    attribute::{Attribute, AttributeType, ScalarKind},
    entity::AttributeId,
    walkers::*,
};

/// An attribute of a concrete entity.
pub type AttributeWalker<'db> = Walker<'db, AttributeId>;

impl<'db> AttributeWalker<'db> {
    /// The name of the attribute in the API.
    pub fn name(self) -> &'db str {
        self.attribute().name()
    }

    pub fn attribute_type(self) -> &'db AttributeType {
        self.attribute().attribute_type()
    }

    pub fn annotations(self) -> &'db [Annotation] {
        self.attribute().annotations()
    }

    /// The `@cypher` annotation, if the attribute is resolved by a custom statement.
    pub fn cypher_annotation(self) -> Option<&'db CypherAnnotation> {
        self.annotations().iter().find_map(Annotation::as_cypher)
    }

    /// The property name in the `@alias(property: ...)` annotation.
    pub fn alias(self) -> Option<&'db str> {
        self.annotations()
            .iter()
            .find_map(Annotation::as_alias)
            .map(|alias| alias.property.as_str())
    }

    /// The name of the property stored on the node. See [alias](#method.alias).
    pub fn database_name(self) -> &'db str {
        self.alias().unwrap_or_else(|| self.name())
    }

    pub fn is_id(self) -> bool {
        self.annotations().iter().any(|annotation| matches!(annotation, Annotation::Id))
    }

    pub fn is_unique(self) -> bool {
        self.annotations()
            .iter()
            .any(|annotation| matches!(annotation, Annotation::Id | Annotation::Unique(_)))
    }

    pub fn is_scalar(self) -> bool {
        self.scalar_kind().is_some()
    }

    pub fn scalar_kind(self) -> Option<&'db ScalarKind> {
        self.attribute_type().as_scalar()
    }

    /// The entity that contains the attribute.
    pub fn entity(self) -> ConcreteEntityWalker<'db> {
        self.walk(self.id.0)
    }

    fn attribute(self) -> &'db Attribute {
        &self.model[self.id.0].attributes()[self.id.1]
    }
}

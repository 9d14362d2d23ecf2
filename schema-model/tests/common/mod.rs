pub(crate) use ::indoc::indoc;
pub(crate) use expect_test::expect;

use schema_model::{SchemaModel, walkers};

#[track_caller]
pub(crate) fn generate(type_defs: &str) -> SchemaModel {
    match schema_model::parse_and_generate(type_defs) {
        Ok(model) => model,
        Err(err) => panic!("Model generation failed\n\n{err}"),
    }
}

#[track_caller]
pub(crate) fn expect_error(type_defs: &str, expectation: &expect_test::Expect) {
    match schema_model::parse_and_generate(type_defs) {
        Ok(_) => panic!("Expected a generation error, but the type definitions are valid."),
        Err(err) => expectation.assert_eq(&err.to_string()),
    }
}

pub(crate) trait ModelAssert {
    fn assert_has_concrete_entity(&self, name: &str) -> walkers::ConcreteEntityWalker<'_>;
    fn assert_has_composite_entity(&self, name: &str) -> walkers::CompositeEntityWalker<'_>;
}

impl ModelAssert for SchemaModel {
    #[track_caller]
    fn assert_has_concrete_entity(&self, name: &str) -> walkers::ConcreteEntityWalker<'_> {
        self.find_concrete_entity(name)
            .unwrap_or_else(|| panic!("Concrete entity {name} not found"))
    }

    #[track_caller]
    fn assert_has_composite_entity(&self, name: &str) -> walkers::CompositeEntityWalker<'_> {
        self.find_composite_entity(name)
            .unwrap_or_else(|| panic!("Composite entity {name} not found"))
    }
}

pub(crate) trait ConcreteEntityAssert<'a> {
    fn assert_attribute_names(self, names: &[&str]) -> Self;
    fn assert_has_attribute(self, name: &str) -> walkers::AttributeWalker<'a>;
}

impl<'a> ConcreteEntityAssert<'a> for walkers::ConcreteEntityWalker<'a> {
    #[track_caller]
    fn assert_attribute_names(self, names: &[&str]) -> Self {
        let actual: Vec<&str> = self.attributes().map(|attribute| attribute.name()).collect();
        assert_eq!(names, actual.as_slice());
        self
    }

    #[track_caller]
    fn assert_has_attribute(self, name: &str) -> walkers::AttributeWalker<'a> {
        self.find_attribute(name)
            .unwrap_or_else(|| panic!("Attribute {name} not found on {}", self.name()))
    }
}

use crate::common::*;
use query_compiler::{AggregateOperation, AggregationSelection, translate_aggregation};

#[test]
fn aggregation_over_an_aliased_string() {
    let model = generate(indoc! {r#"
        type Movie {
          myName: String @alias(property: "name")
        }
    "#});

    let selection = AggregationSelection::new()
        .count()
        .field("myName", [AggregateOperation::Shortest, AggregateOperation::Longest]);

    let expected = expect![[r#"
        CALL {
            MATCH (this:Movie)
            RETURN count(this) AS var0
        }
        CALL {
            MATCH (this:Movie)
            WITH this
            ORDER BY size(this.name) DESC
            WITH collect(this.name) AS list
            RETURN { shortest: last(list), longest: head(list) } AS var1
        }
        RETURN { count: var0, node: { myName: var1 } } AS this"#]];

    let query = expect_query(translate_aggregation(&model, "Movie", &selection), &expected);

    assert!(query.params.is_empty());
}

#[test]
fn aggregation_over_several_attributes() {
    let model = productions();

    let selection = AggregationSelection::new()
        .field("released", [AggregateOperation::Min, AggregateOperation::Max])
        .field("title", [AggregateOperation::Longest]);

    let expected = expect![[r#"
        CALL {
            MATCH (this:Movie)
            RETURN { min: min(this.released), max: max(this.released) } AS var0
        }
        CALL {
            MATCH (this:Movie)
            WITH this
            ORDER BY size(this.title) DESC
            WITH collect(this.title) AS list
            RETURN { longest: head(list) } AS var1
        }
        RETURN { node: { released: var0, title: var1 } } AS this"#]];

    expect_query(translate_aggregation(&model, "Movie", &selection), &expected);
}

#[test]
fn aggregation_without_a_selection() {
    let model = productions();

    expect_query(
        translate_aggregation(&model, "Series", &AggregationSelection::new()),
        &expect!["RETURN {} AS this"],
    );
}

#[test]
fn aggregation_of_a_string_as_number() {
    let model = productions();
    let selection = AggregationSelection::new().field("title", [AggregateOperation::Average]);

    expect_error(
        translate_aggregation(&model, "Series", &selection),
        &expect!["Aggregation `average` is not available on attribute `Series.title`."],
    );
}

#[test]
fn aggregation_over_a_union() {
    let model = productions();

    expect_error(
        translate_aggregation(&model, "Production", &AggregationSelection::new().count()),
        &expect!["Entity `Production` is not an object type."],
    );
}

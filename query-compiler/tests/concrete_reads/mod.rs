use crate::common::*;
use query_compiler::{Direction, GraphQLOptions, TranslateError, translate_concrete_read};

#[test]
fn concrete_read_of_selected_attributes() {
    let model = productions();

    let expected = expect![[r#"
        MATCH (this:Documentary)
        RETURN this { title: this.name, .subject } AS this"#]];

    expect_query(
        translate_concrete_read(&model, "Documentary", &["title", "subject"], &GraphQLOptions::new()),
        &expected,
    );
}

#[test]
fn concrete_read_with_sorting_and_pagination() {
    let model = productions();
    let options = GraphQLOptions::new()
        .sort_by("released", Direction::Desc)
        .sort_by("title", Direction::Asc)
        .limit(10);

    let expected = expect![[r#"
        MATCH (this:Movie)
        WITH this
        ORDER BY this.released DESC, this.title ASC
        LIMIT $param0
        RETURN this { .title } AS this"#]];

    expect_query(translate_concrete_read(&model, "Movie", &["title"], &options), &expected);
}

#[test]
fn concrete_read_of_a_union() {
    let model = productions();

    let error = translate_concrete_read(&model, "Production", &[], &GraphQLOptions::new()).unwrap_err();

    assert!(matches!(error, TranslateError::NotAConcreteEntity { ref name } if name == "Production"));
}

#[test]
fn concrete_read_of_an_unknown_attribute() {
    let model = productions();

    expect_error(
        translate_concrete_read(&model, "Series", &["title", "seasons"], &GraphQLOptions::new()),
        &expect!["Entity `Series` has no attribute `seasons`."],
    );
}

#[test]
fn concrete_read_of_a_custom_statement_attribute() {
    let model = productions();

    expect_error(
        translate_concrete_read(&model, "Movie", &["score"], &GraphQLOptions::new()),
        &expect![
            "Attribute `Movie.score` is resolved by a @cypher statement and cannot be read as a property."
        ],
    );
}

#[test]
fn concrete_read_sorted_by_a_stored_property_name() {
    let model = productions();
    let options = GraphQLOptions::new().sort_by("name", Direction::Asc);

    expect_error(
        translate_concrete_read(&model, "Documentary", &["title"], &options),
        &expect!["Cannot sort by `name`: it is not a visible property of `this`."],
    );
}

#[test]
fn concrete_read_with_an_offset_beyond_the_integer_range() {
    let model = productions();
    let options = GraphQLOptions::new().offset(u64::MAX);

    expect_error(
        translate_concrete_read(&model, "Movie", &["title"], &options),
        &expect!["SKIP value 18446744073709551615 exceeds the largest Cypher integer."],
    );
}

use crate::common::*;
use pretty_assertions::assert_eq;
use schema_model::{AliasAnnotation, Annotation, CypherAnnotation, SchemaError, UniqueAnnotation};

#[test]
fn cypher_directives_become_annotations() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
          score: Float @cypher(statement: "MATCH (this)<-[r:REVIEWED]-() RETURN avg(r.score)")
        }
    "#};

    let model = generate(type_defs);
    let score = model.assert_has_concrete_entity("Movie").assert_has_attribute("score");

    assert_eq!(
        &[Annotation::Cypher(CypherAnnotation {
            statement: "MATCH (this)<-[r:REVIEWED]-() RETURN avg(r.score)".into(),
        })],
        score.annotations()
    );
    assert_eq!(
        "MATCH (this)<-[r:REVIEWED]-() RETURN avg(r.score)",
        score.cypher_annotation().unwrap().statement
    );
}

#[test]
fn cypher_without_statement_fails() {
    let type_defs = indoc! {r#"
        type Movie {
          summary: String @cypher
        }
    "#};

    let expectation = expect![[r#"@cypher statement required on Movie.summary"#]];

    expect_error(type_defs, &expectation);
}

#[test]
fn cypher_with_an_empty_statement_fails() {
    let type_defs = indoc! {r#"
        type Movie {
          summary: String @cypher(statement: "")
        }
    "#};

    let expectation = expect![[r#"@cypher statement required on Movie.summary"#]];

    expect_error(type_defs, &expectation);
}

#[test]
fn cypher_with_a_non_string_statement_fails() {
    let type_defs = indoc! {r#"
        type Movie {
          summary: String @cypher(statement: 42)
        }
    "#};

    let error = schema_model::parse_and_generate(type_defs).unwrap_err();

    assert_eq!(
        SchemaError::MissingStatement {
            entity: "Movie".into(),
            field: "summary".into(),
        },
        error
    );
}

#[test]
fn directives_on_dropped_fields_are_not_read() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
          actors: [Actor!]! @cypher
        }

        type Actor {
          name: String
        }
    "#};

    generate(type_defs)
        .assert_has_concrete_entity("Movie")
        .assert_attribute_names(&["title"]);
}

#[test]
fn unknown_directives_are_ignored() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String @deprecated(reason: "Use name") @timestamp(operations: [CREATE])
        }
    "#};

    let model = generate(type_defs);
    let title = model.assert_has_concrete_entity("Movie").assert_has_attribute("title");

    assert!(title.annotations().is_empty());
}

#[test]
fn alias_sets_the_database_name() {
    let type_defs = indoc! {r#"
        type Movie {
          id: ID! @id @unique(constraintName: "movie_id")
          title: String @alias(property: "name")
          released: Int
        }
    "#};

    let model = generate(type_defs);
    let movie = model.assert_has_concrete_entity("Movie");

    let title = movie.assert_has_attribute("title");
    assert_eq!(Some("name"), title.alias());
    assert_eq!("name", title.database_name());
    assert_eq!(
        &[Annotation::Alias(AliasAnnotation {
            property: "name".into()
        })],
        title.annotations()
    );

    let released = movie.assert_has_attribute("released");
    assert_eq!(None, released.alias());
    assert_eq!("released", released.database_name());

    let id = movie.assert_has_attribute("id");
    assert!(id.is_id());
    assert!(id.is_unique());
    assert_eq!(
        &[
            Annotation::Id,
            Annotation::Unique(UniqueAnnotation {
                constraint_name: Some("movie_id".into())
            }),
        ],
        id.annotations()
    );
}

#[test]
fn alias_without_property_fails() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String @alias(property: TITLE)
        }
    "#};

    let expectation = expect![[r#"@alias argument `property` required on Movie.title"#]];

    expect_error(type_defs, &expectation);
}

#[test]
fn alias_with_an_empty_property_fails() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String @alias(property: "")
        }
    "#};

    let error = schema_model::parse_and_generate(type_defs).unwrap_err();

    assert_eq!(
        SchemaError::MissingAnnotationArgument {
            directive: "alias".into(),
            argument: "property".into(),
            entity: "Movie".into(),
            field: "title".into(),
        },
        error
    );
}

#[tracing_test::traced_test]
#[test]
fn skipped_fields_are_traced() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
          actors: [Actor!]!
        }

        type Actor {
          name: String
        }
    "#};

    generate(type_defs);

    assert!(logs_contain("skipping non-scalar field"));
}

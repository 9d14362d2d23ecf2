use crate::common::*;
use pretty_assertions::assert_eq;
use schema_model::{AttributeKind, GeneratorConfig, ScalarKind};

#[test]
fn object_types_become_concrete_entities() {
    let type_defs = indoc! {r#"
        type Movie {
          id: ID!
          title: String
          released: Int
          tags: [String!]!
        }

        type Actor {
          name: String
        }
    "#};

    let model = generate(type_defs);

    let movie = model
        .assert_has_concrete_entity("Movie")
        .assert_attribute_names(&["id", "title", "released", "tags"]);

    let tags = movie.assert_has_attribute("tags").attribute_type();
    assert_eq!(AttributeKind::Scalar(ScalarKind::String), tags.kind);
    assert!(tags.is_list);
    assert!(tags.is_required);

    let id = movie.assert_has_attribute("id");
    assert!(id.attribute_type().is_required);
    assert_eq!(Some(&ScalarKind::ID), id.scalar_kind());

    model.assert_has_concrete_entity("Actor").assert_attribute_names(&["name"]);
}

#[test]
fn non_scalar_fields_are_left_out() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
          actors: [Actor!]!
          director: Person
        }

        type Actor {
          name: String
          movies: [Movie!]!
        }

        union Person = Actor
    "#};

    let model = generate(type_defs);

    model.assert_has_concrete_entity("Movie").assert_attribute_names(&["title"]);
    model.assert_has_concrete_entity("Actor").assert_attribute_names(&["name"]);
}

#[test]
fn other_definitions_are_not_entities() {
    let type_defs = indoc! {r#"
        interface Production {
          title: String
        }

        enum Genre {
          ACTION
          DRAMA
        }

        input MovieWhere {
          title: String
        }

        scalar Email

        type Movie implements Production {
          title: String
          genre: Genre
          contact: Email
        }
    "#};

    let model = generate(type_defs);

    assert_eq!(vec!["Movie"], model.entity_names().collect::<Vec<_>>());
    model.assert_has_concrete_entity("Movie").assert_attribute_names(&["title"]);
}

#[test]
fn custom_scalars_are_kept_when_enabled() {
    let type_defs = indoc! {r#"
        scalar Email

        type User {
          name: String
          email: Email!
        }
    "#};

    let config = GeneratorConfig::default().with_custom_scalar("Email");
    let model = schema_model::parse_and_generate_with(type_defs, &config).unwrap();

    let email = model
        .assert_has_concrete_entity("User")
        .assert_attribute_names(&["name", "email"])
        .assert_has_attribute("email");

    assert_eq!(Some(&ScalarKind::Custom("Email".into())), email.scalar_kind());
}

#[test]
fn generator_config_reads_camel_case_json() {
    let config: GeneratorConfig = serde_json::from_str(r#"{ "customScalars": ["Email", "Url"] }"#).unwrap();
    assert_eq!(vec!["Email".to_owned(), "Url".to_owned()], config.custom_scalars);

    let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(GeneratorConfig::default(), config);
}

#[test]
fn duplicate_object_types_fail() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
        }

        type Movie {
          released: Int
        }
    "#};

    let expectation = expect![[r#"Duplicate node Movie"#]];

    expect_error(type_defs, &expectation);
}

#[test]
fn duplicate_fields_fail() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
          title: String
        }
    "#};

    let expectation = expect![[r#"Duplicate attribute title on Movie"#]];

    expect_error(type_defs, &expectation);
}

#[test]
fn generation_is_deterministic() {
    let type_defs = indoc! {r#"
        type Zebra { stripes: Int, name: String, born: Date }
        type Aardvark { name: String, weight: Float }
        type Movie { title: String, released: Int, rating: Float, id: ID }
        union Animal = Zebra | Aardvark
        union Anything = Movie | Zebra | Aardvark
    "#};

    let shape = |model: &schema_model::SchemaModel| {
        model
            .walk_concrete_entities()
            .map(|entity| {
                let attributes: Vec<String> = entity.attributes().map(|a| a.name().to_owned()).collect();
                (entity.name().to_owned(), attributes)
            })
            .collect::<Vec<_>>()
    };

    let first = generate(type_defs);

    for _ in 0..10 {
        let next = generate(type_defs);

        assert_eq!(
            first.entity_names().collect::<Vec<_>>(),
            next.entity_names().collect::<Vec<_>>()
        );
        assert_eq!(shape(&first), shape(&next));
    }

    assert_eq!(
        vec!["Zebra", "Aardvark", "Movie", "Animal", "Anything"],
        first.entity_names().collect::<Vec<_>>()
    );
}

#[test]
fn invalid_syntax_fails_to_parse() {
    let error = schema_model::parse_and_generate("type Movie {").unwrap_err();
    assert!(matches!(error, schema_model::SchemaError::Parse(_)));
}

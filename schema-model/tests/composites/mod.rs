use crate::common::*;
use pretty_assertions::assert_eq;
use schema_model::{SchemaError, walkers::EntityWalker};

#[test]
fn unions_become_composite_entities() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
        }

        type Series {
          title: String
          episodes: Int
        }

        type Actor {
          name: String
        }

        union Production = Movie | Series
    "#};

    let model = generate(type_defs);
    let production = model.assert_has_composite_entity("Production");

    let members: Vec<&str> = production.members().map(|member| member.name()).collect();
    assert_eq!(vec!["Movie", "Series"], members);

    let series = model.assert_has_concrete_entity("Series");
    let composites: Vec<&str> = series.composites().map(|composite| composite.name()).collect();
    assert_eq!(vec!["Production"], composites);

    let actor = model.assert_has_concrete_entity("Actor");
    assert_eq!(0, actor.composites().count());
}

#[test]
fn entities_are_found_by_name_whatever_their_kind() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
        }

        union Production = Movie
    "#};

    let model = generate(type_defs);

    assert!(matches!(model.find_entity("Movie"), Some(EntityWalker::Concrete(_))));
    assert!(matches!(model.find_entity("Production"), Some(EntityWalker::Composite(_))));
    assert!(model.find_entity("Series").is_none());

    assert!(model.find_concrete_entity("Production").is_none());
    assert!(model.find_composite_entity("Movie").is_none());
    assert_eq!("Production", model.find_entity("Production").unwrap().name());
}

#[test]
fn unions_may_be_declared_before_their_members() {
    let type_defs = indoc! {r#"
        union Production = Movie | Series

        type Movie {
          title: String
        }

        type Series {
          title: String
        }
    "#};

    let model = generate(type_defs);

    assert_eq!(
        vec!["Movie", "Series", "Production"],
        model.entity_names().collect::<Vec<_>>()
    );
}

#[test]
fn unresolved_members_fail() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
        }

        type Actor {
          name: String
        }

        union Person = Director
    "#};

    let expectation = expect![[r#"Could not find concrete entity with name Director in composite entity Person"#]];

    expect_error(type_defs, &expectation);

    let error = schema_model::parse_and_generate(type_defs).unwrap_err();
    assert_eq!(
        SchemaError::UnresolvedCompositeMember {
            composite: "Person".into(),
            member: "Director".into(),
        },
        error
    );
}

#[test]
fn members_must_be_object_types() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
        }

        union Production = Movie
        union Anything = Production
    "#};

    let expectation = expect![[r#"Could not find concrete entity with name Production in composite entity Anything"#]];

    expect_error(type_defs, &expectation);
}

#[test]
fn empty_unions_fail() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
        }

        union Nothing
    "#};

    let expectation = expect![[r#"Composite entity Nothing has no concrete entities"#]];

    expect_error(type_defs, &expectation);
}

#[test]
fn unions_cannot_reuse_an_entity_name() {
    let type_defs = indoc! {r#"
        type Movie {
          title: String
        }

        union Movie = Movie
    "#};

    let expectation = expect![[r#"Duplicate node Movie"#]];

    expect_error(type_defs, &expectation);
}

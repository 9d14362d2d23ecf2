use crate::common::*;
use pretty_assertions::assert_eq;
use query_compiler::{Direction, GraphQLOptions, translate_union_read};
use serde_json::json;

#[test]
fn union_list_read() {
    let model = productions();

    let expected = expect![[r#"
        CALL {
            MATCH (var0:Movie)
            RETURN var0 { .title, .released, __resolveType: "Movie" } AS this
            UNION
            MATCH (var1:Series)
            RETURN var1 { .title, .episodes, __resolveType: "Series" } AS this
            UNION
            MATCH (var2:Documentary)
            RETURN var2 { title: var2.name, .subject, __resolveType: "Documentary" } AS this
        }
        WITH this
        RETURN collect(this) AS this"#]];

    let query = expect_query(
        translate_union_read(&model, "Production", &GraphQLOptions::new(), true),
        &expected,
    );

    assert!(query.params.is_empty());
}

#[test]
fn union_single_read_with_client_options() {
    let model = productions();

    let options: GraphQLOptions = serde_json::from_value(json!({
        "sort": [{ "title": "DESC" }],
        "offset": 2,
        "limit": 1
    }))
    .unwrap();

    let expected = expect![[r#"
        CALL {
            MATCH (var0:Movie)
            RETURN var0 { .title, .released, __resolveType: "Movie" } AS this
            UNION
            MATCH (var1:Series)
            RETURN var1 { .title, .episodes, __resolveType: "Series" } AS this
            UNION
            MATCH (var2:Documentary)
            RETURN var2 { title: var2.name, .subject, __resolveType: "Documentary" } AS this
        }
        WITH this
        ORDER BY this.title DESC
        SKIP $param0
        LIMIT $param1
        RETURN head(collect(this)) AS this"#]];

    let query = expect_query(translate_union_read(&model, "Production", &options, false), &expected);

    assert_eq!(
        json!({ "param0": 2, "param1": 1 }),
        serde_json::to_value(&query.params).unwrap()
    );
}

#[test]
fn union_sorting_by_a_member_only_field() {
    let model = productions();
    let options = GraphQLOptions::new().sort_by("episodes", Direction::Asc);

    let query = translate_union_read(&model, "Production", &options, true).unwrap();

    assert!(query.text.contains("ORDER BY this.episodes ASC"));
}

#[test]
fn union_sorting_by_an_unknown_field() {
    let model = productions();
    let options = GraphQLOptions::new().sort_by("budget", Direction::Asc);

    expect_error(
        translate_union_read(&model, "Production", &options, true),
        &expect!["Cannot sort by `budget`: it is not a visible property of `this`."],
    );
}

#[test]
fn union_read_of_a_missing_entity() {
    let model = productions();

    expect_error(
        translate_union_read(&model, "Media", &GraphQLOptions::new(), true),
        &expect!["Entity `Media` does not exist in the schema."],
    );
}

#[test]
#[tracing_test::traced_test]
fn union_reads_log_the_rendered_query() {
    let model = productions();

    translate_union_read(&model, "Production", &GraphQLOptions::new().limit(3), true).unwrap();

    assert!(logs_contain("RETURN collect(this) AS this"));
    assert!(logs_contain("params: [param0: 3]"));
}

#[test]
fn the_model_is_shared_between_translations() {
    let model = productions();

    let texts: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| translate_union_read(&model, "Production", &GraphQLOptions::new(), true)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap().text)
            .collect()
    });

    assert!(texts.windows(2).all(|pair| pair[0] == pair[1]));
}

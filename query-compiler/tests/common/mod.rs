pub(crate) use ::indoc::indoc;
pub(crate) use expect_test::expect;

use cypher_builder::visitor::CypherQuery;
use query_compiler::TranslateResult;
use schema_model::SchemaModel;

#[track_caller]
pub(crate) fn generate(type_defs: &str) -> SchemaModel {
    match schema_model::parse_and_generate(type_defs) {
        Ok(model) => model,
        Err(err) => panic!("Model generation failed\n\n{err}"),
    }
}

#[track_caller]
pub(crate) fn expect_query(result: TranslateResult<CypherQuery>, expectation: &expect_test::Expect) -> CypherQuery {
    match result {
        Ok(query) => {
            expectation.assert_eq(&query.text);
            query
        }
        Err(err) => panic!("Translation failed\n\n{err}"),
    }
}

#[track_caller]
pub(crate) fn expect_error(result: TranslateResult<CypherQuery>, expectation: &expect_test::Expect) {
    match result {
        Ok(query) => panic!("Expected a translation error, got\n\n{}", query.text),
        Err(err) => expectation.assert_eq(&err.to_string()),
    }
}

pub(crate) fn productions() -> SchemaModel {
    generate(indoc! {r#"
        type Movie {
          title: String
          released: Int
          score: Float @cypher(statement: "MATCH (this)<-[:REVIEWED]-(r) RETURN avg(r.score)")
        }

        type Series {
          title: String
          episodes: Int
        }

        type Documentary {
          title: String @alias(property: "name")
          subject: String
        }

        union Production = Movie | Series | Documentary
    "#})
}

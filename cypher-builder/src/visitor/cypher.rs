use crate::{
    ast::*,
    visitor::{CypherQuery, Visitor},
};
use indexmap::IndexMap;
use tracing::debug;

const PARAM_PREFIX: &str = "param";

/// A visitor to generate statements for Neo4j.
///
/// The returned parameter map can be passed to a driver as-is.
pub struct Cypher {
    parameters: IndexMap<String, Value>,
}

impl Visitor for Cypher {
    fn build<C>(clause: C) -> CypherQuery
    where
        C: Into<Clause>,
    {
        let mut cypher = Cypher {
            parameters: IndexMap::new(),
        };

        let text = cypher.visit_clause(clause.into());

        debug!("query: \"{}\", params: {}", text, Params(&cypher.parameters));

        CypherQuery {
            text,
            params: cypher.parameters,
        }
    }

    fn add_parameter(&mut self, value: Value) -> String {
        let name = format!("{PARAM_PREFIX}{}", self.parameters.len());
        self.parameters.insert(name.clone(), value);

        name
    }
}

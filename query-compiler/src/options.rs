use cypher_builder::ast::Order;
use indexmap::IndexMap;
use serde::Deserialize;

/// The `options` argument of a read: sorting and pagination.
///
/// Deserializes from the argument as sent by a client, where every sort
/// entry maps field names to a direction:
///
/// ```rust
/// # use query_compiler::*;
/// let options: GraphQLOptions = serde_json::from_str(r#"{
///     "sort": [{ "title": "DESC" }, { "released": "ASC" }],
///     "limit": 10
/// }"#).unwrap();
///
/// assert_eq!(
///     GraphQLOptions::new().sort_by("title", Direction::Desc).sort_by("released", Direction::Asc).limit(10),
///     options
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OptionsArgument")]
pub struct GraphQLOptions {
    pub sort: Vec<SortField>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl GraphQLOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.sort.push(SortField {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// True if the options change anything about the result.
    pub fn is_empty(&self) -> bool {
        self.sort.is_empty() && self.limit.is_none() && self.offset.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn order(self) -> Order {
        match self {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct OptionsArgument {
    sort: Vec<IndexMap<String, Direction>>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl From<OptionsArgument> for GraphQLOptions {
    fn from(argument: OptionsArgument) -> Self {
        let sort = argument
            .sort
            .into_iter()
            .flatten()
            .map(|(field, direction)| SortField { field, direction })
            .collect();

        Self {
            sort,
            limit: argument.limit,
            offset: argument.offset,
        }
    }
}

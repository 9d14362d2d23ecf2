//! Visitors for reading an abstract Cypher syntax tree, generating the query
//! text and gathering parameters in the right order.
//!
//! Rendering cannot fail: every scoping rule was checked while the tree was
//! composed.
mod cypher;

pub use self::cypher::Cypher;

use crate::ast::*;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// A rendered statement, ready to be handed to a driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CypherQuery {
    pub text: String,
    pub params: IndexMap<String, Value>,
}

impl fmt::Display for CypherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A function travelling through the query AST, building the final query
/// string and gathering parameters sent to the database together with the
/// query.
pub trait Visitor: Sized {
    /// Quote character for identifiers that are not plain words.
    const C_BACKTICK: &'static str = "`";
    /// Prefix of a parameter reference.
    const C_PARAM: &'static str = "$";
    /// Indentation of subquery bodies.
    const C_INDENT: &'static str = "    ";

    /// Converts the clause tree into query text and parameters.
    fn build<C>(clause: C) -> CypherQuery
    where
        C: Into<Clause>;

    /// Stores a value for the parameter map and returns the name it is
    /// referenced by.
    fn add_parameter(&mut self, value: Value) -> String;

    fn visit_clause(&mut self, clause: Clause) -> String {
        match clause {
            Clause::Match(m) => self.visit_match(m),
            Clause::With(with) => self.visit_with(with),
            Clause::Return(ret) => self.visit_return(ret),
            Clause::Unwind(unwind) => self.visit_unwind(unwind),
            Clause::Call(call) => self.visit_call(call),
            Clause::Union(union) => self.visit_union(union),
            Clause::Concat(clauses) => self.visit_concat(clauses),
        }
    }

    fn visit_concat(&mut self, clauses: Vec<Clause>) -> String {
        clauses
            .into_iter()
            .map(|clause| self.visit_clause(clause))
            .filter(|text| !text.is_empty())
            .join("\n")
    }

    fn visit_match(&mut self, m: Match) -> String {
        let keyword = if m.optional { "OPTIONAL MATCH" } else { "MATCH" };
        let mut result = format!("{keyword} {}", self.visit_pattern(m.pattern));

        if !m.conditions.is_empty() {
            result.push_str("\nWHERE ");
            result.push_str(&self.visit_conditions(m.conditions));
        }

        result
    }

    fn visit_pattern(&mut self, pattern: NodePattern) -> String {
        let mut result = format!("({}", self.visit_variable(pattern.variable));

        for label in pattern.labels.iter() {
            result.push(':');
            result.push_str(&escape_identifier::<Self>(label));
        }

        if !pattern.properties.is_empty() {
            let properties = pattern
                .properties
                .into_iter()
                .map(|(key, value)| format!("{}: {}", escape_identifier::<Self>(&key), self.visit_expression(value)))
                .join(", ");

            result.push_str(&format!(" {{ {properties} }}"));
        }

        result.push(')');
        result
    }

    fn visit_conditions(&mut self, conditions: ConditionTree) -> String {
        conditions
            .0
            .into_iter()
            .map(|condition| self.visit_condition(condition))
            .join(" AND ")
    }

    fn visit_condition(&mut self, condition: Condition) -> String {
        match condition {
            Condition::Equals(left, right) => {
                format!("{} = {}", self.visit_expression(*left), self.visit_expression(*right))
            }
            Condition::NotEquals(left, right) => {
                format!("{} <> {}", self.visit_expression(*left), self.visit_expression(*right))
            }
            Condition::IsNull(expression) => format!("{} IS NULL", self.visit_expression(*expression)),
            Condition::IsNotNull(expression) => format!("{} IS NOT NULL", self.visit_expression(*expression)),
        }
    }

    fn visit_with(&mut self, with: With) -> String {
        self.visit_projection("WITH", with.projection)
    }

    fn visit_return(&mut self, ret: Return) -> String {
        self.visit_projection("RETURN", ret.projection)
    }

    fn visit_projection(&mut self, keyword: &str, projection: Projection) -> String {
        let mut result = String::from(keyword);

        if projection.distinct {
            result.push_str(" DISTINCT");
        }

        if projection.items.is_empty() {
            result.push_str(" *");
        } else {
            let items = projection
                .items
                .into_iter()
                .map(|item| self.visit_projection_item(item))
                .join(", ");

            result.push(' ');
            result.push_str(&items);
        }

        if !projection.ordering.is_empty() {
            result.push_str("\nORDER BY ");
            result.push_str(&self.visit_ordering(projection.ordering));
        }

        if let Some(skip) = projection.skip {
            result.push_str(&format!("\nSKIP {}", self.visit_expression(skip)));
        }

        if let Some(limit) = projection.limit {
            result.push_str(&format!("\nLIMIT {}", self.visit_expression(limit)));
        }

        result
    }

    fn visit_projection_item(&mut self, item: ProjectionItem) -> String {
        let expression = self.visit_expression(item.expression);

        match item.alias {
            Some(alias) => format!("{expression} AS {}", self.visit_variable(alias)),
            None => expression,
        }
    }

    fn visit_ordering(&mut self, ordering: Ordering) -> String {
        ordering
            .0
            .into_iter()
            .map(|(expression, order)| {
                let expression = self.visit_expression(expression);

                match order {
                    Some(Order::Asc) => format!("{expression} ASC"),
                    Some(Order::Desc) => format!("{expression} DESC"),
                    None => expression,
                }
            })
            .join(", ")
    }

    fn visit_unwind(&mut self, unwind: Unwind) -> String {
        format!(
            "UNWIND {} AS {}",
            self.visit_expression(unwind.expression),
            self.visit_variable(unwind.alias)
        )
    }

    fn visit_call(&mut self, call: Call) -> String {
        let mut body = Vec::new();

        if !call.imports.is_empty() {
            let imports = call.imports.into_iter().map(|import| self.visit_variable(import)).join(", ");
            body.push(format!("WITH {imports}"));
        }

        body.push(self.visit_clause(*call.body));

        let body = body
            .iter()
            .flat_map(|text| text.lines())
            .map(|line| format!("{}{line}", Self::C_INDENT))
            .join("\n");

        format!("CALL {{\n{body}\n}}")
    }

    fn visit_union(&mut self, union: Union) -> String {
        let separator = if union.all { "\nUNION ALL\n" } else { "\nUNION\n" };

        union
            .branches
            .into_iter()
            .map(|branch| self.visit_clause(branch))
            .join(separator)
    }

    fn visit_expression(&mut self, expression: Expression) -> String {
        match expression {
            Expression::Variable(variable) => self.visit_variable(variable),
            Expression::Property(property) => self.visit_property(property),
            Expression::Parameter(value) => self.visit_parameter(value),
            Expression::Raw(raw) => self.visit_raw(raw),
            Expression::List(items) => {
                let items = items.into_iter().map(|item| self.visit_expression(item)).join(", ");
                format!("[{items}]")
            }
            Expression::Map(map) => self.visit_map(map),
            Expression::MapProjection(projection) => self.visit_map_projection(projection),
            Expression::Function(function) => self.visit_function(function),
        }
    }

    fn visit_variable(&mut self, variable: Variable) -> String {
        escape_identifier::<Self>(variable.name())
    }

    fn visit_property(&mut self, property: Property) -> String {
        format!(
            "{}.{}",
            self.visit_variable(property.variable),
            escape_identifier::<Self>(&property.key)
        )
    }

    fn visit_parameter(&mut self, value: Value) -> String {
        let name = self.add_parameter(value);
        format!("{}{name}", Self::C_PARAM)
    }

    fn visit_raw(&mut self, raw: Raw) -> String {
        literal::<Self>(&raw.0)
    }

    fn visit_function(&mut self, function: Function) -> String {
        let name = function.name();
        let distinct = if function.is_distinct() { "DISTINCT " } else { "" };
        let argument = self.visit_expression(function.into_argument());

        format!("{name}({distinct}{argument})")
    }

    fn visit_map(&mut self, map: MapExpression) -> String {
        if map.entries.is_empty() {
            return String::from("{}");
        }

        let entries = map
            .entries
            .into_iter()
            .map(|(key, value)| format!("{}: {}", escape_identifier::<Self>(&key), self.visit_expression(value)))
            .join(", ");

        format!("{{ {entries} }}")
    }

    fn visit_map_projection(&mut self, projection: MapProjection) -> String {
        let variable = self.visit_variable(projection.variable);

        let body = projection
            .items
            .into_iter()
            .map(|(key, value)| match value {
                Some(value) => format!("{}: {}", escape_identifier::<Self>(&key), self.visit_expression(value)),
                None => format!(".{}", escape_identifier::<Self>(&key)),
            })
            .join(", ");

        if body.is_empty() {
            format!("{variable} {{}}")
        } else {
            format!("{variable} {{ {body} }}")
        }
    }
}

/// Plain words are written as-is, anything else is quoted.
fn escape_identifier<V: Visitor>(identifier: &str) -> String {
    let mut chars = identifier.chars();

    let plain = chars.next().is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if plain {
        identifier.to_owned()
    } else {
        let quote = V::C_BACKTICK;
        let escaped = identifier.replace(quote, &format!("{quote}{quote}"));

        format!("{quote}{escaped}{quote}")
    }
}

fn literal<V: Visitor>(value: &Value) -> String {
    match value {
        Value::Null => String::from("NULL"),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(n) => format!("{n:?}"),
        Value::String(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
        Value::List(values) => format!("[{}]", values.iter().map(literal::<V>).join(", ")),
        Value::Map(entries) if entries.is_empty() => String::from("{}"),
        Value::Map(entries) => {
            let entries = entries
                .iter()
                .map(|(key, value)| format!("{}: {}", escape_identifier::<V>(key), literal::<V>(value)))
                .join(", ");

            format!("{{ {entries} }}")
        }
    }
}

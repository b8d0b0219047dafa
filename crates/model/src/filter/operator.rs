use serde::{Deserialize, Serialize};

/// Comparison applied by a leaf predicate.
///
/// Wire names and codes live in the compiler's operator table, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    /// Wildcard match, `*` and `?` are interpreted by the server.
    Like,
    IsNull,
    ContainsAny,
    ContainsAll,
    WithinGeoRange,
}

/// Boolean connective of a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combinator {
    And,
    Or,
}

use super::{
    operator::{Combinator, Operator},
    path::FilterPath,
    value::FilterValue,
};
use serde::{Deserialize, Serialize};

/// Boolean predicate over object properties.
///
/// Leaves compare one property with a value, composites join any number of
/// children with the same connective. Children keep their insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterTree {
    Leaf(Comparison),
    Composite(Composite),
}

/// A single `path <operator> value` predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub operator: Operator,
    pub path: FilterPath,
    pub value: FilterValue,
}

/// `And` / `Or` over child predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    pub operator: Combinator,
    pub operands: Vec<FilterTree>,
}

impl FilterTree {
    pub fn leaf(
        operator: Operator,
        path: impl Into<FilterPath>,
        value: impl Into<FilterValue>,
    ) -> Self {
        FilterTree::Leaf(Comparison {
            operator,
            path: path.into(),
            value: value.into(),
        })
    }

    pub fn and(operands: Vec<FilterTree>) -> Self {
        FilterTree::Composite(Composite {
            operator: Combinator::And,
            operands,
        })
    }

    pub fn or(operands: Vec<FilterTree>) -> Self {
        FilterTree::Composite(Composite {
            operator: Combinator::Or,
            operands,
        })
    }

    /// Number of levels, a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            FilterTree::Leaf(_) => 1,
            FilterTree::Composite(composite) => {
                1 + composite
                    .operands
                    .iter()
                    .map(FilterTree::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            FilterTree::Leaf(_) => 1,
            FilterTree::Composite(composite) => {
                composite.operands.iter().map(FilterTree::leaf_count).sum()
            }
        }
    }

    pub fn composite_count(&self) -> usize {
        match self {
            FilterTree::Leaf(_) => 0,
            FilterTree::Composite(composite) => {
                1 + composite
                    .operands
                    .iter()
                    .map(FilterTree::composite_count)
                    .sum::<usize>()
            }
        }
    }

    /// Iterates the leaves left to right.
    pub fn leaves(&self) -> Vec<&Comparison> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Comparison>) {
        match self {
            FilterTree::Leaf(comparison) => out.push(comparison),
            FilterTree::Composite(composite) => {
                for operand in &composite.operands {
                    operand.collect_leaves(out);
                }
            }
        }
    }
}

impl From<Comparison> for FilterTree {
    fn from(comparison: Comparison) -> Self {
        FilterTree::Leaf(comparison)
    }
}

impl From<Composite> for FilterTree {
    fn from(composite: Composite) -> Self {
        FilterTree::Composite(composite)
    }
}

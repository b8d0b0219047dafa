use crate::{
    error::Result,
    settings::{ClassificationPolicy, CompileSettings},
};
use model::{
    ClassificationError, Comparison, Composite, FilterTree,
    filter::classify::{Classified, DateSlot, classify},
};
use tracing::{debug, warn};

/// A trait for compiling filter trees into a specific wire format.
///
/// Implementors describe a single leaf and a single composite node; the
/// provided methods walk the tree, so every format sees the same child order
/// and the same classification policy.
pub trait FilterCompiler {
    /// The type of filter that this compiler produces.
    type Filter;

    /// Where timestamps are classified for this format.
    const DATE_SLOT: DateSlot;

    fn settings(&self) -> &CompileSettings;

    /// Build a leaf node. `value` is `None` only under the permissive policy.
    fn leaf(&self, comparison: &Comparison, value: Option<Classified>) -> Self::Filter;

    /// Build a composite node from its compiled operands, in input order.
    fn composite(&self, composite: &Composite, operands: Vec<Self::Filter>) -> Self::Filter;

    /// Compile an optional tree. No tree means no filter.
    fn compile(&self, tree: Option<&FilterTree>) -> Result<Option<Self::Filter>> {
        let Some(tree) = tree else {
            return Ok(None);
        };

        debug!(
            depth = tree.depth(),
            leaves = tree.leaf_count(),
            "Compiling filter tree"
        );
        self.compile_tree(tree).map(Some)
    }

    /// Recursively compile a tree, depth first.
    fn compile_tree(&self, tree: &FilterTree) -> Result<Self::Filter> {
        match tree {
            FilterTree::Leaf(comparison) => {
                let value = self.classify_leaf(comparison)?;
                Ok(self.leaf(comparison, value))
            }
            FilterTree::Composite(composite) => {
                let operands = composite
                    .operands
                    .iter()
                    .map(|operand| self.compile_tree(operand))
                    .collect::<Result<Vec<_>>>()?;
                Ok(self.composite(composite, operands))
            }
        }
    }

    fn classify_leaf(&self, comparison: &Comparison) -> Result<Option<Classified>> {
        if let Some(value) = classify(&comparison.value, Self::DATE_SLOT) {
            return Ok(Some(value));
        }

        match self.settings().policy() {
            ClassificationPolicy::Strict => Err(unclassified(comparison).into()),
            ClassificationPolicy::Permissive => {
                warn!(
                    "Omitting unclassifiable {} value for filter on '{}'",
                    comparison.value.type_name(),
                    comparison.path
                );
                Ok(None)
            }
        }
    }
}

fn unclassified(comparison: &Comparison) -> ClassificationError {
    let path = comparison.path.to_string();
    if comparison.value.is_empty_array() {
        ClassificationError::EmptyArray { path }
    } else {
        ClassificationError::UnsupportedValue {
            path,
            reason: format!("{} value is not a finite number", comparison.value.type_name()),
        }
    }
}

use super::{compiler::FilterCompiler, operator::WireOperator};
use crate::{error::Result, settings::CompileSettings};
use connectors::rest::filter::{RestFilter, RestGeoRange, RestValue};
use model::{
    Comparison, Composite, FilterTree,
    filter::classify::{Classified, DateSlot},
};

/// Compiles filter trees into the JSON `where` document.
///
/// Unlike the binary format, timestamps keep their own `valueDate` /
/// `valueDateArray` keys. UUIDs still collapse into text.
#[derive(Debug, Clone, Default)]
pub struct RestFilterCompiler {
    settings: CompileSettings,
}

impl RestFilterCompiler {
    pub fn new(settings: CompileSettings) -> Self {
        Self { settings }
    }

    /// Compile straight to a JSON object.
    pub fn compile_json(&self, tree: Option<&FilterTree>) -> Result<Option<serde_json::Value>> {
        match self.compile(tree)? {
            Some(filter) => Ok(Some(filter.to_json()?)),
            None => Ok(None),
        }
    }
}

impl FilterCompiler for RestFilterCompiler {
    type Filter = RestFilter;

    const DATE_SLOT: DateSlot = DateSlot::Dedicated;

    fn settings(&self) -> &CompileSettings {
        &self.settings
    }

    fn leaf(&self, comparison: &Comparison, value: Option<Classified>) -> RestFilter {
        RestFilter::value(
            WireOperator::from(comparison.operator).name(),
            comparison.path.to_vec(),
            value.map(to_rest_value),
        )
    }

    fn composite(&self, composite: &Composite, operands: Vec<RestFilter>) -> RestFilter {
        RestFilter::composite(WireOperator::from(composite.operator).name(), operands)
    }
}

fn to_rest_value(value: Classified) -> RestValue {
    match value {
        Classified::Text(v) => RestValue::ValueText(v),
        Classified::Int(v) => RestValue::ValueInt(v),
        Classified::Boolean(v) => RestValue::ValueBoolean(v),
        Classified::Number(v) => RestValue::ValueNumber(v),
        Classified::Date(v) => RestValue::ValueDate(v),
        Classified::GeoRange(v) => {
            RestValue::ValueGeoRange(RestGeoRange::new(v.latitude, v.longitude, v.distance))
        }
        Classified::TextArray(v) => RestValue::ValueTextArray(v),
        Classified::IntArray(v) => RestValue::ValueIntArray(v),
        Classified::NumberArray(v) => RestValue::ValueNumberArray(v),
        Classified::BooleanArray(v) => RestValue::ValueBooleanArray(v),
        Classified::DateArray(v) => RestValue::ValueDateArray(v),
    }
}

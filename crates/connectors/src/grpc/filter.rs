//! `Filters` message of the search service's protobuf schema.
//!
//! Types are generated by `prost-build` from `proto/filters.proto`.

include!(concat!(env!("OUT_DIR"), "/filters.v1.rs"));

impl filters::TestValue {
    /// Schema field name of the populated slot.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::ValueText(_) => "value_text",
            Self::ValueInt(_) => "value_int",
            Self::ValueBoolean(_) => "value_boolean",
            Self::ValueNumber(_) => "value_number",
            Self::ValueTextArray(_) => "value_text_array",
            Self::ValueIntArray(_) => "value_int_array",
            Self::ValueBooleanArray(_) => "value_boolean_array",
            Self::ValueNumberArray(_) => "value_number_array",
            Self::ValueGeo(_) => "value_geo",
        }
    }
}

impl Filters {
    /// A comparison on `on` carrying at most one value slot.
    pub fn leaf(
        operator: filters::Operator,
        on: Vec<String>,
        test_value: Option<filters::TestValue>,
    ) -> Self {
        Filters {
            operator: operator as i32,
            on,
            filters: Vec::new(),
            test_value,
        }
    }

    /// An `And`/`Or` node over already compiled children.
    pub fn composite(operator: filters::Operator, filters: Vec<Filters>) -> Self {
        Filters {
            operator: operator as i32,
            on: Vec::new(),
            filters,
            test_value: None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(
            self.operator(),
            filters::Operator::And | filters::Operator::Or
        )
    }
}

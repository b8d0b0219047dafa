use super::{compiler::FilterCompiler, operator::WireOperator};
use crate::{error::Result, settings::CompileSettings};
use connectors::grpc::filter::{
    BooleanArray, Filters, GeoCoordinatesFilter, IntArray, NumberArray, TextArray,
    filters::TestValue,
};
use model::{
    Comparison, Composite, FilterTree,
    filter::classify::{Classified, DateSlot},
};
use prost::Message;

/// Compiles filter trees into the protobuf `Filters` message.
///
/// Timestamps share the text slot here; the binary schema has no date type.
#[derive(Debug, Clone, Default)]
pub struct GrpcFilterCompiler {
    settings: CompileSettings,
}

impl GrpcFilterCompiler {
    pub fn new(settings: CompileSettings) -> Self {
        Self { settings }
    }

    /// Compile straight to the encoded message bytes.
    pub fn compile_bytes(&self, tree: Option<&FilterTree>) -> Result<Option<Vec<u8>>> {
        Ok(self.compile(tree)?.map(|filters| filters.encode_to_vec()))
    }
}

impl FilterCompiler for GrpcFilterCompiler {
    type Filter = Filters;

    const DATE_SLOT: DateSlot = DateSlot::Text;

    fn settings(&self) -> &CompileSettings {
        &self.settings
    }

    fn leaf(&self, comparison: &Comparison, value: Option<Classified>) -> Filters {
        Filters::leaf(
            WireOperator::from(comparison.operator).grpc(),
            comparison.path.to_vec(),
            value.map(to_test_value),
        )
    }

    fn composite(&self, composite: &Composite, operands: Vec<Filters>) -> Filters {
        Filters::composite(WireOperator::from(composite.operator).grpc(), operands)
    }
}

fn to_test_value(value: Classified) -> TestValue {
    match value {
        Classified::Text(v) | Classified::Date(v) => TestValue::ValueText(v),
        Classified::Int(v) => TestValue::ValueInt(v),
        Classified::Boolean(v) => TestValue::ValueBoolean(v),
        Classified::Number(v) => TestValue::ValueNumber(v),
        // The wire message carries single precision coordinates.
        Classified::GeoRange(v) => TestValue::ValueGeo(GeoCoordinatesFilter {
            latitude: v.latitude as f32,
            longitude: v.longitude as f32,
            distance: v.distance as f32,
        }),
        Classified::TextArray(values) | Classified::DateArray(values) => {
            TestValue::ValueTextArray(TextArray { values })
        }
        Classified::IntArray(values) => TestValue::ValueIntArray(IntArray { values }),
        Classified::NumberArray(values) => TestValue::ValueNumberArray(NumberArray { values }),
        Classified::BooleanArray(values) => TestValue::ValueBooleanArray(BooleanArray { values }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::FilterError,
        settings::{ClassificationPolicy, CompileSettingsBuilder},
    };
    use chrono::{TimeZone, Utc};
    use connectors::grpc::filter::filters::Operator as GrpcOperator;
    use model::{ClassificationError, FilterValue, GeoRange, Operator};
    use tracing_test::traced_test;
    use uuid::Uuid;

    fn compile_leaf(value: impl Into<FilterValue>) -> Filters {
        let tree = FilterTree::leaf(Operator::Equal, "field", value);
        GrpcFilterCompiler::default()
            .compile(Some(&tree))
            .unwrap()
            .unwrap()
    }

    /// Test-only inverse of the compiler: what a server would read back.
    fn decode(filters: &Filters) -> Filters {
        Filters::decode(filters.encode_to_vec().as_slice()).unwrap()
    }

    #[test]
    fn test_compile_none() {
        let compiler = GrpcFilterCompiler::default();
        assert_eq!(compiler.compile(None).unwrap(), None);
        assert_eq!(compiler.compile_bytes(None).unwrap(), None);
    }

    #[test]
    fn test_scalar_slots_roundtrip() {
        let cases = [
            (FilterValue::from("Ann"), TestValue::ValueText("Ann".into())),
            (FilterValue::from(0), TestValue::ValueInt(0)),
            (FilterValue::from(-7), TestValue::ValueInt(-7)),
            (FilterValue::from(false), TestValue::ValueBoolean(false)),
            (FilterValue::from(2.5), TestValue::ValueNumber(2.5)),
        ];

        for (value, expected) in cases {
            let filters = decode(&compile_leaf(value.clone()));
            assert_eq!(filters.test_value, Some(expected), "value {value:?}");
            assert_eq!(filters.operator(), GrpcOperator::Equal);
            assert_eq!(filters.on, vec!["field".to_string()]);
            assert!(filters.filters.is_empty());
        }
    }

    #[test]
    fn test_array_slots_roundtrip() {
        let filters = decode(&compile_leaf(vec![1_i64, 2, 3]));
        assert_eq!(
            filters.test_value,
            Some(TestValue::ValueIntArray(IntArray {
                values: vec![1, 2, 3]
            }))
        );

        let filters = decode(&compile_leaf(vec![0.5, 1.5]));
        assert_eq!(
            filters.test_value,
            Some(TestValue::ValueNumberArray(NumberArray {
                values: vec![0.5, 1.5]
            }))
        );

        let filters = decode(&compile_leaf(vec![true, false]));
        assert_eq!(
            filters.test_value,
            Some(TestValue::ValueBooleanArray(BooleanArray {
                values: vec![true, false]
            }))
        );
    }

    #[test]
    fn test_uuid_and_date_recover_string_form() {
        let id = Uuid::parse_str("8f1c2b9e-3a4d-4c5e-9f60-7a8b9c0d1e2f").unwrap();
        let filters = decode(&compile_leaf(id));
        assert_eq!(
            filters.test_value,
            Some(TestValue::ValueText(
                "8f1c2b9e-3a4d-4c5e-9f60-7a8b9c0d1e2f".into()
            ))
        );

        let born = Utc.with_ymd_and_hms(2023, 1, 1, 12, 30, 0).unwrap();
        let filters = decode(&compile_leaf(born));
        assert_eq!(
            filters.test_value,
            Some(TestValue::ValueText(
                "2023-01-01T12:30:00.000000+00:00".into()
            ))
        );

        let filters = decode(&compile_leaf(vec![born]));
        assert_eq!(
            filters.test_value,
            Some(TestValue::ValueTextArray(TextArray {
                values: vec!["2023-01-01T12:30:00.000000+00:00".into()]
            }))
        );
    }

    #[test]
    fn test_geo_range() {
        let tree = FilterTree::leaf(
            Operator::WithinGeoRange,
            "location",
            GeoRange::new(52.5, 13.25, 2000.0),
        );
        let filters = decode(&GrpcFilterCompiler::default().compile(Some(&tree)).unwrap().unwrap());

        assert_eq!(filters.operator(), GrpcOperator::WithinGeoRange);
        assert_eq!(
            filters.test_value,
            Some(TestValue::ValueGeo(GeoCoordinatesFilter {
                latitude: 52.5,
                longitude: 13.25,
                distance: 2000.0,
            }))
        );
    }

    #[test]
    fn test_nested_path() {
        let tree = FilterTree::leaf(Operator::Like, ["writtenBy", "Author", "name"], "J*");
        let filters = GrpcFilterCompiler::default().compile(Some(&tree)).unwrap().unwrap();
        assert_eq!(filters.on, vec!["writtenBy", "Author", "name"]);
        assert_eq!(filters.operator(), GrpcOperator::Like);
    }

    #[test]
    fn test_strict_rejects_empty_array() {
        let tree = FilterTree::leaf(Operator::ContainsAny, "tags", Vec::<String>::new());
        let err = GrpcFilterCompiler::default().compile(Some(&tree)).unwrap_err();

        assert!(matches!(
            err,
            FilterError::Classification(ClassificationError::EmptyArray { ref path }) if path == "tags"
        ));
    }

    #[test]
    fn test_strict_rejects_nan() {
        let tree = FilterTree::leaf(Operator::Equal, "score", f64::NAN);
        let err = GrpcFilterCompiler::default().compile(Some(&tree)).unwrap_err();

        assert!(matches!(
            err,
            FilterError::Classification(ClassificationError::UnsupportedValue { .. })
        ));
    }

    #[test]
    #[traced_test]
    fn test_permissive_omits_value() {
        let settings = CompileSettingsBuilder::new()
            .policy(ClassificationPolicy::Permissive)
            .build();
        let tree = FilterTree::and(vec![
            FilterTree::leaf(Operator::ContainsAny, "tags", Vec::<String>::new()),
            FilterTree::leaf(Operator::Equal, "age", 3),
        ]);

        let filters = decode(&GrpcFilterCompiler::new(settings).compile(Some(&tree)).unwrap().unwrap());

        assert_eq!(filters.filters.len(), 2);
        assert_eq!(filters.filters[0].on, vec!["tags".to_string()]);
        assert_eq!(filters.filters[0].test_value, None);
        assert_eq!(filters.filters[1].test_value, Some(TestValue::ValueInt(3)));
        assert!(logs_contain("Omitting unclassifiable text[] value for filter on 'tags'"));
    }

    #[test]
    fn test_compile_bytes_matches_message() {
        let tree = FilterTree::or(vec![
            FilterTree::leaf(Operator::IsNull, "name", true),
            FilterTree::leaf(Operator::GreaterThan, "age", 18),
        ]);
        let compiler = GrpcFilterCompiler::default();

        let bytes = compiler.compile_bytes(Some(&tree)).unwrap().unwrap();
        let message = compiler.compile(Some(&tree)).unwrap().unwrap();
        assert_eq!(Filters::decode(bytes.as_slice()).unwrap(), message);
        assert_eq!(message.operator(), GrpcOperator::Or);
    }
}

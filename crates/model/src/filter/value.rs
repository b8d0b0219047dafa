use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Right-hand side of a leaf predicate.
///
/// The variant is fixed when the value is built, so an array can only ever
/// hold one element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    Text(String),
    Uuid(Uuid),
    Boolean(bool),
    Int(i64),
    Number(f64),
    Date(DateTime<Utc>),
    GeoRange(GeoRange),
    TextArray(Vec<String>),
    UuidArray(Vec<Uuid>),
    BooleanArray(Vec<bool>),
    IntArray(Vec<i64>),
    NumberArray(Vec<f64>),
    DateArray(Vec<DateTime<Utc>>),
}

/// Circle on the globe, `distance` is in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRange {
    pub latitude: f64,
    pub longitude: f64,
    pub distance: f64,
}

impl GeoRange {
    pub fn new(latitude: f64, longitude: f64, distance: f64) -> Self {
        Self {
            latitude,
            longitude,
            distance,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite() && self.distance.is_finite()
    }
}

impl FilterValue {
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            FilterValue::TextArray(_)
                | FilterValue::UuidArray(_)
                | FilterValue::BooleanArray(_)
                | FilterValue::IntArray(_)
                | FilterValue::NumberArray(_)
                | FilterValue::DateArray(_)
        )
    }

    /// Number of elements for arrays, `None` for scalars.
    pub fn array_len(&self) -> Option<usize> {
        match self {
            FilterValue::TextArray(v) => Some(v.len()),
            FilterValue::UuidArray(v) => Some(v.len()),
            FilterValue::BooleanArray(v) => Some(v.len()),
            FilterValue::IntArray(v) => Some(v.len()),
            FilterValue::NumberArray(v) => Some(v.len()),
            FilterValue::DateArray(v) => Some(v.len()),
            FilterValue::Text(_)
            | FilterValue::Uuid(_)
            | FilterValue::Boolean(_)
            | FilterValue::Int(_)
            | FilterValue::Number(_)
            | FilterValue::Date(_)
            | FilterValue::GeoRange(_) => None,
        }
    }

    pub fn is_empty_array(&self) -> bool {
        self.array_len() == Some(0)
    }

    /// Short type name used in logs and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterValue::Text(_) => "text",
            FilterValue::Uuid(_) => "uuid",
            FilterValue::Boolean(_) => "boolean",
            FilterValue::Int(_) => "int",
            FilterValue::Number(_) => "number",
            FilterValue::Date(_) => "date",
            FilterValue::GeoRange(_) => "geo_range",
            FilterValue::TextArray(_) => "text[]",
            FilterValue::UuidArray(_) => "uuid[]",
            FilterValue::BooleanArray(_) => "boolean[]",
            FilterValue::IntArray(_) => "int[]",
            FilterValue::NumberArray(_) => "number[]",
            FilterValue::DateArray(_) => "date[]",
        }
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<Uuid> for FilterValue {
    fn from(v: Uuid) -> Self {
        FilterValue::Uuid(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Boolean(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        FilterValue::Int(i64::from(v))
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Number(v)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(v: DateTime<Utc>) -> Self {
        FilterValue::Date(v)
    }
}

impl From<GeoRange> for FilterValue {
    fn from(v: GeoRange) -> Self {
        FilterValue::GeoRange(v)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(v: Vec<&str>) -> Self {
        FilterValue::TextArray(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(v: Vec<String>) -> Self {
        FilterValue::TextArray(v)
    }
}

impl From<Vec<Uuid>> for FilterValue {
    fn from(v: Vec<Uuid>) -> Self {
        FilterValue::UuidArray(v)
    }
}

impl From<Vec<bool>> for FilterValue {
    fn from(v: Vec<bool>) -> Self {
        FilterValue::BooleanArray(v)
    }
}

impl From<Vec<i64>> for FilterValue {
    fn from(v: Vec<i64>) -> Self {
        FilterValue::IntArray(v)
    }
}

impl From<Vec<f64>> for FilterValue {
    fn from(v: Vec<f64>) -> Self {
        FilterValue::NumberArray(v)
    }
}

impl From<Vec<DateTime<Utc>>> for FilterValue {
    fn from(v: Vec<DateTime<Utc>>) -> Self {
        FilterValue::DateArray(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_conversions_pick_variant() {
        assert_eq!(FilterValue::from("Ann"), FilterValue::Text("Ann".to_string()));
        assert_eq!(FilterValue::from(true), FilterValue::Boolean(true));
        assert_eq!(FilterValue::from(30), FilterValue::Int(30));
        assert_eq!(FilterValue::from(1.5), FilterValue::Number(1.5));
        assert_eq!(
            FilterValue::from(vec!["x", "y"]),
            FilterValue::TextArray(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_array_len() {
        assert_eq!(FilterValue::from(vec![1_i64, 2, 3]).array_len(), Some(3));
        assert_eq!(FilterValue::from(3).array_len(), None);
        assert!(FilterValue::IntArray(vec![]).is_empty_array());
        assert!(!FilterValue::Text(String::new()).is_empty_array());
    }

    #[test]
    fn test_deserialize_tagged_values() {
        let date: FilterValue =
            serde_json::from_str(r#"{"date": "2023-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(
            date,
            FilterValue::Date(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
        );

        let uuid: FilterValue =
            serde_json::from_str(r#"{"uuid": "8f1c2b9e-3a4d-4c5e-9f60-7a8b9c0d1e2f"}"#).unwrap();
        assert!(matches!(uuid, FilterValue::Uuid(_)));

        let ints: FilterValue = serde_json::from_str(r#"{"int_array": [1, 2]}"#).unwrap();
        assert_eq!(ints, FilterValue::IntArray(vec![1, 2]));
    }
}

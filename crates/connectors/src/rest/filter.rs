use serde::Serialize;

/// JSON `where` document accepted by the HTTP query endpoints.
///
/// Which value key is present tells the server the value type, so absent
/// slots are skipped entirely instead of being written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RestFilter {
    Value(RestValueFilter),
    Composite(RestCompositeFilter),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestValueFilter {
    pub operator: &'static str,
    pub path: Vec<String>,
    #[serde(flatten)]
    pub value: Option<RestValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestCompositeFilter {
    pub operator: &'static str,
    pub operands: Vec<RestFilter>,
}

/// One `value*` key of a leaf document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RestValue {
    ValueText(String),
    ValueInt(i64),
    ValueBoolean(bool),
    ValueNumber(f64),
    ValueDate(String),
    ValueTextArray(Vec<String>),
    ValueIntArray(Vec<i64>),
    ValueNumberArray(Vec<f64>),
    ValueBooleanArray(Vec<bool>),
    ValueDateArray(Vec<String>),
    ValueGeoRange(RestGeoRange),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestGeoRange {
    pub geo_coordinates: RestGeoCoordinates,
    pub distance: RestDistance,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RestGeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RestDistance {
    pub max: f64,
}

impl RestFilter {
    pub fn value(operator: &'static str, path: Vec<String>, value: Option<RestValue>) -> Self {
        RestFilter::Value(RestValueFilter {
            operator,
            path,
            value,
        })
    }

    pub fn composite(operator: &'static str, operands: Vec<RestFilter>) -> Self {
        RestFilter::Composite(RestCompositeFilter { operator, operands })
    }

    /// Render as a JSON object, keys in schema order.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl RestGeoRange {
    pub fn new(latitude: f64, longitude: f64, max_distance: f64) -> Self {
        Self {
            geo_coordinates: RestGeoCoordinates {
                latitude,
                longitude,
            },
            distance: RestDistance { max: max_distance },
        }
    }
}

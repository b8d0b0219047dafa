//! Maps a leaf value onto the single typed slot it occupies on the wire.
//!
//! Both encodings share this logic. The only knob is [`DateSlot`]: the
//! binary encoding folds timestamps into text slots while the document
//! encoding keeps a dedicated date key.

use super::value::{FilterValue, GeoRange};
use chrono::{DateTime, SecondsFormat, Utc};

/// Tag of the wire slot chosen for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Text,
    Int,
    Boolean,
    Number,
    Date,
    GeoRange,
    TextArray,
    IntArray,
    NumberArray,
    BooleanArray,
    DateArray,
}

/// Where timestamps land for a given encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSlot {
    /// Timestamps become plain text (`Text` / `TextArray`).
    Text,
    /// Timestamps keep their own slot (`Date` / `DateArray`).
    Dedicated,
}

/// A value coerced into the representation of its slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Text(String),
    Int(i64),
    Boolean(bool),
    Number(f64),
    Date(String),
    GeoRange(GeoRange),
    TextArray(Vec<String>),
    IntArray(Vec<i64>),
    NumberArray(Vec<f64>),
    BooleanArray(Vec<bool>),
    DateArray(Vec<String>),
}

impl Classified {
    pub fn slot(&self) -> Slot {
        match self {
            Classified::Text(_) => Slot::Text,
            Classified::Int(_) => Slot::Int,
            Classified::Boolean(_) => Slot::Boolean,
            Classified::Number(_) => Slot::Number,
            Classified::Date(_) => Slot::Date,
            Classified::GeoRange(_) => Slot::GeoRange,
            Classified::TextArray(_) => Slot::TextArray,
            Classified::IntArray(_) => Slot::IntArray,
            Classified::NumberArray(_) => Slot::NumberArray,
            Classified::BooleanArray(_) => Slot::BooleanArray,
            Classified::DateArray(_) => Slot::DateArray,
        }
    }
}

/// Timestamps are rendered as RFC 3339 with microseconds and an explicit
/// `+00:00` offset, e.g. `2023-01-01T00:00:00.000000+00:00`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Classifies a scalar value. Returns `None` for arrays and for numbers
/// that no encoding can carry (NaN, infinities).
pub fn classify_scalar(value: &FilterValue, dates: DateSlot) -> Option<Classified> {
    match value {
        FilterValue::Text(v) => Some(Classified::Text(v.clone())),
        FilterValue::Uuid(v) => Some(Classified::Text(v.to_string())),
        FilterValue::Boolean(v) => Some(Classified::Boolean(*v)),
        FilterValue::Int(v) => Some(Classified::Int(*v)),
        FilterValue::Number(v) if v.is_finite() => Some(Classified::Number(*v)),
        FilterValue::Number(_) => None,
        FilterValue::Date(v) => Some(match dates {
            DateSlot::Text => Classified::Text(format_date(v)),
            DateSlot::Dedicated => Classified::Date(format_date(v)),
        }),
        FilterValue::GeoRange(v) if v.is_finite() => Some(Classified::GeoRange(*v)),
        FilterValue::GeoRange(_) => None,
        FilterValue::TextArray(_)
        | FilterValue::UuidArray(_)
        | FilterValue::BooleanArray(_)
        | FilterValue::IntArray(_)
        | FilterValue::NumberArray(_)
        | FilterValue::DateArray(_) => None,
    }
}

/// Classifies an array value. Returns `None` for scalars, empty arrays and
/// number arrays holding a non-finite element.
pub fn classify_array(value: &FilterValue, dates: DateSlot) -> Option<Classified> {
    if value.is_empty_array() {
        return None;
    }

    match value {
        FilterValue::TextArray(v) => Some(Classified::TextArray(v.clone())),
        FilterValue::UuidArray(v) => Some(Classified::TextArray(
            v.iter().map(ToString::to_string).collect(),
        )),
        FilterValue::BooleanArray(v) => Some(Classified::BooleanArray(v.clone())),
        FilterValue::IntArray(v) => Some(Classified::IntArray(v.clone())),
        FilterValue::NumberArray(v) if v.iter().all(|n| n.is_finite()) => {
            Some(Classified::NumberArray(v.clone()))
        }
        FilterValue::NumberArray(_) => None,
        FilterValue::DateArray(v) => {
            let dates_text = v.iter().map(format_date).collect();
            Some(match dates {
                DateSlot::Text => Classified::TextArray(dates_text),
                DateSlot::Dedicated => Classified::DateArray(dates_text),
            })
        }
        FilterValue::Text(_)
        | FilterValue::Uuid(_)
        | FilterValue::Boolean(_)
        | FilterValue::Int(_)
        | FilterValue::Number(_)
        | FilterValue::Date(_)
        | FilterValue::GeoRange(_) => None,
    }
}

/// Classifies any value; `None` means "emit no value slot".
pub fn classify(value: &FilterValue, dates: DateSlot) -> Option<Classified> {
    if value.is_array() {
        classify_array(value, dates)
    } else {
        classify_scalar(value, dates)
    }
}

//! Proximity filter labels

use std::str::FromStr;

use rust_decimal::Decimal;

use super::{Label, SkipReason};
use crate::filter::{FilterDefinition, InternalValue};
use crate::query_string::ParamValue;

/// Unit used when the filter does not configure one
pub const DEFAULT_UNITS: &str = "km";

/// Label a proximity filter as "<distance> <unit>".
///
/// The whole filter is skipped unless every sub-field of its internal value
/// (distance, origin, ...) holds something.
pub fn proximity_label(filter: &FilterDefinition, raw: &ParamValue) -> Label {
    let complete = filter
        .value
        .as_ref()
        .is_some_and(InternalValue::is_complete);
    if !complete {
        return Label::Skip(SkipReason::IncompleteCompound);
    }

    let distance = match distance_of(raw) {
        Some(distance) if !distance.is_empty() => distance,
        _ => return Label::Skip(SkipReason::IncompleteCompound),
    };

    let units = filter.proximity_units.as_deref().unwrap_or(DEFAULT_UNITS);
    Label::Text(format!("{} {}", distance, plural_units(distance, units)))
}

/// The submitted distance: the value itself, or its `distance`/`value` sub-field
fn distance_of(raw: &ParamValue) -> Option<&str> {
    match raw {
        ParamValue::Scalar(distance) => Some(distance.trim()),
        ParamValue::Array(_) => raw
            .get("distance")
            .or_else(|| raw.get("value"))
            .map(str::trim),
    }
}

/// Singular only for a distance of exactly one
fn plural_units(distance: &str, units: &str) -> String {
    match Decimal::from_str(distance) {
        Ok(amount) if amount == Decimal::ONE => units.to_string(),
        _ => format!("{}s", units),
    }
}

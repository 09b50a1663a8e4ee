//! Boolean filter labels

use super::{Label, LabelError, SkipReason};
use crate::filter::FilterDefinition;
use crate::query_string::ParamValue;
use crate::request::NO_CONSTRAINT;

/// Label a boolean filter.
///
/// Grouped filters take the title of the selected group item. Every selected value
/// overwrites the previous title, so with several selections the last one names the
/// chip. Plain filters read "Featured" for `1` and "Not featured" for anything else.
pub fn boolean_label(
    filter: &FilterDefinition,
    parameter: &str,
    raw: &ParamValue,
) -> Result<Label, LabelError> {
    if raw.as_scalar() == Some(NO_CONSTRAINT) {
        return Ok(Label::Skip(SkipReason::NoConstraint));
    }

    if filter.is_group {
        return group_label(filter, parameter, raw);
    }

    if raw.as_scalar() == Some("1") {
        Ok(Label::Text(capitalize_first(parameter)))
    } else {
        Ok(Label::Text(format!("Not {}", parameter)))
    }
}

fn group_label(
    filter: &FilterDefinition,
    parameter: &str,
    raw: &ParamValue,
) -> Result<Label, LabelError> {
    let mut selected = None;
    let mut title = None;
    for value in raw.values() {
        selected = Some(value);
        title = filter.group_items.get(value);
    }

    match (title, selected) {
        (Some(title), _) => Ok(Label::Text(title.clone())),
        (None, Some(value)) => Err(LabelError::GroupItemNotFound {
            parameter: parameter.to_string(),
            value: value.to_string(),
        }),
        (None, None) => Ok(Label::Skip(SkipReason::NoConstraint)),
    }
}

/// Uppercase the first character, leaving the rest untouched
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

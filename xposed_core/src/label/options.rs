//! Option list labels

use super::{Label, LabelError, join_resolved};
use crate::filter::FilterDefinition;
use crate::query_string::ParamValue;

/// Map every selected value through the filter's option table
pub fn option_label(
    filter: &FilterDefinition,
    parameter: &str,
    raw: &ParamValue,
) -> Result<Label, LabelError> {
    join_resolved(raw, |value| {
        filter
            .value_options
            .get(value)
            .cloned()
            .ok_or_else(|| LabelError::OptionNotFound {
                parameter: parameter.to_string(),
                value: value.to_string(),
            })
    })
}

//! Display text for active filter values
//!
//! Each [`TypeTag`] has its own resolution rules. Resolution either yields text,
//! asks the reconciler to skip the filter, or fails with a [`LabelError`] when a
//! lookup misses.

mod boolean;
mod entity_reference;
mod label_errors;
mod options;
mod proximity;
mod taxonomy;

pub use label_errors::LabelError;

use crate::filter::{FilterDefinition, TypeTag};
use crate::lookup::Lookups;
use crate::query_string::ParamValue;
use crate::request::NO_CONSTRAINT;

/// Separator for filters with more than one selected value
pub const VALUE_SEPARATOR: &str = ", ";

/// The outcome of resolving one active filter
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Text(String),
    Skip(SkipReason),
}

/// Why a recognized filter produces no chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The value means "any", e.g. a boolean set to "All"
    NoConstraint,
    /// A compound filter is missing one of its sub-fields
    IncompleteCompound,
}

/// Resolve the display text for an active filter value
pub fn resolve_label(
    filter: &FilterDefinition,
    parameter: &str,
    raw: &ParamValue,
    lookups: Lookups<'_>,
) -> Result<Label, LabelError> {
    match filter.type_tag {
        TypeTag::TaxonomyTerm => taxonomy::term_label(parameter, raw, lookups.terms),
        TypeTag::OptionList => options::option_label(filter, parameter, raw),
        TypeTag::Boolean => boolean::boolean_label(filter, parameter, raw),
        TypeTag::EntityReferenceTitle => {
            entity_reference::entity_label(parameter, raw, lookups.entities)
        }
        TypeTag::Proximity => Ok(proximity::proximity_label(filter, raw)),
        TypeTag::Generic => Ok(Label::Text(join_values(
            constrained_values(raw).map(str::to_string),
        ))),
    }
}

/// Selected values, leaving out blank and "All" entries of a multi-value input
fn constrained_values(raw: &ParamValue) -> impl Iterator<Item = &str> {
    raw.values()
        .filter(|value| !value.is_empty() && *value != NO_CONSTRAINT)
}

/// Resolve every selected value, failing on the first miss
fn join_resolved<'v>(
    raw: &'v ParamValue,
    mut resolve: impl FnMut(&'v str) -> Result<String, LabelError>,
) -> Result<Label, LabelError> {
    let labels = constrained_values(raw)
        .map(|value| resolve(value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Label::Text(labels.join(VALUE_SEPARATOR)))
}

fn join_values(values: impl Iterator<Item = String>) -> String {
    values.collect::<Vec<_>>().join(VALUE_SEPARATOR)
}

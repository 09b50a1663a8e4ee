use std::collections::HashSet;
use std::fmt;

use log::debug;

use super::types::{ContextualFilter, FilterDefinition, TypeTag};

/// Problems with a view's filter definitions that would hide or break chips
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionError {
    /// Two exposed filters read the same query parameter
    DuplicateParameter { parameter: String },
    /// An exposed filter has no query parameter name
    EmptyParameter { field_id: String },
    /// An option list filter has nothing to map its values through
    MissingValueOptions { parameter: String },
    /// A grouped filter has no group items to take titles from
    MissingGroupItems { parameter: String },
    /// A contextual filter reads a query parameter without a name
    EmptyContextualParameter { field_id: String },
}

impl DefinitionError {
    pub fn duplicate_parameter(parameter: &str) -> Self {
        DefinitionError::DuplicateParameter {
            parameter: parameter.to_string(),
        }
    }

    pub fn empty_parameter(field_id: &str) -> Self {
        DefinitionError::EmptyParameter {
            field_id: field_id.to_string(),
        }
    }

    pub fn missing_value_options(parameter: &str) -> Self {
        DefinitionError::MissingValueOptions {
            parameter: parameter.to_string(),
        }
    }

    pub fn missing_group_items(parameter: &str) -> Self {
        DefinitionError::MissingGroupItems {
            parameter: parameter.to_string(),
        }
    }
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::DuplicateParameter { parameter } => write!(
                f,
                "More than one exposed filter uses the query parameter '{}'",
                parameter
            ),
            DefinitionError::EmptyParameter { field_id } => write!(
                f,
                "Exposed filter '{}' has no query parameter name",
                field_id
            ),
            DefinitionError::MissingValueOptions { parameter } => write!(
                f,
                "Option list filter '{}' has no value options",
                parameter
            ),
            DefinitionError::MissingGroupItems { parameter } => write!(
                f,
                "Grouped filter '{}' has no group items",
                parameter
            ),
            DefinitionError::EmptyContextualParameter { field_id } => write!(
                f,
                "Contextual filter '{}' reads an unnamed query parameter",
                field_id
            ),
        }
    }
}

impl std::error::Error for DefinitionError {}

pub type ValidationResult = Result<(), Vec<DefinitionError>>;

/// Validates exposed and contextual filter definitions, collecting every problem.
pub fn validate_definitions(
    filters: &[FilterDefinition],
    contextual: &[ContextualFilter],
) -> ValidationResult {
    debug!(
        "Validating {} exposed and {} contextual filters",
        filters.len(),
        contextual.len()
    );

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for filter in filters {
        if filter.parameter_name.is_empty() {
            errors.push(DefinitionError::empty_parameter(&filter.field_id));
            continue;
        }

        if !seen.insert(filter.parameter_name.as_str()) {
            errors.push(DefinitionError::duplicate_parameter(&filter.parameter_name));
        }

        if filter.type_tag == TypeTag::OptionList && filter.value_options.is_empty() {
            errors.push(DefinitionError::missing_value_options(&filter.parameter_name));
        }

        if filter.is_group && filter.group_items.is_empty() {
            errors.push(DefinitionError::missing_group_items(&filter.parameter_name));
        }
    }

    for filter in contextual {
        if filter.query_parameter() == Some("") {
            errors.push(DefinitionError::EmptyContextualParameter {
                field_id: filter.field_id.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        debug!("Filter definitions failed validation with {} errors", errors.len());
        Err(errors)
    }
}

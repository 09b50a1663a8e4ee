//! Error types for label resolution

use std::fmt;

/// A raw filter value that could not be turned into display text
#[derive(Debug, Clone, PartialEq)]
pub enum LabelError {
    /// No taxonomy term with this id
    TermNotFound { parameter: String, id: String },
    /// No entity with this id
    EntityNotFound { parameter: String, id: String },
    /// The value is not in the filter's option table
    OptionNotFound { parameter: String, value: String },
    /// The value is not one of the filter's group items
    GroupItemNotFound { parameter: String, value: String },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::TermNotFound { parameter, id } => {
                write!(f, "Filter '{}': no taxonomy term with id '{}'", parameter, id)
            }
            LabelError::EntityNotFound { parameter, id } => {
                write!(f, "Filter '{}': no entity with id '{}'", parameter, id)
            }
            LabelError::OptionNotFound { parameter, value } => write!(
                f,
                "Filter '{}': '{}' is not one of its options",
                parameter, value
            ),
            LabelError::GroupItemNotFound { parameter, value } => write!(
                f,
                "Filter '{}': '{}' is not one of its group items",
                parameter, value
            ),
        }
    }
}

impl std::error::Error for LabelError {}

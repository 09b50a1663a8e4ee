//! Filter type definitions

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How a raw filter value is turned into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Taxonomy term id, displayed as the term name
    TaxonomyTerm,
    /// Key into the filter's own value/label table
    OptionList,
    /// On/off flag, or a labeled group of flags
    Boolean,
    /// Referenced entity id, displayed as the entity title
    EntityReferenceTitle,
    /// Distance search with sub-fields, displayed as "<distance> <unit>"
    Proximity,
    /// Raw value shown as-is
    #[default]
    Generic,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::TaxonomyTerm => "taxonomy_term",
            TypeTag::OptionList => "option_list",
            TypeTag::Boolean => "boolean",
            TypeTag::EntityReferenceTitle => "entity_reference_title",
            TypeTag::Proximity => "proximity",
            TypeTag::Generic => "generic",
        };
        write!(f, "{}", name)
    }
}

/// The value a filter currently holds inside the host list engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InternalValue {
    Single(String),
    Multiple(Vec<String>),
    /// Named sub-fields, e.g. a proximity filter's `value`, `lat` and `lng`
    Compound(BTreeMap<String, String>),
}

impl InternalValue {
    /// Whether the value places no constraint on the list
    pub fn is_empty(&self) -> bool {
        match self {
            InternalValue::Single(value) => value.is_empty(),
            InternalValue::Multiple(values) => values.is_empty(),
            InternalValue::Compound(fields) => fields.is_empty(),
        }
    }

    /// Whether every sub-field holds something
    pub fn is_complete(&self) -> bool {
        match self {
            InternalValue::Single(value) => !value.is_empty(),
            InternalValue::Multiple(values) => {
                !values.is_empty() && values.iter().all(|v| !v.is_empty())
            }
            InternalValue::Compound(fields) => {
                !fields.is_empty() && fields.values().all(|v| !v.is_empty())
            }
        }
    }
}

/// Where a contextual filter takes its argument from when the path has none
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DefaultArgument {
    /// Read from a named query parameter
    QueryParameter { parameter: String },
    /// Any other source; such filters never produce chips
    #[default]
    Other,
}

/// A filter exposed to the visitor through the view's filter form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefinition {
    /// The query string name the filter is exposed under
    pub parameter_name: String,
    /// The filter's id inside the host view
    pub field_id: String,
    #[serde(default)]
    pub type_tag: TypeTag,
    #[serde(default)]
    pub is_group: bool,
    /// Group item value to title, for grouped filters
    #[serde(default)]
    pub group_items: BTreeMap<String, String>,
    /// Option value to label, for option list filters
    #[serde(default)]
    pub value_options: BTreeMap<String, String>,
    /// The internal value the host resolved for this request
    #[serde(default)]
    pub value: Option<InternalValue>,
    /// Distance unit for proximity filters
    #[serde(default)]
    pub proximity_units: Option<String>,
}

impl FilterDefinition {
    /// Create a new filter definition without options
    pub fn new(parameter_name: &str, field_id: &str, type_tag: TypeTag) -> Self {
        Self {
            parameter_name: parameter_name.to_string(),
            field_id: field_id.to_string(),
            type_tag,
            is_group: false,
            group_items: BTreeMap::new(),
            value_options: BTreeMap::new(),
            value: None,
            proximity_units: None,
        }
    }

    /// Set the internal value
    pub fn with_value(mut self, value: InternalValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Add an option value and its label
    pub fn with_option(mut self, value: &str, label: &str) -> Self {
        self.value_options
            .insert(value.to_string(), label.to_string());
        self
    }

    /// Mark as grouped and add a group item
    pub fn with_group_item(mut self, value: &str, title: &str) -> Self {
        self.is_group = true;
        self.group_items.insert(value.to_string(), title.to_string());
        self
    }

    /// Set the proximity distance unit
    pub fn with_units(mut self, units: &str) -> Self {
        self.proximity_units = Some(units.to_string());
        self
    }

    /// Whether the host reports no internal value for this filter
    pub fn has_empty_value(&self) -> bool {
        self.value.as_ref().is_none_or(InternalValue::is_empty)
    }
}

/// A path-argument filter that may shadow a query parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextualFilter {
    pub field_id: String,
    #[serde(default)]
    pub type_tag: TypeTag,
    #[serde(default)]
    pub default_argument: DefaultArgument,
    #[serde(default)]
    pub is_group: bool,
    #[serde(default)]
    pub group_items: BTreeMap<String, String>,
    #[serde(default)]
    pub value_options: BTreeMap<String, String>,
    #[serde(default)]
    pub value: Option<InternalValue>,
    #[serde(default)]
    pub proximity_units: Option<String>,
}

impl ContextualFilter {
    /// Create a contextual filter reading from a query parameter
    pub fn from_query_parameter(parameter: &str, field_id: &str, type_tag: TypeTag) -> Self {
        Self {
            field_id: field_id.to_string(),
            type_tag,
            default_argument: DefaultArgument::QueryParameter {
                parameter: parameter.to_string(),
            },
            is_group: false,
            group_items: BTreeMap::new(),
            value_options: BTreeMap::new(),
            value: None,
            proximity_units: None,
        }
    }

    /// Set the internal value
    pub fn with_value(mut self, value: InternalValue) -> Self {
        self.value = Some(value);
        self
    }

    /// The query parameter this filter shadows, if any
    pub fn query_parameter(&self) -> Option<&str> {
        match &self.default_argument {
            DefaultArgument::QueryParameter { parameter } => Some(parameter),
            DefaultArgument::Other => None,
        }
    }

    /// View this filter as an exposed filter under its query parameter
    pub fn as_exposed(&self) -> Option<FilterDefinition> {
        let parameter = self.query_parameter()?;
        Some(FilterDefinition {
            parameter_name: parameter.to_string(),
            field_id: self.field_id.clone(),
            type_tag: self.type_tag,
            is_group: self.is_group,
            group_items: self.group_items.clone(),
            value_options: self.value_options.clone(),
            value: self.value.clone(),
            proximity_units: self.proximity_units.clone(),
        })
    }
}

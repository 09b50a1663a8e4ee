//! Render configuration

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The configuration surface as stored with the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Optional text shown before the list of chips
    pub label: String,
    /// Element wrapping the label
    pub label_element: String,
    /// Classes for the label element, e.g. "visually-hidden"
    pub label_classes: String,
    /// Query parameter names to show chips for, separated by spaces. Blank shows all.
    pub filters: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            label_element: "h3".to_string(),
            label_classes: String::new(),
            filters: String::new(),
        }
    }
}

/// Resolved render configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub label: String,
    pub label_element: String,
    pub label_classes: String,
    /// Parameters to display; empty displays every recognized filter
    pub display_filter: HashSet<String>,
}

impl RenderConfig {
    /// Whether a chip for this parameter passes the allow-list
    pub fn displays(&self, parameter: &str) -> bool {
        self.display_filter.is_empty() || self.display_filter.contains(parameter)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderOptions::default().into()
    }
}

impl From<RenderOptions> for RenderConfig {
    fn from(options: RenderOptions) -> Self {
        let display_filter = options
            .filters
            .split(' ')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            label: options.label,
            label_element: options.label_element,
            label_classes: options.label_classes,
            display_filter,
        }
    }
}

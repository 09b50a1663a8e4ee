//! Lookup of filter definitions by query parameter name

use std::collections::HashMap;

use log::debug;

use super::types::{ContextualFilter, FilterDefinition, TypeTag};
use crate::request::ActiveInput;

/// The filters a view exposes, keyed by the query parameter they read
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    by_parameter: HashMap<String, FilterDefinition>,
}

impl FilterRegistry {
    /// Register exposed filters, then contextual filters that read a query parameter.
    /// A contextual filter replaces an exposed filter registered under the same name.
    pub fn build(filters: &[FilterDefinition], contextual: &[ContextualFilter]) -> Self {
        let mut by_parameter = HashMap::new();

        for filter in filters {
            by_parameter.insert(filter.parameter_name.clone(), filter.clone());
        }

        for filter in contextual.iter().filter_map(ContextualFilter::as_exposed) {
            if by_parameter.contains_key(&filter.parameter_name) {
                debug!(
                    "Contextual filter '{}' shadows exposed parameter '{}'",
                    filter.field_id, filter.parameter_name
                );
            }
            by_parameter.insert(filter.parameter_name.clone(), filter);
        }

        Self { by_parameter }
    }

    pub fn get(&self, parameter_name: &str) -> Option<&FilterDefinition> {
        self.by_parameter.get(parameter_name)
    }

    pub fn type_tag(&self, parameter_name: &str) -> Option<TypeTag> {
        self.get(parameter_name).map(|filter| filter.type_tag)
    }

    pub fn field_id(&self, parameter_name: &str) -> Option<&str> {
        self.get(parameter_name).map(|filter| filter.field_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_parameter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_parameter.is_empty()
    }

    /// Drop active input whose backing filter holds no internal value,
    /// e.g. a select reset to "All" that still appears in the query string.
    pub fn prune_unconstrained(&self, input: &mut ActiveInput) {
        input.retain(|name, _| match self.get(name) {
            Some(filter) if filter.has_empty_value() => {
                debug!("Dropping '{}': filter holds no value", name);
                false
            }
            _ => true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::InternalValue;
    use crate::query_string::QueryParams;

    fn single(value: &str) -> InternalValue {
        InternalValue::Single(value.to_string())
    }

    #[test]
    fn test_registers_exposed_filters() {
        let registry = FilterRegistry::build(
            &[
                FilterDefinition::new("status", "field_status_value", TypeTag::OptionList),
                FilterDefinition::new("tid", "field_tags_target_id", TypeTag::TaxonomyTerm),
            ],
            &[],
        );

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.type_tag("tid"), Some(TypeTag::TaxonomyTerm));
        assert_eq!(registry.field_id("status"), Some("field_status_value"));
        assert_eq!(registry.type_tag("page"), None);
    }

    #[test]
    fn test_registers_query_parameter_contextual_filters() {
        let mut other = ContextualFilter::from_query_parameter("x", "nid", TypeTag::Generic);
        other.default_argument = crate::filter::DefaultArgument::Other;

        let registry = FilterRegistry::build(
            &[],
            &[
                ContextualFilter::from_query_parameter(
                    "author",
                    "uid",
                    TypeTag::EntityReferenceTitle,
                ),
                other,
            ],
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.type_tag("author"), Some(TypeTag::EntityReferenceTitle));
        assert_eq!(registry.field_id("author"), Some("uid"));
    }

    #[test]
    fn test_contextual_filter_replaces_exposed_filter() {
        let registry = FilterRegistry::build(
            &[FilterDefinition::new("type", "type", TypeTag::Generic)],
            &[ContextualFilter::from_query_parameter("type", "bundle", TypeTag::OptionList)],
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.field_id("type"), Some("bundle"));
        assert_eq!(registry.type_tag("type"), Some(TypeTag::OptionList));
    }

    #[test]
    fn test_prune_drops_only_recognized_empty_filters() {
        let registry = FilterRegistry::build(
            &[
                FilterDefinition::new("tid", "tid", TypeTag::TaxonomyTerm),
                FilterDefinition::new("status", "status", TypeTag::OptionList)
                    .with_value(single("open")),
            ],
            &[],
        );
        let mut input = ActiveInput::from_query(&QueryParams::parse("tid=All&status=open&page=2"));

        registry.prune_unconstrained(&mut input);

        let names: Vec<&str> = input.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["status", "page"]);
    }
}

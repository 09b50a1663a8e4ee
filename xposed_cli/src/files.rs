//! Loading view fixtures from disk.

use std::path::Path;

use serde::Deserialize;
use xposed_core::{ContextualFilter, FilterDefinition, MemoryStore, RenderOptions};

use crate::errors::CliError;
use crate::ui;

/// A view as the CLI sees it: configuration, filters and the labels lookups resolve to.
#[derive(Debug, Default, Deserialize)]
pub struct ViewFixture {
    #[serde(default)]
    pub options: RenderOptions,
    #[serde(default)]
    pub filters: Vec<FilterDefinition>,
    #[serde(default)]
    pub contextual_filters: Vec<ContextualFilter>,
    /// Term names and entity titles keyed by id
    #[serde(flatten)]
    pub store: MemoryStore,
}

/// Reads and parses a view fixture file.
pub fn load_view(path: &Path) -> Result<ViewFixture, CliError> {
    ui::debug(&format!("Loading view fixture from '{}'", path.display()));

    let source = std::fs::read_to_string(path).map_err(|e| {
        ui::error_with_details(&format!("Failed to read '{}'", path.display()), &e.to_string());
        CliError::FileError
    })?;

    serde_json::from_str(&source).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to parse view fixture '{}'", path.display()),
            &e.to_string(),
        );
        CliError::InputError
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use xposed_core::TypeTag;

    use super::*;

    fn write_fixture(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("view.json");
        fs::write(&path, content).expect("Failed to write fixture");
        (dir, path)
    }

    #[test]
    fn test_load_full_fixture() {
        let (_dir, path) = write_fixture(
            r#"{
                "options": { "label": "Filtered by", "filters": "tid" },
                "filters": [
                    { "parameter_name": "tid", "field_id": "field_tags_target_id",
                      "type_tag": "taxonomy_term", "value": "4" }
                ],
                "contextual_filters": [
                    { "field_id": "uid", "type_tag": "entity_reference_title",
                      "default_argument": { "type": "query_parameter", "parameter": "author" } }
                ],
                "terms": { "4": "News" },
                "entities": { "1": "Admin" }
            }"#,
        );

        let view = load_view(&path).unwrap();
        assert_eq!(view.options.label, "Filtered by");
        assert_eq!(view.options.label_element, "h3");
        assert_eq!(view.filters.len(), 1);
        assert_eq!(view.filters[0].type_tag, TypeTag::TaxonomyTerm);
        assert_eq!(view.contextual_filters[0].query_parameter(), Some("author"));
        assert_eq!(view.store.terms.get("4").map(String::as_str), Some("News"));
        assert_eq!(view.store.entities.len(), 1);
    }

    #[test]
    fn test_sample_rentals_fixture() {
        use xposed_core::{Reconciler, RenderConfig, RequestContext};

        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/rentals.json"));
        let view = load_view(path).unwrap();
        assert_eq!(view.filters.len(), 4);
        assert_eq!(view.contextual_filters[0].query_parameter(), Some("owner"));

        let config = RenderConfig::from(view.options);
        let reconciler = Reconciler::new(
            &view.filters,
            &view.contextual_filters,
            &config,
            view.store.lookups(),
        );
        let output = reconciler
            .render_request(&RequestContext::from_uri("/rentals?category=4&owner=17&status=open"))
            .unwrap();

        let texts: Vec<&str> = output.items.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["Bicycles", "Jane Doe", "Open"]);
        assert_eq!(output.items[0].url, "/rentals?owner=17&status=open");
        assert_eq!(output.label_classes, "visually-hidden");
    }

    #[test]
    fn test_empty_fixture_uses_defaults() {
        let (_dir, path) = write_fixture("{}");
        let view = load_view(&path).unwrap();
        assert!(view.filters.is_empty());
        assert_eq!(view.options, RenderOptions::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_view(&dir.path().join("missing.json"));
        assert_eq!(result.unwrap_err(), CliError::FileError);
    }

    #[test]
    fn test_invalid_json() {
        let (_dir, path) = write_fixture("{ not json");
        assert_eq!(load_view(&path).unwrap_err(), CliError::InputError);
    }
}

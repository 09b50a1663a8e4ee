//! Check command: validates the filter definitions of a view fixture.

use std::path::Path;

use xposed_core::validate_definitions;

use crate::errors::CliError;
use crate::files::load_view;
use crate::ui;

/// Reports every problem with the fixture's filters. Err if any were found.
pub fn check_view(view_path: &Path) -> Result<(), CliError> {
    ui::header("Checking filter definitions");
    let view = load_view(view_path)?;

    ui::info(&format!(
        "Found {} exposed and {} contextual filters",
        view.filters.len(),
        view.contextual_filters.len()
    ));

    match validate_definitions(&view.filters, &view.contextual_filters) {
        Ok(()) => {
            ui::success("No errors found");
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                ui::error(&error.to_string());
            }
            ui::error(&format!("\nFound {} error(s)", errors.len()));
            Err(CliError::ValidationError)
        }
    }
}

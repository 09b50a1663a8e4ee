//! Render command: shows the filter chips a request would produce.

use std::path::Path;

use xposed_core::{Reconciler, RenderConfig, RequestContext};

use crate::errors::CliError;
use crate::files::load_view;
use crate::ui::{self, OutputFormat};

/// Renders the chips for a request URI against a view fixture.
pub fn render_chips(
    view_path: &Path,
    uri: &str,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Rendering filter chips");

    if !uri.starts_with('/') {
        ui::error(&format!("Request URI '{}' must start with '/'", uri));
        return Err(CliError::InputError);
    }

    let view = load_view(view_path)?;
    let config = RenderConfig::from(view.options);
    let reconciler = Reconciler::new(
        &view.filters,
        &view.contextual_filters,
        &config,
        view.store.lookups(),
    );

    let request = RequestContext::from_uri(uri);
    ui::debug(&format!(
        "Request path '{}' with {} query parameters",
        request.path,
        request.query.len()
    ));

    match reconciler.render_request(&request) {
        Some(output) => {
            ui::success(&format!("Built {} filter chips", output.items.len()));
            match output_format {
                OutputFormat::Pretty => ui::pretty_output_render(&output),
                OutputFormat::Json => ui::json_output(&output),
            }
        }
        None => {
            ui::warning("No active filters to display");
            if output_format == OutputFormat::Json {
                ui::json_output(&serde_json::Value::Null);
            }
        }
    }

    Ok(())
}

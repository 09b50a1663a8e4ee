//! Reconcile active filter input into filter chips
//!
//! One pass per page render:
//! - Build the registry of exposed and query-reading contextual filters
//! - Drop input whose filter holds no internal value
//! - Walk the input in submission order, labeling each recognized filter
//! - Collapse the single active filter case to the bare path

use log::{debug, warn};
use serde::Serialize;

use crate::config::RenderConfig;
use crate::filter::{ContextualFilter, FilterDefinition, FilterRegistry};
use crate::label::{Label, resolve_label};
use crate::link::build_cancel_url;
use crate::lookup::{Lookups, MemoizedLookups};
use crate::request::{ActiveInput, RequestContext, is_unconstrained};

/// One removable filter chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub text: String,
    pub url: String,
}

/// The chips of one pass plus its counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    pub items: Vec<DisplayItem>,
    /// Recognized filters with a value, whether displayed or not
    pub exposed_count: usize,
    /// Chips built
    pub build_count: usize,
}

/// What the templating layer receives
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    pub label: String,
    pub label_element: String,
    pub label_classes: String,
    pub items: Vec<DisplayItem>,
}

/// Turns the active input of a request into filter chips
pub struct Reconciler<'a> {
    registry: FilterRegistry,
    config: &'a RenderConfig,
    lookups: Lookups<'a>,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler for a view's exposed and contextual filters
    pub fn new(
        filters: &[FilterDefinition],
        contextual: &[ContextualFilter],
        config: &'a RenderConfig,
        lookups: Lookups<'a>,
    ) -> Self {
        Self {
            registry: FilterRegistry::build(filters, contextual),
            config,
            lookups,
        }
    }

    pub fn registry(&self) -> &FilterRegistry {
        &self.registry
    }

    /// Compute the chips for the given request and active input
    pub fn reconcile(&self, request: &RequestContext, input: &ActiveInput) -> Reconciliation {
        let mut input = input.clone();
        self.registry.prune_unconstrained(&mut input);

        // Lookups are remembered for this pass only
        let memo = MemoizedLookups::new(self.lookups);
        let lookups = memo.lookups();

        let mut result = Reconciliation::default();
        for (name, raw) in input.iter() {
            if raw.is_empty() {
                debug!("Ignoring '{}': no value", name);
                continue;
            }

            let Some(filter) = self.registry.get(name) else {
                debug!("Ignoring '{}': not an exposed filter", name);
                continue;
            };

            // Counted before display and type rules, so hidden or skipped filters
            // still keep a lone displayed chip from collapsing to the bare path
            result.exposed_count += 1;

            if !self.config.displays(name) {
                debug!("Not displaying '{}': not in the display list", name);
                continue;
            }

            if is_unconstrained(raw) {
                debug!("Skipping '{}': no constraint", name);
                continue;
            }

            let text = match resolve_label(filter, name, raw, lookups) {
                Ok(Label::Text(text)) => text,
                Ok(Label::Skip(reason)) => {
                    debug!("Skipping '{}': {:?}", name, reason);
                    continue;
                }
                Err(error) => {
                    warn!("Omitting filter chip: {}", error);
                    continue;
                }
            };

            let url = build_cancel_url(&request.path, &request.query, name);
            result.items.push(DisplayItem { text, url });
            result.build_count += 1;
        }

        // A lone active filter always links back to the bare path
        if result.exposed_count == 1 && result.items.len() == 1 {
            result.items[0].url = request.path.clone();
        }

        debug!(
            "Built {} filter chips from {} active filters",
            result.build_count, result.exposed_count
        );

        result
    }

    /// Reconcile and package the chips for templating. `None` means render nothing.
    pub fn render(&self, request: &RequestContext, input: &ActiveInput) -> Option<RenderOutput> {
        let result = self.reconcile(request, input);
        if result.build_count == 0 {
            return None;
        }

        Some(RenderOutput {
            label: self.config.label.clone(),
            label_element: self.config.label_element.clone(),
            label_classes: self.config.label_classes.clone(),
            items: result.items,
        })
    }

    /// Render using the request query as the active input
    pub fn render_request(&self, request: &RequestContext) -> Option<RenderOutput> {
        self.render(request, &ActiveInput::from_query(&request.query))
    }
}

//! Removable chips for the active exposed filters of a list view.
//!
//! Given the request query, the filters a view exposes and a display allow-list,
//! [`Reconciler`] computes the ordered chips, each with its display text and a
//! link to the current page without that one filter.

pub mod config;
pub mod filter;
pub mod label;
pub mod link;
pub mod lookup;
pub mod query_string;
pub mod reconcile;
pub mod request;

pub use config::{RenderConfig, RenderOptions};
pub use filter::{
    ContextualFilter, DefaultArgument, DefinitionError, FilterDefinition, FilterRegistry,
    InternalValue, TypeTag, validate_definitions,
};
pub use label::{Label, LabelError, SkipReason};
pub use link::build_cancel_url;
pub use lookup::{EntityLookup, Lookups, MemoryStore, TermLookup};
pub use query_string::{ParamValue, QueryParams};
pub use reconcile::{DisplayItem, Reconciler, Reconciliation, RenderOutput};
pub use request::{ActiveInput, RequestContext};

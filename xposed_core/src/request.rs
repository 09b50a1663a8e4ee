//! The request a render pass runs for

use crate::query_string::{ParamValue, QueryParams};

/// Sentinel a select widget submits when no option is chosen
pub const NO_CONSTRAINT: &str = "All";

/// The current request path and its parsed query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    pub path: String,
    pub query: QueryParams,
}

impl RequestContext {
    pub fn new(path: &str, query: QueryParams) -> Self {
        Self {
            path: path.to_string(),
            query,
        }
    }

    /// Split a request URI at the first `?` into path and query
    pub fn from_uri(uri: &str) -> Self {
        match uri.split_once('?') {
            Some((path, query)) => Self::new(path, QueryParams::parse(query)),
            None => Self::new(uri, QueryParams::new()),
        }
    }
}

/// The filter input submitted with the current request, in submission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveInput {
    params: QueryParams,
}

impl ActiveInput {
    /// The default input provider: everything in the request query
    pub fn from_query(query: &QueryParams) -> Self {
        Self {
            params: query.clone(),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter()
    }

    pub fn retain(&mut self, keep: impl FnMut(&str, &ParamValue) -> bool) {
        self.params.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Whether a raw value places no constraint: empty, or the "All" sentinel.
/// Arrays count as unconstrained only when every entry is.
pub fn is_unconstrained(value: &ParamValue) -> bool {
    match value {
        ParamValue::Scalar(value) => value.is_empty() || value == NO_CONSTRAINT,
        ParamValue::Array(pairs) => pairs
            .iter()
            .all(|(_, value)| value.is_empty() || value == NO_CONSTRAINT),
    }
}

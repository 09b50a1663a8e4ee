//! Cancel links for filter chips

use crate::query_string::QueryParams;

/// Build the URL that reproduces the current page without one parameter.
///
/// With more than one parameter in the current query, the named parameter (all of
/// its values) is removed and the rest is re-encoded in its original order. With
/// zero or one parameter the link is the bare path.
pub fn build_cancel_url(path: &str, query: &QueryParams, parameter: &str) -> String {
    if query.len() <= 1 {
        return path.to_string();
    }

    let mut remaining = query.clone();
    remaining.remove(parameter);

    format!("{}?{}", path, remaining.to_query_string())
}

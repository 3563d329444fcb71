//! Joining rendered fragments into the final request string.

use indexmap::IndexMap;

/// Builds `endpoint?fragment&fragment...`.
///
/// Fragments are ordered by ascending length; the sort is stable, so equal
/// lengths keep their incoming order. The ordering exists only to make output
/// reproducible.
#[must_use]
pub fn build(endpoint: &str, fragments: &[String]) -> String {
    let mut ordered = fragments.iter().map(String::as_str).collect::<Vec<_>>();
    ordered.sort_by_key(|fragment| fragment.len());
    format!("{endpoint}?{}", ordered.join("&"))
}

/// Splits fragments into `key -> value` pairs in request order.
///
/// Used by consumers that send the parameters as a POST body.
#[must_use]
pub fn parameter_pairs(fragments: &[String]) -> IndexMap<String, String> {
    let mut ordered = fragments.iter().map(String::as_str).collect::<Vec<_>>();
    ordered.sort_by_key(|fragment| fragment.len());
    ordered
        .into_iter()
        .map(|fragment| match fragment.split_once('=') {
            Some((key, value)) => (key.to_owned(), value.to_owned()),
            None => (fragment.to_owned(), String::new()),
        })
        .collect()
}

/// Re-orders the query fragments of `url` alphabetically.
///
/// Two requests with the same parameters in a different order normalize to
/// the same string. Comparison helper only; requests are always built with
/// [`build`].
#[must_use]
pub fn normalize(url: &str) -> String {
    let Some((endpoint, query)) = url.split_once('?') else {
        return url.to_owned();
    };
    let mut fragments = query
        .split('&')
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>();
    fragments.sort_unstable();
    format!("{endpoint}?{}", fragments.join("&"))
}

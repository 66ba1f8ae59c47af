//! Query-string parameter extraction for page deep-links.

use url::form_urlencoded;

/// First value for `name` in `query`, form-decoded (`+` becomes space).
/// An absent name returns the empty string; absence is not an error.
/// Anything after a `#` never reaches the value.
pub fn query_param(query: &str, name: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let query = match query.split_once('#') {
        Some((before, _fragment)) => before,
        None => query,
    };
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

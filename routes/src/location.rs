//! Helpers for turning raw browser locations into table paths

/// drop any `?query` or `#fragment` suffix; an empty path means the landing route
pub fn strip_query(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    match &raw[..end] {
        "" => "/",
        path => path,
    }
}

/// extract the routed path from a hash-mode location (`#/lets-post?x=1` -> `/lets-post`)
///
/// the leading `#` is optional so both `location.hash` and a bare fragment work.
/// a fragment without a leading slash gets one, matching how hash-mode routers
/// treat `#lets-post`.
pub fn path_from_hash(hash: &str) -> String {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    let end = fragment.find('?').unwrap_or(fragment.len());
    let path = &fragment[..end];

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

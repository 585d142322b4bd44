//! Path normalization performed before resolution.
//!
//! The resolver expects a clean absolute path. Browsers hand over whatever is
//! in the address bar, so the renderer strips the query and fragment, decodes
//! percent escapes, collapses repeated slashes and removes the site base URL.

use percent_encoding::percent_decode_str;

/// Normalize a raw location into the path the resolver sees.
///
/// `base_url` is the path the site is served under (`/` or `/portfolio/`);
/// it is stripped when the path lies beneath it. The result always starts
/// with `/`. Escapes that decode to invalid UTF-8 are left encoded.
#[must_use]
pub fn normalize_path(raw: &str, base_url: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let raw = &raw[..end];

    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned);

    let mut path = String::with_capacity(decoded.len() + 1);
    for segment in decoded.split('/').filter(|s| !s.is_empty()) {
        path.push('/');
        path.push_str(segment);
    }
    if decoded.ends_with('/') && !path.is_empty() {
        path.push('/');
    }
    if path.is_empty() {
        path.push('/');
    }

    strip_base_url(path, base_url)
}

/// Remove `base_url` from the front of `path`, keeping a leading slash.
fn strip_base_url(path: String, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }

    match path.strip_prefix(base) {
        Some("") => "/".to_owned(),
        Some(rest) if rest.starts_with('/') => rest.to_owned(),
        _ => path,
    }
}

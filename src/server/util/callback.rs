//! Validation of post-sign-in redirect targets.

use url::Url;

/// Base used to resolve relative callback paths. Only the path survives resolution.
const RESOLVE_BASE: &str = "http://localhost";

/// Returns the normalized callback path if `callback` is a same-origin relative path.
///
/// Accepts `/path?query#fragment`. Rejects absolute URLs, scheme-relative `//host`
/// targets, backslash tricks, and anything that resolves to another origin.
pub fn safe_callback(callback: &str) -> Option<String> {
    let callback = callback.trim();
    if !callback.starts_with('/') || callback.starts_with("//") || callback.contains('\\') {
        return None;
    }

    let base = Url::parse(RESOLVE_BASE).ok()?;
    let resolved = base.join(callback).ok()?;
    if resolved.origin() != base.origin() {
        return None;
    }

    let mut target = resolved.path().to_string();
    if let Some(query) = resolved.query() {
        target.push('?');
        target.push_str(query);
    }

    Some(target)
}

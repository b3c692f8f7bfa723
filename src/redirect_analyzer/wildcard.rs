/// Path segment that marks a hierarchical family of redirects.
pub const DEFAULT_MARKER_SEGMENT: &str = "category";

/// Proposes a consolidated wildcard rule for a canonical key that
/// belongs to a hierarchical path family.
///
/// Returns `None` for keys that do not contain the marker segment.
/// Everything after the first marker occurrence is replaced by a single
/// capturing wildcard; the destination is a placeholder family root the
/// operator is expected to edit before deploying the rule.
pub fn suggest_wildcard(key: &str, marker: &str) -> Option<String> {
    let segment = format!("/{}/", marker);
    let idx = key.find(&segment)?;
    let family = &key[..idx + segment.len()];

    Some(format!(
        "RedirectMatch 301 ^{}(.*)$ https://example.com{}",
        family, segment
    ))
}

use once_cell::sync::Lazy;
use regex::Regex;

// Matches a run of two or more path separators. Only the first run in
// the string gets collapsed (Regex::replace, not replace_all); rule
// sets produced so far depend on that narrow behavior.
static DOUBLED_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"//+").unwrap());

// A final dot followed by word characters, e.g. ".pdf" or ".html".
static FILE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\w+$").unwrap());

/// Canonicalizes a raw URL string into a comparable key.
///
/// Applied in order: the query string and fragment are discarded, the
/// first doubled separator is collapsed, directory-like paths gain a
/// trailing separator, and any run of trailing separators is reduced to
/// exactly one. No case-folding, percent-decoding, or host
/// normalization happens here; inputs are expected to share scheme and
/// host conventions or be path-only.
///
/// Total over all string inputs and idempotent for canonical output.
pub fn normalize_url(raw: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or(raw);

    let mut cleaned = DOUBLED_SEPARATOR.replace(path, "/").into_owned();

    if !cleaned.ends_with('/') && !FILE_SUFFIX.is_match(&cleaned) {
        cleaned.push('/');
    }

    if cleaned.ends_with("//") {
        let bare_len = cleaned.trim_end_matches('/').len();
        cleaned.truncate(bare_len + 1);
    }

    cleaned
}

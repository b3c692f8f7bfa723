use once_cell::sync::Lazy;
use regex::Regex;

// Extensions that mark a path as a file target. Files get an exact
// match; everything else tolerates an optional trailing separator.
static FILE_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(jpeg|jpg|png|gif|pdf|docx?|xlsx?|pptx?|txt)$").unwrap()
});

// The exact metacharacter set escaped in emitted rules. This is
// narrower than regex::escape, which would also escape characters like
// '-' and '#' and change the emitted bytes.
const REGEX_METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Generates a `RedirectMatch` rule for a normalized old URL.
///
/// The source path is matched literally (metacharacters escaped) and
/// anchored on both ends. File-like paths get an exact match; all
/// others allow an optional trailing separator. The destination is
/// copied verbatim, never normalized or escaped.
pub fn generate_redirect_match(old_url: &str, new_url: &str) -> String {
    let bare_path = old_url.trim_end_matches('/');
    let escaped = escape_literal(bare_path);

    if FILE_EXTENSION.is_match(bare_path) {
        format!("RedirectMatch 301 ^{}$ {}", escaped, new_url)
    } else {
        format!("RedirectMatch 301 ^{}/?$ {}", escaped, new_url)
    }
}

/// Backslash-escapes every regex metacharacter so the path matches
/// literally inside the emitted rule.
fn escape_literal(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for ch in path.chars() {
        if REGEX_METACHARACTERS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

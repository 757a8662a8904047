//! Display name → slug normalization.

use unicode_normalization::UnicodeNormalization;

/// Normalize a token display name into a CSS/URL-safe slug.
///
/// ASCII letters and digits are kept (lowercased). Runs of whitespace and
/// ASCII punctuation collapse into a single `-`, never leading or trailing.
/// Names are NFKD-decomposed first, so accented letters fold to their base
/// letter (`Café` → `cafe`) and full-width forms to ASCII. Quotes and whatever
/// is still outside ASCII afterwards are dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.nfkd() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '\'' || c == '"' {
            continue;
        } else if c.is_whitespace() || c.is_ascii_punctuation() {
            pending_hyphen = true;
        }
    }

    slug
}

//! URL slugs derived from titles.

/// Lowercase, keep only `[a-z0-9 -]`, turn whitespace runs into `-`,
/// collapse repeated `-` and trim them from both ends.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars().flat_map(|c| c.to_lowercase()) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_dash = true;
        }
    }

    out
}

/// True when `slug` is already in normalized form.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}

use std::collections::HashSet;

use slug::slugify;

/// Fallback when a title contains no usable characters.
const PLACEHOLDER: &str = "untitled";

/// Normalize a display title into a URL-safe slug: lowercase ASCII,
/// digits, and single hyphens with no leading/trailing hyphen.
pub fn normalize(title: &str) -> String {
    let s = slugify(title);
    if s.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        s
    }
}

/// Resolve `base` against a set of already-taken slugs. Returns `base`
/// unchanged when free, otherwise the first of `base-2`, `base-3`, …
/// absent from the set. Terminates within `existing.len() + 1` probes.
pub fn make_unique(base: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(base) {
        return base.to_string();
    }

    let mut n: u64 = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !existing.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

pub fn validate(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 200 {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

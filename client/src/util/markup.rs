//! Rich-text cleanup for publisher HTML.
//!
//! The about body is injected as markup, not escaped text, so it is parsed
//! and rebuilt from an allow-list of elements, attributes, and URL schemes.
//! Anything outside the list is dropped; `<script>` and `<style>` lose their
//! contents as well.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::collections::HashSet;

/// URL schemes links and images may use. Relative paths are kept as-is.
const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Strip executable content from publisher HTML.
#[must_use]
pub fn sanitize_rich_text(html: &str) -> String {
    ammonia::Builder::default()
        .url_schemes(HashSet::from(ALLOWED_SCHEMES))
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

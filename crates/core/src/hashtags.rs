//! Hashtag extraction from post text.

use std::sync::OnceLock;

use regex::Regex;

static HASHTAG_RE: OnceLock<Regex> = OnceLock::new();

/// Extract hashtag tokens from free-form post text.
///
/// Tags are the `#`-prefixed runs of word characters, returned lowercase
/// and in order of first appearance. Repeated tags are collapsed to one
/// entry; the leading `#` is stripped.
///
/// # Examples
///
/// ```
/// use murmur_core::hashtags::extract_hashtags;
///
/// assert_eq!(extract_hashtags("shipping #Rust and #rust_lang, #Rust again"),
///            vec!["rust", "rust_lang"]);
/// ```
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let re = HASHTAG_RE.get_or_init(|| Regex::new(r"#([A-Za-z0-9_]+)").expect("valid literal regex"));

    let mut tags: Vec<String> = Vec::new();
    for captures in re.captures_iter(text) {
        let tag = captures[1].to_lowercase();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

//! Username candidate generation.
//!
//! Produces a registry-friendly handle from a free-form display name:
//! lowercased, non-alphanumerics collapsed to single underscores, with a
//! random numeric suffix to dodge collisions. Uniqueness is still the
//! caller's responsibility (retry on conflict).

use rand::Rng;

/// Generate a username candidate from a display name.
///
/// Falls back to the `user` base when the display name contains no
/// usable characters.
///
/// # Examples
///
/// A display name of `"Ada Lovelace"` yields something like
/// `ada_lovelace4821`.
pub fn username_candidate(display_name: &str) -> String {
    let base = slugify(display_name);
    let base = if base.is_empty() { "user" } else { &base };
    let suffix: u32 = rand::rng().random_range(1000..10000);
    format!("{base}{suffix}")
}

/// Lowercase `name` and collapse every run of non-alphanumeric characters
/// into a single underscore, trimming separators at both ends.
fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_joins_words() {
        assert_eq!(slugify("Ada Lovelace"), "ada_lovelace");
    }

    #[test]
    fn slugify_collapses_runs_of_separators() {
        assert_eq!(slugify("Jean-Luc  Picard!"), "jean_luc_picard");
    }

    #[test]
    fn slugify_trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  @moss@  "), "moss");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        assert_eq!(slugify("héllo"), "h_llo");
    }

    #[test]
    fn candidate_keeps_slug_prefix_and_numeric_suffix() {
        let candidate = username_candidate("Ada Lovelace");
        assert!(candidate.starts_with("ada_lovelace"));
        let suffix = &candidate["ada_lovelace".len()..];
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_display_name_falls_back_to_user() {
        let candidate = username_candidate("!!!");
        assert!(candidate.starts_with("user"));
    }
}

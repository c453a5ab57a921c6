/// Maximum length of a slug in characters
pub const MAX_SLUG_LEN: usize = 50;

/// Slug used when a title has nothing usable in it
const FALLBACK_SLUG: &str = "post";

/// Derive a filesystem-safe slug from a post title.
///
/// The result is lowercase ASCII, only contains `[a-z0-9-]`, never starts or
/// ends with a hyphen and is at most [`MAX_SLUG_LEN`] characters long.
pub fn slugify(title: &str) -> String {
    let ascii = unidecode::unidecode(title).to_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;
    for c in ascii.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    // Only ASCII is left, byte truncation is safe
    slug.truncate(MAX_SLUG_LEN);
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(slug: &str) {
        assert!(!slug.is_empty());
        assert!(slug.len() <= MAX_SLUG_LEN, "too long: {}", slug);
        assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{}", slug);
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "{}",
            slug
        );
        assert!(!slug.contains("--"), "{}", slug);
    }

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Getting Started with Go"), "getting-started-with-go");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("  Hello,   World!!  "), "hello-world");
        assert_eq!(slugify("C++ & Rust: a (fair) fight?"), "c-rust-a-fair-fight");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Ábaco über Straße"), "abaco-uber-strasse");
    }

    #[test]
    fn test_slugify_truncates_without_trailing_hyphen() {
        // 49 characters, then a separator right at the cut
        let title = format!("{} {}", "a".repeat(49), "tail");
        let slug = slugify(&title);
        assert_eq!(slug, "a".repeat(49));
        assert_well_formed(&slug);
    }

    #[test]
    fn test_slugify_long_title() {
        let slug = slugify(&"word ".repeat(40));
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert_well_formed(&slug);
    }

    #[test]
    fn test_slugify_nothing_usable() {
        assert_eq!(slugify("!!!"), "post");
        assert_eq!(slugify(""), "post");
    }

    #[test]
    fn test_slugify_properties() {
        let titles = [
            "Rust 2024: What's new?",
            "---leading and trailing---",
            "日本語のタイトル",
            "emoji 🚀 launch",
            "MiXeD CaSe 123",
            "tabs\tand\nnewlines",
            "x",
        ];
        for title in titles {
            assert_well_formed(&slugify(title));
        }
    }
}

//! Text normalization shared by rule matching and similarity scoring

/// Number of characters retained in a finding's excerpt
const EXCERPT_CHARS: usize = 300;

/// Lowercase and strip ASCII punctuation so case and punctuation
/// differences never cause false negatives during keyword or phrase
/// matching. Pure and total.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whitespace tokens of already-normalized text
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Bounded excerpt of a section body: first 300 characters,
/// "..."-suffixed when truncated
pub fn excerpt(body: &str) -> String {
    if body.chars().count() > EXCERPT_CHARS {
        let head: String = body.chars().take(EXCERPT_CHARS).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Dr. Smith's award-winning work!"),
            "dr smiths awardwinning work"
        );
    }

    #[test]
    fn test_normalize_keeps_whitespace_and_digits() {
        assert_eq!(normalize("Top 5\nresearchers"), "top 5\nresearchers");
    }

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        let tokens: Vec<&str> = tokenize("won a  national\naward").collect();
        assert_eq!(tokens, vec!["won", "a", "national", "award"]);
    }

    #[test]
    fn test_excerpt_passes_short_bodies_through() {
        assert_eq!(excerpt("short body"), "short body");
    }

    #[test]
    fn test_excerpt_truncates_at_300_chars() {
        let body = "x".repeat(450);
        let result = excerpt(&body);
        assert_eq!(result.chars().count(), 303);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_excerpt_exactly_300_is_not_truncated() {
        let body = "y".repeat(300);
        assert_eq!(excerpt(&body), body);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(input in ".*") {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Property: normalized text contains no ASCII punctuation or uppercase
        #[test]
        fn normalize_output_is_clean(input in ".*") {
            let cleaned = normalize(&input);
            prop_assert!(!cleaned.chars().any(|c| c.is_ascii_punctuation()));
            prop_assert!(!cleaned.chars().any(|c| c.is_ascii_uppercase()));
        }

        /// Property: excerpts never exceed 303 characters (300 + ellipsis)
        #[test]
        fn excerpt_is_bounded(input in ".*") {
            prop_assert!(excerpt(&input).chars().count() <= 303);
        }
    }
}

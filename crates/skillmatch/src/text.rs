//! Text normalization shared by the skill extractor, the ATS scorer, and
//! HTML document extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static NON_SKILL_CHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s#+./-]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lowercases, replaces tag-like runs (`<...>`) with spaces, strips every
/// character outside word chars / whitespace / `{#, +, ., /, -}`, collapses
/// whitespace, and trims. The symbol whitelist survives because those
/// characters occur inside real skill tokens (`c++`, `c#`, `node.js`,
/// `ci/cd`). Pure and idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let untagged = TAG_RE.replace_all(&lowered, " ");
    let cleaned = NON_SKILL_CHAR_RE.replace_all(&untagged, " ");
    WHITESPACE_RE.replace_all(&cleaned, " ").trim().to_string()
}

/// Replaces tag-like runs with spaces and collapses whitespace without
/// lowercasing. Used for HTML document extraction, where casing must
/// survive for downstream display.
pub fn strip_tags(text: &str) -> String {
    let untagged = TAG_RE.replace_all(text, " ");
    WHITESPACE_RE.replace_all(&untagged, " ").trim().to_string()
}

/// Splits normalized text into word tokens. Whitelisted symbols are
/// token-internal, so `c++` and `node.js` come back whole.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Whitespace-delimited token count of normalized text.
pub fn word_count(normalized: &str) -> usize {
    normalized.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Hello, World! Backend & Frontend?"),
            "hello world backend frontend"
        );
    }

    #[test]
    fn test_normalize_keeps_skill_symbols() {
        assert_eq!(
            normalize("C++, C#, Node.js, CI/CD, e-commerce"),
            "c++ c# node.js ci/cd e-commerce"
        );
    }

    #[test]
    fn test_normalize_replaces_tags_with_spaces() {
        assert_eq!(
            normalize("<p>Skills:</p><ul><li>React</li><li>SQL</li></ul>"),
            "skills react sql"
        );
    }

    #[test]
    fn test_normalize_collapses_whitespace_and_trims() {
        assert_eq!(normalize("  python \t\n  sql  "), "python sql");
    }

    #[test]
    fn test_normalize_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "Senior <b>Rust</b> Engineer: C++/C# (5+ yrs)!",
            "  Node.js & React  ",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_strip_tags_keeps_case() {
        assert_eq!(
            strip_tags("<html><body>Jane Doe, Senior Engineer</body></html>"),
            "Jane Doe, Senior Engineer"
        );
    }

    #[test]
    fn test_tokenize_keeps_compound_tokens_whole() {
        let normalized = normalize("Node.js and C++ with CI/CD");
        let tokens: Vec<&str> = tokenize(&normalized).collect();
        assert_eq!(tokens, vec!["node.js", "and", "c++", "with", "ci/cd"]);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("python sql docker"), 3);
    }
}

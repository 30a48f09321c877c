use serde::{Deserialize, Serialize};

/// User-chosen filters narrowing recommendations.
///
/// Both sets are optional signals: an empty `genres` means "no genre
/// filter", an empty `authors` means "no author filter". Neither ever means
/// "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Exact genre labels a book must be drawn from.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Author-name fragments, matched as case-insensitive substrings.
    #[serde(default)]
    pub authors: Vec<String>,
}

impl Preferences {
    pub fn new(genres: Vec<String>, authors: Vec<String>) -> Self {
        Self { genres, authors }
    }

    /// Build preferences from selected genres and a free-text author field.
    pub fn from_free_text(genres: Vec<String>, author_text: &str) -> Self {
        Self {
            genres,
            authors: parse_author_prefs(author_text),
        }
    }

    /// True when neither filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.genres.is_empty() && self.authors.is_empty()
    }
}

/// Split a comma-separated author preference into substring tokens.
///
/// Tokens are trimmed and empty tokens are dropped, so blank input or a
/// trailing comma leaves the author filter off instead of producing an
/// empty substring that would match every author.
pub fn parse_author_prefs(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_author_prefs_basic() {
        assert_eq!(
            parse_author_prefs("Tolkien,Harper Lee"),
            vec!["Tolkien".to_string(), "Harper Lee".to_string()]
        );
    }

    #[test]
    fn test_parse_author_prefs_trims_whitespace() {
        assert_eq!(
            parse_author_prefs("  Tolkien ,  Lee "),
            vec!["Tolkien".to_string(), "Lee".to_string()]
        );
    }

    #[test]
    fn test_parse_author_prefs_drops_empty_tokens() {
        // A trailing comma must not disable the author filter.
        assert_eq!(parse_author_prefs("Tolkien,"), vec!["Tolkien".to_string()]);
        assert_eq!(parse_author_prefs(",,"), Vec::<String>::new());
        assert_eq!(parse_author_prefs(""), Vec::<String>::new());
        assert_eq!(parse_author_prefs("   "), Vec::<String>::new());
    }

    #[test]
    fn test_from_free_text() {
        let prefs = Preferences::from_free_text(vec!["Fantasy".to_string()], "tolkien,");
        assert_eq!(prefs.genres, vec!["Fantasy".to_string()]);
        assert_eq!(prefs.authors, vec!["tolkien".to_string()]);
        assert!(!prefs.is_unfiltered());
    }

    #[test]
    fn test_default_is_unfiltered() {
        assert!(Preferences::default().is_unfiltered());
    }
}

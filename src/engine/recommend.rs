use crate::catalog::{Audience, BookRecord, Catalog};
use crate::engine::Preferences;
use tracing::debug;

/// Produce the subsequence of the catalog relevant to one reader.
///
/// The role is a hard filter: a book whose audience differs from `role` is
/// excluded no matter how well its genre or author match. The genre filter,
/// when non-empty, requires exact membership of the book's genre label. The
/// author filter, when non-empty, passes a book if any entry occurs in its
/// author name as a case-insensitive substring.
///
/// The result preserves catalog order. Calling this twice with the same
/// arguments yields the same result; the catalog is never mutated.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    role: Audience,
    prefs: &Preferences,
) -> Vec<&'a BookRecord> {
    let author_needles: Vec<String> = prefs
        .authors
        .iter()
        .map(|needle| needle.to_lowercase())
        .collect();

    let matches: Vec<&BookRecord> = catalog
        .books()
        .iter()
        .filter(|book| book.audience == role)
        .filter(|book| prefs.genres.is_empty() || prefs.genres.iter().any(|g| *g == book.genre))
        .filter(|book| {
            if author_needles.is_empty() {
                return true;
            }
            let author = book.author.to_lowercase();
            author_needles.iter().any(|needle| author.contains(needle.as_str()))
        })
        .collect();

    debug!(role = %role, matches = matches.len(), "catalog filtered");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(books: &[&BookRecord]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn test_role_is_a_hard_filter() {
        let catalog = Catalog::builtin();
        let prefs = Preferences::default();
        for book in recommend(&catalog, Audience::Student, &prefs) {
            assert_eq!(book.audience, Audience::Student);
        }
    }

    #[test]
    fn test_empty_preferences_yield_role_filter_only() {
        let catalog = Catalog::builtin();
        let result = recommend(&catalog, Audience::Student, &Preferences::default());
        let expected: Vec<&BookRecord> = catalog
            .books()
            .iter()
            .filter(|b| b.audience == Audience::Student)
            .collect();
        assert_eq!(titles(&result), titles(&expected));
    }

    #[test]
    fn test_genre_filter_narrows_role_filter() {
        let catalog = Catalog::builtin();
        let all = recommend(&catalog, Audience::Professional, &Preferences::default());
        let narrowed = recommend(
            &catalog,
            Audience::Professional,
            &Preferences::new(vec!["Business".to_string()], vec![]),
        );
        assert!(!narrowed.is_empty());
        for book in &narrowed {
            assert!(all.contains(book));
            assert_eq!(book.genre, "Business");
        }
    }

    #[test]
    fn test_author_match_is_case_insensitive_substring() {
        let catalog = Catalog::builtin();
        let result = recommend(
            &catalog,
            Audience::CasualReader,
            &Preferences::new(vec![], vec!["lee".to_string()]),
        );
        // "lee" occurs in "Harper Lee" and in no other casual-reader author.
        assert_eq!(titles(&result), vec!["To Kill a Mockingbird".to_string()]);
    }

    #[test]
    fn test_author_filter_matches_any_entry() {
        let catalog = Catalog::builtin();
        let result = recommend(
            &catalog,
            Audience::CasualReader,
            &Preferences::new(vec![], vec!["tolkien".to_string(), "orwell".to_string()]),
        );
        assert_eq!(
            titles(&result),
            vec![
                "1984".to_string(),
                "The Fellowship of the Ring".to_string(),
                "The Hobbit".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_genre_yields_empty_not_error() {
        let catalog = Catalog::builtin();
        let result = recommend(
            &catalog,
            Audience::Student,
            &Preferences::new(vec!["No Such Genre".to_string()], vec![]),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let result = recommend(&catalog, Audience::CasualReader, &Preferences::default());
        let positions: Vec<usize> = result
            .iter()
            .map(|book| {
                catalog
                    .books()
                    .iter()
                    .position(|b| b.title == book.title)
                    .unwrap()
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_idempotence() {
        let catalog = Catalog::builtin();
        let prefs = Preferences::new(
            vec!["Fantasy".to_string()],
            vec!["tolkien".to_string()],
        );
        let first = recommend(&catalog, Audience::CasualReader, &prefs);
        let second = recommend(&catalog, Audience::CasualReader, &prefs);
        assert_eq!(titles(&first), titles(&second));
    }
}

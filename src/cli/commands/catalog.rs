use super::{print_books_table, CommandHandler};
use crate::catalog::{Audience, BookRecord, Catalog};
use crate::{LibrisError, Result};

/// Handler for the `catalog` command
pub struct CatalogCommand {
    pub audience: Option<String>,
    pub genre: Option<String>,
    pub format: String,
}

impl CommandHandler for CatalogCommand {
    fn execute(&self) -> Result<()> {
        let audience = match &self.audience {
            Some(raw) => Some(raw.parse::<Audience>()?),
            None => None,
        };

        let catalog = Catalog::builtin();
        let books: Vec<&BookRecord> = catalog
            .books()
            .iter()
            .filter(|book| audience.map_or(true, |role| book.audience == role))
            .filter(|book| {
                self.genre
                    .as_ref()
                    .map_or(true, |genre| book.genre == *genre)
            })
            .collect();

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&books)?),
            "text" => {
                if books.is_empty() {
                    println!("No books match.");
                } else {
                    print_books_table(&books, true);
                }
            }
            other => {
                return Err(LibrisError::Cli(format!(
                    "unknown output format '{}' (expected text or json)",
                    other
                )));
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "catalog"
    }
}

impl CatalogCommand {
    /// Create new catalog command
    pub fn new(audience: Option<String>, genre: Option<String>, format: String) -> Self {
        Self {
            audience,
            genre,
            format,
        }
    }
}

use super::{print_books_table, CommandHandler};
use crate::catalog::{Audience, Catalog};
use crate::engine::{parse_author_prefs, recommend, Preferences};
use crate::{LibrisError, Result};

/// Handler for the `recommend` command: a stateless engine query, no
/// session involved.
pub struct RecommendCommand {
    pub role: String,
    pub genres: Vec<String>,
    pub authors: String,
    pub format: String,
}

impl CommandHandler for RecommendCommand {
    fn execute(&self) -> Result<()> {
        let role: Audience = self.role.parse()?;
        let catalog = Catalog::builtin();
        let prefs = Preferences::new(self.genres.clone(), parse_author_prefs(&self.authors));
        let matches = recommend(&catalog, role, &prefs);

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&matches)?),
            "text" => {
                if matches.is_empty() {
                    println!("No recommendations found based on your preferences.");
                } else {
                    print_books_table(&matches, false);
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
        "recommend"
    }
}

impl RecommendCommand {
    /// Create new recommend command
    pub fn new(role: String, genres: Vec<String>, authors: String, format: String) -> Self {
        Self {
            role,
            genres,
            authors,
            format,
        }
    }
}

use super::CommandHandler;
use crate::catalog::Catalog;
use crate::Result;

/// Handler for the `genres` command
pub struct GenresCommand;

impl CommandHandler for GenresCommand {
    fn execute(&self) -> Result<()> {
        let catalog = Catalog::builtin();
        let genres = catalog.genres();

        for genre in &genres {
            println!("{}", genre);
        }
        println!("\nTotal: {} genres", genres.len());

        Ok(())
    }

    fn name(&self) -> &'static str {
        "genres"
    }
}

impl GenresCommand {
    /// Create new genres command
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenresCommand {
    fn default() -> Self {
        Self::new()
    }
}

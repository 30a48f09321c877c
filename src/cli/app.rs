use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// libris: personalized book recommendations from a curated catalog
#[derive(Parser)]
#[command(name = "libris")]
#[command(version = "0.1.0")]
#[command(about = "Personalized book recommendations from a curated catalog")]
#[command(
    long_about = "libris filters a built-in book catalog by reader role, favorite genres, and favorite authors, and keeps an ephemeral single-user session in its interactive shell."
)]
pub struct Cli {
    /// Configuration file path (default: discover libris.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// One-shot recommendation query against the built-in catalog
    Recommend {
        /// Reader role (Student, Professional, or Casual Reader)
        #[arg(long)]
        role: String,

        /// Genre filter; repeat the flag for several genres
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Comma-separated author-name fragments
        #[arg(long, default_value = "")]
        authors: String,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the built-in catalog, optionally narrowed
    Catalog {
        /// Only books aimed at this reader role
        #[arg(long)]
        audience: Option<String>,

        /// Only books with this exact genre label
        #[arg(long)]
        genre: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the catalog's distinct genre labels
    Genres,

    /// Interactive session shell (login, preferences, bookshelf, uploads)
    Shell,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Recommend { .. } => "recommend",
            Commands::Catalog { .. } => "catalog",
            Commands::Genres => "genres",
            Commands::Shell => "shell",
        }
    }

    /// Check if this command holds session state for its lifetime
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_recommend_parsing() {
        let cli = Cli::parse_from([
            "libris",
            "recommend",
            "--role",
            "Student",
            "--genre",
            "Educational",
            "--genre",
            "Science",
            "--authors",
            "knuth,cormen",
        ]);

        match cli.command {
            Commands::Recommend {
                role,
                genres,
                authors,
                format,
            } => {
                assert_eq!(role, "Student");
                assert_eq!(genres, vec!["Educational", "Science"]);
                assert_eq!(authors, "knuth,cormen");
                assert_eq!(format, "text");
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_recommend_defaults() {
        let cli = Cli::parse_from(["libris", "recommend", "--role", "Professional"]);

        match cli.command {
            Commands::Recommend {
                role,
                genres,
                authors,
                format,
            } => {
                assert_eq!(role, "Professional");
                assert!(genres.is_empty());
                assert_eq!(authors, "");
                assert_eq!(format, "text");
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_catalog_parsing() {
        let cli = Cli::parse_from([
            "libris",
            "catalog",
            "--audience",
            "Casual Reader",
            "--format",
            "json",
        ]);

        match cli.command {
            Commands::Catalog {
                audience,
                genre,
                format,
            } => {
                assert_eq!(audience, Some("Casual Reader".to_string()));
                assert_eq!(genre, None);
                assert_eq!(format, "json");
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["libris", "shell", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Shell));
    }

    #[test]
    fn test_command_properties() {
        let shell = Commands::Shell;
        assert_eq!(shell.name(), "shell");
        assert!(shell.is_interactive());

        let genres = Commands::Genres;
        assert_eq!(genres.name(), "genres");
        assert!(!genres.is_interactive());
    }
}

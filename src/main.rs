use clap::Parser;
use libris::{
    cli::commands::{
        catalog::CatalogCommand, genres::GenresCommand, recommend::RecommendCommand,
        shell::ShellCommand, CommandHandler,
    },
    cli::{Cli, Commands},
    config::{load_config, AppConfig},
    Result,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.command {
        Commands::Recommend {
            role,
            genres,
            authors,
            format,
        } => {
            RecommendCommand::new(role, genres, authors, format).execute()?;
        }
        Commands::Catalog {
            audience,
            genre,
            format,
        } => {
            CatalogCommand::new(audience, genre, format).execute()?;
        }
        Commands::Genres => {
            GenresCommand::new().execute()?;
        }
        Commands::Shell => {
            ShellCommand::new(config).execute()?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with command output on
/// stdout. `RUST_LOG` overrides the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

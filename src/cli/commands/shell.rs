use super::{print_books_table, CommandHandler};
use crate::catalog::{Audience, BookRecord, Catalog};
use crate::config::AppConfig;
use crate::io::UploadStore;
use crate::session::SessionContext;
use crate::{LibrisError, Result};
use anyhow::Context;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Handler for the `shell` command: the interactive session loop.
///
/// The shell owns exactly one [`SessionContext`] for the lifetime of the
/// process. Nothing it records survives exit.
pub struct ShellCommand {
    config: AppConfig,
}

impl CommandHandler for ShellCommand {
    fn execute(&self) -> Result<()> {
        let catalog = Catalog::builtin();
        let store = UploadStore::new(self.config.upload_dir.clone());
        let mut session = SessionContext::new();

        println!("📚 libris: type 'help' for commands, 'quit' to exit.");

        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("libris> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next() else { break };
            let line = line?;

            let tokens = match shell_words::split(&line) {
                Ok(tokens) => tokens,
                Err(e) => {
                    println!("❌ {}", e);
                    continue;
                }
            };
            let Some((command, args)) = tokens.split_first() else {
                continue;
            };

            if command == "quit" || command == "exit" {
                break;
            }
            if let Err(e) = dispatch(command, args, &catalog, &store, &mut session) {
                println!("❌ {}", e);
            }
        }

        println!("👋 Session ended; nothing was persisted.");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "shell"
    }
}

impl ShellCommand {
    /// Create new shell command
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

/// Execute one shell line against the session.
fn dispatch(
    command: &str,
    args: &[String],
    catalog: &Catalog,
    store: &UploadStore,
    session: &mut SessionContext,
) -> Result<()> {
    match command {
        "help" => print_help(),
        "signup" => signup(args, session)?,
        "login" => login(args, session)?,
        "logout" => {
            session.log_out();
            println!("✅ Logged out.");
        }
        "prefs" => prefs(args, session),
        "recommend" => recommend_for_session(catalog, session)?,
        "catalog" => {
            let books: Vec<&BookRecord> = catalog.books().iter().collect();
            print_books_table(&books, true);
        }
        "genres" => {
            for genre in catalog.genres() {
                println!("{}", genre);
            }
        }
        "shelf" => shelf(args, catalog, session)?,
        "read" => mark_read(args, catalog, session)?,
        "history" => history(session),
        "feedback" => feedback(args, session)?,
        "review" => review(args, catalog, session)?,
        "upload" => upload(args, store)?,
        "uploads" => uploads(store)?,
        "session" => println!("{}", serde_json::to_string_pretty(session)?),
        other => {
            return Err(LibrisError::Cli(format!(
                "unknown command '{}' (type 'help')",
                other
            )));
        }
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  signup <email> <password> <role>   create the session account");
    println!("  login <email> <password>           authenticate");
    println!("  logout                             clear authentication and preferences");
    println!("  prefs [genres] [authors]           save comma-separated preference lists");
    println!("  recommend                          personalized recommendations");
    println!("  catalog                            list all books");
    println!("  genres                             list genre labels");
    println!("  shelf [title]                      show the bookshelf, or add a book");
    println!("  read <title>                       mark a book as read");
    println!("  history                            show reading history");
    println!("  feedback [<title> <comment...>]    show feedback, or leave some");
    println!("  review <title> <rating> [text...]  rate a book 1-5");
    println!("  upload <path>                      share a file (pdf, txt, epub)");
    println!("  uploads                            list shared files");
    println!("  session                            dump session state as JSON");
    println!("  quit                               exit");
}

fn signup(args: &[String], session: &mut SessionContext) -> Result<()> {
    if args.len() < 3 {
        return Err(LibrisError::Cli(
            "usage: signup <email> <password> <role>".to_string(),
        ));
    }
    let role: Audience = args[2..].join(" ").parse()?;
    session.sign_up(&args[0], &args[1], role);
    println!("✅ Account created successfully! Log in to continue.");
    Ok(())
}

fn login(args: &[String], session: &mut SessionContext) -> Result<()> {
    if args.len() != 2 {
        return Err(LibrisError::Cli(
            "usage: login <email> <password>".to_string(),
        ));
    }
    session.log_in(&args[0], &args[1])?;
    println!("✅ Welcome back {}!", args[0]);
    Ok(())
}

fn prefs(args: &[String], session: &mut SessionContext) {
    let genres: Vec<String> = args
        .first()
        .map(|csv| {
            csv.split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let author_text = args.get(1).map(String::as_str).unwrap_or("");

    session.save_preferences(genres, author_text);
    println!("✅ Preferences saved!");
}

fn recommend_for_session(catalog: &Catalog, session: &SessionContext) -> Result<()> {
    let books = session.recommendations(catalog)?;
    if books.is_empty() {
        println!("No recommendations found based on your preferences.");
        return Ok(());
    }

    println!("📖 Recommended Books");
    for book in books {
        println!("  {}", book.title);
        println!("    Author: {}", book.author);
        println!("    Genre:  {}", book.genre);
    }
    Ok(())
}

fn shelf(args: &[String], catalog: &Catalog, session: &mut SessionContext) -> Result<()> {
    if args.is_empty() {
        if session.bookshelf.is_empty() {
            println!("Your bookshelf is empty.");
        } else {
            println!("Your bookshelf:");
            for title in &session.bookshelf {
                println!("  - {}", title);
            }
        }
        return Ok(());
    }

    let title = args.join(" ");
    if session.add_to_bookshelf(catalog, &title)? {
        println!("✅ Added '{}' to your bookshelf!", title);
    } else {
        println!("This book is already in your bookshelf.");
    }
    Ok(())
}

fn mark_read(args: &[String], catalog: &Catalog, session: &mut SessionContext) -> Result<()> {
    if args.is_empty() {
        return Err(LibrisError::Cli("usage: read <title>".to_string()));
    }

    let title = args.join(" ");
    if session.mark_as_read(catalog, &title)? {
        println!("✅ Marked '{}' as read!", title);
    } else {
        println!("This book is already in your reading history.");
    }
    Ok(())
}

fn history(session: &SessionContext) {
    if session.reading_history.is_empty() {
        println!("You have no reading history yet.");
        return;
    }
    println!("Your reading history:");
    for title in &session.reading_history {
        println!("  - {}", title);
    }
}

fn feedback(args: &[String], session: &mut SessionContext) -> Result<()> {
    if args.is_empty() {
        if session.feedback.is_empty() {
            println!("No feedback yet.");
        } else {
            for entry in &session.feedback {
                println!("  {}: {}", entry.title, entry.comment);
            }
        }
        return Ok(());
    }

    if args.len() < 2 {
        return Err(LibrisError::Cli(
            "usage: feedback <title> <comment...>".to_string(),
        ));
    }
    session.add_feedback(&args[0], &args[1..].join(" "));
    println!("✅ Thank you for your feedback!");
    Ok(())
}

fn review(args: &[String], catalog: &Catalog, session: &mut SessionContext) -> Result<()> {
    if args.len() < 2 {
        return Err(LibrisError::Cli(
            "usage: review <title> <rating> [text...]".to_string(),
        ));
    }

    let rating: u8 = args[1]
        .parse()
        .map_err(|_| LibrisError::Cli(format!("'{}' is not a rating (1-5)", args[1])))?;
    let text = if args.len() > 2 {
        Some(args[2..].join(" "))
    } else {
        None
    };

    session.add_review(catalog, &args[0], rating, text)?;
    println!("✅ Thank you for reviewing '{}'!", args[0]);
    Ok(())
}

fn upload(args: &[String], store: &UploadStore) -> Result<()> {
    if args.len() != 1 {
        return Err(LibrisError::Cli("usage: upload <path>".to_string()));
    }

    let source = Path::new(&args[0]);
    let filename = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LibrisError::Cli(format!("'{}' has no usable filename", args[0])))?;

    let bytes = fs::read(source).with_context(|| format!("failed to read '{}'", source.display()))?;
    let path = store.save(filename, &bytes)?;
    println!("✅ Successfully uploaded '{}'!", filename);
    println!("📂 Saved to {}", path.display());
    Ok(())
}

fn uploads(store: &UploadStore) -> Result<()> {
    let names = store.list()?;
    if names.is_empty() {
        println!("No files uploaded yet.");
        return Ok(());
    }
    for name in names {
        println!("  - {}", name);
    }
    Ok(())
}

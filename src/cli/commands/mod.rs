pub mod catalog;
pub mod genres;
pub mod recommend;
pub mod shell;

use crate::catalog::BookRecord;
use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Print books in aligned columns, with a count footer.
pub(crate) fn print_books_table(books: &[&BookRecord], show_audience: bool) {
    let title_width = books
        .iter()
        .map(|b| b.title.len())
        .max()
        .unwrap_or(5)
        .max(5); // "TITLE"

    let author_width = books
        .iter()
        .map(|b| b.author.len())
        .max()
        .unwrap_or(6)
        .max(6); // "AUTHOR"

    let genre_width = books
        .iter()
        .map(|b| b.genre.len())
        .max()
        .unwrap_or(5)
        .max(5); // "GENRE"

    if show_audience {
        println!("{:<title_width$} {:<author_width$} {:<genre_width$} AUDIENCE", "TITLE", "AUTHOR", "GENRE");
    } else {
        println!("{:<title_width$} {:<author_width$} GENRE", "TITLE", "AUTHOR");
    }

    println!(
        "{} {} {}{}",
        "-".repeat(title_width),
        "-".repeat(author_width),
        "-".repeat(genre_width),
        if show_audience {
            format!(" {}", "-".repeat(8))
        } else {
            String::new()
        }
    );

    for book in books {
        if show_audience {
            println!(
                "{:<title_width$} {:<author_width$} {:<genre_width$} {}",
                book.title, book.author, book.genre, book.audience
            );
        } else {
            println!(
                "{:<title_width$} {:<author_width$} {}",
                book.title, book.author, book.genre
            );
        }
    }

    println!("\nTotal: {} books", books.len());
}

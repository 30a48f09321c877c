//! The built-in book catalog.
//!
//! The catalog is constructed once at startup and never mutated. Iteration
//! order is definition order, and every query over it preserves that order.

mod books;

use crate::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reader category a book is aimed at.
///
/// This is the primary recommendation filter: a book is only ever eligible
/// for readers whose role matches its audience exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    Student,
    Professional,
    #[serde(rename = "Casual Reader")]
    CasualReader,
}

impl Audience {
    /// All roles, in the order the sign-up flow offers them.
    pub const ALL: [Audience; 3] = [
        Audience::Student,
        Audience::Professional,
        Audience::CasualReader,
    ];

    /// Human-readable label, matching the catalog's audience column.
    pub fn label(&self) -> &'static str {
        match self {
            Audience::Student => "Student",
            Audience::Professional => "Professional",
            Audience::CasualReader => "Casual Reader",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Audience {
    type Err = LibrisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Audience::Student),
            "professional" => Ok(Audience::Professional),
            "casual reader" | "casual-reader" | "casual_reader" | "casualreader" => {
                Ok(Audience::CasualReader)
            }
            other => Err(LibrisError::Catalog(format!(
                "unknown reader role '{}' (expected Student, Professional, or Casual Reader)",
                other
            ))),
        }
    }
}

/// One book in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Title, unique within the catalog.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Genre label. Genres are an open set; no enum constrains them.
    pub genre: String,
    /// Reader category this book targets.
    pub audience: Audience,
}

/// The fixed in-memory collection of [`BookRecord`] entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<BookRecord>,
}

impl Catalog {
    /// Build the built-in catalog.
    pub fn builtin() -> Self {
        let books = books::BUILTIN_BOOKS
            .iter()
            .map(|(title, author, genre, audience)| BookRecord {
                title: (*title).to_string(),
                author: (*author).to_string(),
                genre: (*genre).to_string(),
                audience: *audience,
            })
            .collect();
        Self { books }
    }

    /// All books, in catalog order.
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a book by exact title.
    pub fn find_by_title(&self, title: &str) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.title == title)
    }

    /// Whether a book with this exact title exists.
    pub fn contains_title(&self, title: &str) -> bool {
        self.find_by_title(title).is_some()
    }

    /// Distinct genre labels, in first-appearance order.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for book in &self.books {
            if !genres.contains(&book.genre.as_str()) {
                genres.push(&book.genre);
            }
        }
        genres
    }
}

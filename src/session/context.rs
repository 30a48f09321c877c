use crate::auth::Account;
use crate::catalog::{Audience, BookRecord, Catalog};
use crate::engine::{recommend, Preferences};
use crate::session::types::{FeedbackEntry, Review};
use crate::{LibrisError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// The per-session context: identity, preferences, bookshelf, reading
/// history, feedback, and reviews.
///
/// The context is passed explicitly into every operation that reads or
/// mutates it; there is no ambient global session. Exactly one context is
/// live at a time and it dies with the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub authenticated: bool,
    pub account: Option<Account>,
    pub preferences: Option<Preferences>,
    pub bookshelf: Vec<String>,
    pub reading_history: Vec<String>,
    pub feedback: Vec<FeedbackEntry>,
    pub reviews: Vec<Review>,
}

impl SessionContext {
    /// Create a fresh, unauthenticated session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            authenticated: false,
            account: None,
            preferences: None,
            bookshelf: Vec::new(),
            reading_history: Vec::new(),
            feedback: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Register an account on this session, replacing any existing one.
    ///
    /// Sign-up does not log the user in; a login with the same credentials
    /// must follow.
    pub fn sign_up(&mut self, email: &str, password: &str, role: Audience) {
        self.account = Some(Account::new(email, password, role));
        self.authenticated = false;
        self.preferences = None;
        info!(email = %email, role = %role, "account created");
    }

    /// Verify credentials against the registered account and mark the
    /// session authenticated.
    ///
    /// Fails recoverably when no account exists or the credentials do not
    /// match; the caller may retry.
    pub fn log_in(&mut self, email: &str, password: &str) -> Result<()> {
        let verified = self
            .account
            .as_ref()
            .map(|account| account.verify(email, password))
            .unwrap_or(false);

        if verified {
            self.authenticated = true;
            info!(email = %email, "login succeeded");
            Ok(())
        } else {
            Err(LibrisError::Auth("invalid email or password".to_string()))
        }
    }

    /// Clear the authentication flag and drop the account along with its
    /// preferences.
    pub fn log_out(&mut self) {
        self.authenticated = false;
        self.account = None;
        self.preferences = None;
        info!("logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Role of the authenticated account, if any.
    pub fn role(&self) -> Option<Audience> {
        self.account.as_ref().map(|account| account.role)
    }

    /// Replace the preference set wholesale.
    ///
    /// `author_text` is the free-text comma-separated author field; see
    /// [`crate::engine::parse_author_prefs`] for its tokenization.
    pub fn save_preferences(&mut self, genres: Vec<String>, author_text: &str) {
        let prefs = Preferences::from_free_text(genres, author_text);
        info!(genres = prefs.genres.len(), authors = prefs.authors.len(), "preferences saved");
        self.preferences = Some(prefs);
    }

    /// Recommendations for the authenticated reader, using the saved
    /// preferences (or none, if preferences were never saved).
    pub fn recommendations<'a>(&self, catalog: &'a Catalog) -> Result<Vec<&'a BookRecord>> {
        if !self.authenticated {
            return Err(LibrisError::Auth(
                "please log in to view recommendations".to_string(),
            ));
        }
        let account = self
            .account
            .as_ref()
            .ok_or_else(|| LibrisError::Auth("please log in to view recommendations".to_string()))?;

        let default_prefs = Preferences::default();
        let prefs = self.preferences.as_ref().unwrap_or(&default_prefs);
        Ok(recommend(catalog, account.role, prefs))
    }

    /// Add a catalog book to the bookshelf. Returns `Ok(false)` if it was
    /// already shelved.
    pub fn add_to_bookshelf(&mut self, catalog: &Catalog, title: &str) -> Result<bool> {
        Self::require_catalog_title(catalog, title)?;
        if self.bookshelf.iter().any(|shelved| shelved == title) {
            return Ok(false);
        }
        self.bookshelf.push(title.to_string());
        Ok(true)
    }

    /// Record a catalog book as read. Returns `Ok(false)` if it was already
    /// in the reading history.
    pub fn mark_as_read(&mut self, catalog: &Catalog, title: &str) -> Result<bool> {
        Self::require_catalog_title(catalog, title)?;
        if self.reading_history.iter().any(|read| read == title) {
            return Ok(false);
        }
        self.reading_history.push(title.to_string());
        Ok(true)
    }

    /// Append free-text feedback. The title is taken as given.
    pub fn add_feedback(&mut self, title: &str, comment: &str) {
        self.feedback.push(FeedbackEntry::new(title, comment));
    }

    /// Append a rating (1..=5) with optional review text for a catalog
    /// book.
    pub fn add_review(
        &mut self,
        catalog: &Catalog,
        title: &str,
        rating: u8,
        text: Option<String>,
    ) -> Result<()> {
        Self::require_catalog_title(catalog, title)?;
        if !(1..=5).contains(&rating) {
            return Err(LibrisError::Session(format!(
                "rating must be between 1 and 5, got {}",
                rating
            )));
        }
        self.reviews.push(Review::new(title, rating, text));
        Ok(())
    }

    fn require_catalog_title(catalog: &Catalog, title: &str) -> Result<()> {
        if catalog.contains_title(title) {
            Ok(())
        } else {
            Err(LibrisError::Session(format!(
                "'{}' is not in the catalog",
                title
            )))
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

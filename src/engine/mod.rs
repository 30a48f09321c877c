//! The recommendation engine.
//!
//! A single pure query: given a reader role and a preference set, produce
//! the matching subsequence of the catalog. No state, no I/O, no failure
//! modes; inputs that match nothing yield an empty result, never an error.

mod preferences;
mod recommend;

pub use preferences::{parse_author_prefs, Preferences};
pub use recommend::recommend;

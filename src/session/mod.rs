//! Ephemeral single-user session state.
//!
//! One [`SessionContext`] is created when the interactive shell starts and
//! dropped when it exits. Nothing here touches disk; there is no
//! persistence across process restarts and no cross-session sharing.

mod context;
mod types;

pub use context::SessionContext;
pub use types::{FeedbackEntry, Review};

//! File sharing: uploaded byte streams written under a local directory.

mod uploads;

pub use uploads::{is_safe_filename, UploadStore, ALLOWED_EXTENSIONS};

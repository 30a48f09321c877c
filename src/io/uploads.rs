use crate::{LibrisError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// File extensions the store accepts, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "txt", "epub"];

/// Writes uploaded byte streams under a fixed local directory.
///
/// The directory is created on demand at the first save. Filenames are
/// restricted to a single path component so an upload can never escape the
/// store.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory uploads land in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write an uploaded byte stream, returning the path it landed at.
    ///
    /// Rejects filenames with path separators or parent-dir components and
    /// extensions outside [`ALLOWED_EXTENSIONS`].
    pub fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        if !is_safe_filename(filename) {
            return Err(LibrisError::Upload(format!(
                "invalid upload filename '{}'",
                filename
            )));
        }

        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());
        match extension.as_deref() {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext) => {}
            _ => {
                return Err(LibrisError::Upload(format!(
                    "unsupported file type for '{}' (allowed: {})",
                    filename,
                    ALLOWED_EXTENSIONS.join(", ")
                )));
            }
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "upload saved");
        Ok(path)
    }

    /// Names of uploaded files, sorted. Empty when nothing has been
    /// uploaded yet.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        if self.dir.exists() {
            for entry in fs::read_dir(&self.dir)? {
                let entry = entry?;
                if entry.path().is_file() {
                    if let Some(name) = entry.file_name().to_str() {
                        names.push(name.to_string());
                    }
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

/// A filename is safe when it is exactly one normal path component: no
/// separators, no parent-dir references, not absolute, not empty.
pub fn is_safe_filename(filename: &str) -> bool {
    if filename.is_empty() {
        return false;
    }
    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

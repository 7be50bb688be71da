//! File IO helpers.
//!
//! Synchronous and minimal: read a whole file into a [`Document`], write the
//! serialized document back in one call. Status-bar reporting is left to the
//! dispatcher.

use std::io;
use std::path::{Path, PathBuf};

use core_text::Document;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("cannot open {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SaveError {
    /// Underlying OS error, as shown on the message bar.
    pub fn io_error(&self) -> &io::Error {
        match self {
            SaveError::Write { source, .. } => source,
        }
    }
}

/// Load `path` into a clean document with the matching language profile.
pub fn open_file(path: &Path, tab_stop: usize) -> Result<Document, OpenError> {
    let content = std::fs::read(path).map_err(|source| {
        error!(target: "io", path = %path.display(), error = %source, "file_open_error");
        OpenError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let mut doc = Document::from_bytes(&content, tab_stop);
    doc.set_path(path);
    info!(
        target: "io",
        path = %path.display(),
        bytes = content.len(),
        lines = doc.line_count(),
        "file_opened"
    );
    Ok(doc)
}

/// Write `doc` to `path`, truncating. Lines are joined by `\n` and followed by
/// exactly one trailing newline (an empty document writes nothing).
///
/// On success the document is marked clean and the number of bytes written is
/// returned; on failure it is untouched.
pub fn write_document(doc: &mut Document, path: &Path) -> Result<usize, SaveError> {
    let mut content = doc.serialize();
    if !doc.is_empty() {
        content.push(b'\n');
    }
    match std::fs::write(path, &content) {
        Ok(()) => {
            doc.mark_clean();
            info!(target: "io", path = %path.display(), bytes = content.len(), "file_written");
            Ok(content.len())
        }
        Err(source) => {
            error!(target: "io", path = %path.display(), error = %source, "file_write_error");
            Err(SaveError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

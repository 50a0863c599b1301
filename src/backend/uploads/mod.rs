//! Photo Upload Storage
//!
//! Disk-backed blob store for employee photos. Uploaded files land under
//! the public image directory so the static file server can serve them
//! back to the dashboard; only the generated filename is recorded on the
//! employee row.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;

/// Disk-backed store for uploaded photos.
///
/// Stored names follow the `<field>_<millis><ext>` scheme, keeping the
/// original file extension so content types can be inferred when the
/// files are served.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory uploads are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write an uploaded file and return its stored filename.
    pub async fn store(
        &self,
        field_name: &str,
        original_name: &str,
        data: &[u8],
    ) -> io::Result<String> {
        let filename = Self::generate_name(field_name, original_name);
        fs::create_dir_all(&self.root).await?;
        fs::write(self.root.join(&filename), data).await?;
        tracing::debug!("stored upload {} ({} bytes)", filename, data.len());
        Ok(filename)
    }

    /// Build a stored filename: field name, millisecond timestamp, and the
    /// original extension (if any).
    fn generate_name(field_name: &str, original_name: &str) -> String {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        format!("{}_{}{}", field_name, Utc::now().timestamp_millis(), ext)
    }
}

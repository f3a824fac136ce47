//! The bundled entry document loaded at startup.

use std::io;
use std::path::PathBuf;

use harbor_common::HarborError;
use url::Url;

/// Assets directory plus the entry path inside it (e.g. `index.html`).
#[derive(Debug, Clone)]
pub struct EntryPoint {
    assets_dir: PathBuf,
    entry: String,
}

impl EntryPoint {
    pub fn new(assets_dir: impl Into<PathBuf>, entry: impl Into<String>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            entry: entry.into(),
        }
    }

    /// Resolve to the `file://` URL handed to the view.
    ///
    /// The document must exist and must stay inside the assets directory
    /// after symlinks and `..` are resolved.
    pub fn resolve(&self) -> Result<Url, HarborError> {
        let canonical_base = std::fs::canonicalize(&self.assets_dir).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("assets directory {}: {e}", self.assets_dir.display()),
            )
        })?;

        let candidate = self.assets_dir.join(self.entry.trim_start_matches('/'));
        let canonical_file = std::fs::canonicalize(&candidate).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("entry document {}: {e}", candidate.display()),
            )
        })?;

        if !canonical_file.starts_with(&canonical_base) {
            return Err(HarborError::Other(format!(
                "entry document {} resolves outside {}",
                candidate.display(),
                canonical_base.display()
            )));
        }
        if !canonical_file.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("entry document {} is not a file", canonical_file.display()),
            )
            .into());
        }

        Url::from_file_path(&canonical_file).map_err(|()| {
            HarborError::Other(format!(
                "cannot express {} as a file URL",
                canonical_file.display()
            ))
        })
    }
}

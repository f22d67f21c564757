use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::info;

#[derive(Error, Debug)]
#[error("Failed to write {path}: {source}")]
pub struct StorageError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Writes downloads into a single directory.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// `base_dir` may start with `~`.
    pub fn new(base_dir: &str) -> Self {
        let expanded = shellexpand::tilde(base_dir).to_string();
        Self {
            base_dir: PathBuf::from(expanded),
        }
    }

    /// Store bytes under the base name of `filename`, replacing any existing
    /// file. Returns the absolute path written.
    pub async fn store(&self, filename: &str, data: &[u8]) -> Result<PathBuf, StorageError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|source| StorageError {
                path: self.base_dir.clone(),
                source,
            })?;

        let path = self.base_dir.join(Self::base_name(filename));
        fs::write(&path, data).await.map_err(|source| StorageError {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = data.len(), "Saved download");
        Ok(path)
    }

    /// Archive entries carry directory prefixes; only the last component is
    /// used so nothing is written outside `base_dir`.
    fn base_name(filename: &str) -> &str {
        filename
            .rsplit(['/', '\\'])
            .find(|part| !part.is_empty() && *part != "." && *part != "..")
            .unwrap_or("download.bin")
    }
}

use super::client::MediaBackend;
use super::error::UploadError;
use crate::config::Config;
use crate::media::{unpack_archive, Carousel, FileStorage, ResultFile, SelectedFile};
use std::path::PathBuf;
use tracing::{info, warn};

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Results were unpacked into the result carousel.
    Preview { results: usize },
    /// Previews are off; the archive went straight to disk.
    Saved { path: PathBuf, results: usize },
}

/// Owns the last received archive and the results unpacked from it.
///
/// A submission either replaces both or leaves both untouched.
pub struct UploadSession<B> {
    backend: B,
    storage: FileStorage,
    preview_results: bool,
    /// Name the archive is saved under for this configuration.
    archive_name: String,
    archive: Option<Vec<u8>>,
    results: Carousel<ResultFile>,
}

impl<B: MediaBackend> UploadSession<B> {
    pub fn new(backend: B, config: &Config) -> Self {
        Self {
            backend,
            storage: FileStorage::new(&config.download_dir),
            preview_results: config.preview_results,
            archive_name: config.archive_name().to_string(),
            archive: None,
            results: Carousel::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn preview_results(&self) -> bool {
        self.preview_results
    }

    pub fn archive(&self) -> Option<&[u8]> {
        self.archive.as_deref()
    }

    pub fn results(&self) -> &Carousel<ResultFile> {
        &self.results
    }

    pub fn results_mut(&mut self) -> &mut Carousel<ResultFile> {
        &mut self.results
    }

    /// Send `files` to the backend and take in the archive it returns.
    ///
    /// Fails without contacting the backend when `files` is empty. Nothing
    /// is retried.
    pub async fn submit(&mut self, files: &[SelectedFile]) -> Result<Submission, UploadError> {
        if files.is_empty() {
            warn!("Submit requested with no files selected");
            return Err(UploadError::Validation);
        }

        let body = self.backend.upload(files).await?;
        let results = unpack_archive(&body)?;
        let count = results.len();
        info!(results = count, bytes = body.len(), "Received result archive");

        if self.preview_results {
            self.results.set_items(results);
            self.archive = Some(body);
            Ok(Submission::Preview { results: count })
        } else {
            let path = self.storage.store(&self.archive_name, &body).await?;
            self.results.clear();
            self.archive = Some(body);
            Ok(Submission::Saved {
                path,
                results: count,
            })
        }
    }

    /// Save the archive from the last successful submission.
    pub async fn download_original(&self) -> Result<PathBuf, UploadError> {
        let Some(archive) = self.archive.as_deref() else {
            return Err(UploadError::NotReady);
        };
        Ok(self.storage.store(&self.archive_name, archive).await?)
    }

    /// Save the result entry currently shown, under its base name.
    pub async fn export_current_result(&self) -> Result<PathBuf, UploadError> {
        let Some(file) = self.results.current() else {
            return Err(UploadError::NotReady);
        };
        Ok(self.storage.store(&file.name, &file.data).await?)
    }
}

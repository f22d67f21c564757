use crate::media::{ArchiveFormatError, StorageError};
use thiserror::Error;

pub const NO_FILES_NOTICE: &str = "Завантажте файли перед відправкою.";
pub const TRANSFER_NOTICE: &str = "Не вдалося надіслати файли. Перевірте сервер.";
pub const NOT_READY_NOTICE: &str = "Оригінальний архів не завантажено.";
pub const SAVE_NOTICE: &str = "Не вдалося зберегти файл.";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No files selected")]
    Validation,

    #[error("Request to {url} failed: {source}")]
    Transfer {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Backend at {url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    ArchiveFormat(#[from] ArchiveFormatError),

    #[error("No archive has been received yet")]
    NotReady,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl UploadError {
    /// Whether the request itself failed, as opposed to what came back.
    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::Transfer { .. } | Self::Status { .. })
    }

    /// Message shown to the user. Network and archive failures share one
    /// generic notice.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Validation => NO_FILES_NOTICE,
            Self::Transfer { .. } | Self::Status { .. } | Self::ArchiveFormat(_) => TRANSFER_NOTICE,
            Self::NotReady => NOT_READY_NOTICE,
            Self::Storage(_) => SAVE_NOTICE,
        }
    }
}

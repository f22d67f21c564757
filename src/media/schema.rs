use serde::{Deserialize, Serialize};

/// What a file can be previewed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Unsupported,
}

impl MediaKind {
    /// Classify by MIME prefix: `image/*` and `video/*` are previewable.
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            Self::Image
        } else if mime_type.starts_with("video/") {
            Self::Video
        } else {
            Self::Unsupported
        }
    }
}

/// Anything the carousels can show.
pub trait MediaItem {
    fn name(&self) -> &str;
    fn mime_type(&self) -> &str;
    fn data(&self) -> &[u8];

    fn kind(&self) -> MediaKind {
        MediaKind::from_mime(self.mime_type())
    }

    fn size(&self) -> u64 {
        self.data().len() as u64
    }
}

/// A file picked locally for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }
}

impl MediaItem for SelectedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn data(&self) -> &[u8] {
        &self.data
    }
}

/// One entry unpacked from the backend's result archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFile {
    /// Entry path inside the archive.
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl MediaItem for ResultFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Listing row for a result entry, printed by the non-interactive upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSummary {
    pub name: String,
    pub mime_type: String,
    pub kind: MediaKind,
    pub size: u64,
}

impl From<&ResultFile> for ResultSummary {
    fn from(file: &ResultFile) -> Self {
        Self {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            kind: file.kind(),
            size: file.size(),
        }
    }
}

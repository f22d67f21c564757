use super::schema::SelectedFile;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// MIME types the upload page lets the user pick.
pub const ACCEPTED_TYPES: [&str; 3] = ["image/png", "image/jpeg", "video/mp4"];

/// Whether a MIME type passes the client-side upload filter.
pub fn is_accepted(mime_type: &str) -> bool {
    ACCEPTED_TYPES.contains(&mime_type)
}

/// Guess MIME type from filename extension.
pub fn guess_mime_type(filename: &str) -> String {
    let ext = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    };
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "zip" => "application/zip",
        "txt" => "text/plain",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// Type the backend's archive entries are assumed to have.
///
/// Only `.mp4` is recognised; every other entry is labelled PNG, whatever
/// its real extension.
pub fn result_mime_type(entry_name: &str) -> &'static str {
    if entry_name.ends_with(".mp4") {
        "video/mp4"
    } else {
        "image/png"
    }
}

/// Read a local file into a [`SelectedFile`], named after its base name.
pub async fn read_selected_file(path: &Path) -> Result<SelectedFile> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Not a file path: {}", path.display()))?
        .to_string();
    let data = fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mime_type = guess_mime_type(&name);
    Ok(SelectedFile::new(name, mime_type, data))
}

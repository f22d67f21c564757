//! Unpacking the zip archive the processing backend answers with.

use super::extract::result_mime_type;
use super::schema::ResultFile;
use std::io::{self, Cursor, Read};
use thiserror::Error;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

/// The response body could not be read as a zip archive.
#[derive(Error, Debug)]
pub enum ArchiveFormatError {
    #[error("Malformed archive: {0}")]
    Zip(#[from] ZipError),

    #[error("Failed to read archive entry {name}: {source}")]
    Entry {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Archive entry {name} declares {declared} bytes but holds {actual}")]
    SizeMismatch {
        name: String,
        declared: u64,
        actual: u64,
    },
}

/// Extract every file entry, in the order the archive lists them.
///
/// Directory entries are skipped. Entry types come from
/// [`result_mime_type`].
pub fn unpack_archive(bytes: &[u8]) -> Result<Vec<ResultFile>, ArchiveFormatError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut files = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }

        let name = entry.name().to_string();
        // The declared size is untrusted; never reserve more than the body.
        let declared = entry.size();
        let mut data = Vec::with_capacity(declared.min(bytes.len() as u64) as usize);
        entry
            .read_to_end(&mut data)
            .map_err(|source| ArchiveFormatError::Entry {
                name: name.clone(),
                source,
            })?;
        if data.len() as u64 != declared {
            return Err(ArchiveFormatError::SizeMismatch {
                name,
                declared,
                actual: data.len() as u64,
            });
        }

        let mime_type = result_mime_type(&name);
        debug!(entry = %name, mime_type, bytes = data.len(), "Unpacked result entry");
        files.push(ResultFile {
            name,
            mime_type: mime_type.to_string(),
            data,
        });
    }

    Ok(files)
}

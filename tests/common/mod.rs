//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use scootwatch::config::Config;
use scootwatch::media::SelectedFile;
use scootwatch::upload::{MediaBackend, UploadError};
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Mutex;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Build a zip archive; names ending in `/` become directory entries.
pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, SimpleFileOptions::default()).unwrap();
        } else {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(data.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

pub fn image(name: &str) -> SelectedFile {
    SelectedFile::new(name, "image/png", format!("pixels of {name}").into_bytes())
}

pub fn video(name: &str) -> SelectedFile {
    SelectedFile::new(name, "video/mp4", format!("frames of {name}").into_bytes())
}

/// Config that writes downloads into `dir`.
pub fn config_in(dir: &Path) -> Config {
    Config {
        download_dir: dir.display().to_string(),
        ..Config::default()
    }
}

/// Backend double that answers each call with the next queued body and
/// remembers which file names it was sent.
pub struct MockBackend {
    responses: Mutex<Vec<Option<Vec<u8>>>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockBackend {
    /// `None` entries answer with a 502.
    pub fn new(responses: Vec<Option<Vec<u8>>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaBackend for MockBackend {
    async fn upload(&self, files: &[SelectedFile]) -> Result<Vec<u8>, UploadError> {
        self.calls
            .lock()
            .unwrap()
            .push(files.iter().map(|f| f.name.clone()).collect());

        let mut responses = self.responses.lock().unwrap();
        let next = if responses.is_empty() {
            None
        } else {
            responses.remove(0)
        };
        next.ok_or(UploadError::Status {
            url: "http://mock/upload_media".into(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        })
    }
}

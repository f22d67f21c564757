use super::error::UploadError;
use crate::config::Config;
use crate::media::SelectedFile;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

/// Something that takes the picked files and answers with a zip archive.
#[async_trait]
pub trait MediaBackend: Send + Sync {
    /// Send every file in one request and return the raw response body.
    async fn upload(&self, files: &[SelectedFile]) -> Result<Vec<u8>, UploadError>;
}

/// The processing backend over HTTP: one multipart `POST` per submission.
pub struct HttpBackend {
    client: reqwest::Client,
    url: String,
    field_name: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self, UploadError> {
        let url = config.upload_url();
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|source| UploadError::Transfer {
                url: url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            url,
            field_name: config.field_name.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_form(&self, files: &[SelectedFile]) -> Result<Form, UploadError> {
        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.data.clone())
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)
                .map_err(|source| UploadError::Transfer {
                    url: self.url.clone(),
                    source,
                })?;
            form = form.part(self.field_name.clone(), part);
        }
        Ok(form)
    }
}

#[async_trait]
impl MediaBackend for HttpBackend {
    async fn upload(&self, files: &[SelectedFile]) -> Result<Vec<u8>, UploadError> {
        let form = self.build_form(files)?;
        let total: usize = files.iter().map(|f| f.data.len()).sum();
        info!(url = %self.url, files = files.len(), bytes = total, "Uploading media");

        let transfer = |source: reqwest::Error| UploadError::Transfer {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(transfer)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transfer)?;
        debug!(status = %status, bytes = body.len(), "Backend responded");
        Ok(body.to_vec())
    }
}

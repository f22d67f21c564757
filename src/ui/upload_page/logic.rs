//! Upload page UI logic

use super::messages::{MenuAction, Pane, UploadPageMsg};
use super::model::{Notice, UploadPageModel};
use crate::media::describe::describe_media;
use crate::media::extract::is_accepted;
use crate::media::{Carousel, MediaItem, SelectedFile};
use crate::upload::{MediaBackend, Submission, UploadError};
use tracing::{error, warn};

pub const SELECT_PROMPT: &str = "Завантажте фото у форматі png, jpg або відео у форматі mp4";
pub const RESULT_PLACEHOLDER: &str = "Результат відобразиться тут";

impl<B: MediaBackend> UploadPageModel<B> {
    /// Handle one message. Errors never escape: they become alerts.
    pub async fn update(&mut self, msg: UploadPageMsg) -> Option<Notice> {
        match msg {
            UploadPageMsg::FilesPicked(files) => self.pick_files(files),
            UploadPageMsg::Navigate { pane, direction } => {
                match pane {
                    Pane::Selected => self.selected.navigate(direction),
                    Pane::Results => self.session.results_mut().navigate(direction),
                }
                None
            }
            UploadPageMsg::Submit => match self.session.submit(self.selected.items()).await {
                Ok(Submission::Preview { results }) => {
                    self.status_message = format!("Отримано результатів: {results}");
                    None
                }
                Ok(Submission::Saved { path, results }) => {
                    self.status_message = format!("Отримано результатів: {results}");
                    Some(Notice::Info(format!("Архів збережено: {}", path.display())))
                }
                Err(e) => Some(self.fail("Submission failed", e)),
            },
            UploadPageMsg::DownloadArchive => match self.session.download_original().await {
                Ok(path) => Some(Notice::Info(format!("Архів збережено: {}", path.display()))),
                Err(e) => Some(self.fail("Archive download failed", e)),
            },
            UploadPageMsg::ExportResult => match self.session.export_current_result().await {
                Ok(path) => Some(Notice::Info(format!("Файл збережено: {}", path.display()))),
                Err(e) => Some(self.fail("Result export failed", e)),
            },
        }
    }

    fn pick_files(&mut self, files: Vec<SelectedFile>) -> Option<Notice> {
        if files.is_empty() {
            return None;
        }

        let (accepted, skipped): (Vec<_>, Vec<_>) =
            files.into_iter().partition(|f| is_accepted(&f.mime_type));
        for file in &skipped {
            warn!(file = %file.name, mime_type = %file.mime_type, "Skipping file with unaccepted type");
        }

        self.selected.set_items(accepted);
        self.status_message = format!("Обрано файлів: {}", self.selected.len());

        if skipped.is_empty() {
            None
        } else {
            let names: Vec<&str> = skipped.iter().map(|f| f.name.as_str()).collect();
            Some(Notice::Info(format!(
                "Пропущено (непідтримуваний формат): {}",
                names.join(", ")
            )))
        }
    }

    fn fail(&mut self, what: &str, err: UploadError) -> Notice {
        match &err {
            UploadError::Validation | UploadError::NotReady => warn!(error = %err, "{what}"),
            _ => error!(error = %err, "{what}"),
        }
        self.status_message.clear();
        Notice::Alert(err.notice().to_string())
    }

    /// Menu entries for the current state. Result controls only exist when
    /// previews are on.
    pub fn available_actions(&self) -> Vec<MenuAction> {
        let mut actions = vec![MenuAction::Pick];
        if self.selected.len() > 1 {
            actions.extend([MenuAction::PrevSelected, MenuAction::NextSelected]);
        }
        actions.push(MenuAction::Submit);
        if self.session.preview_results() {
            if self.session.results().len() > 1 {
                actions.extend([MenuAction::PrevResult, MenuAction::NextResult]);
            }
            if !self.session.results().is_empty() {
                actions.push(MenuAction::ExportResult);
            }
            actions.push(MenuAction::Download);
        }
        actions.push(MenuAction::Quit);
        actions
    }

    /// Text for the upload box.
    pub fn selected_view(&self) -> String {
        carousel_view(&self.selected).unwrap_or_else(|| SELECT_PROMPT.to_string())
    }

    /// Text for the result box, `None` when previews are off.
    pub fn result_view(&self) -> Option<String> {
        if !self.session.preview_results() {
            return None;
        }
        Some(carousel_view(self.session.results()).unwrap_or_else(|| RESULT_PLACEHOLDER.to_string()))
    }
}

fn carousel_view<T: MediaItem>(carousel: &Carousel<T>) -> Option<String> {
    let item = carousel.current()?;
    let (pos, len) = carousel.position()?;
    Some(format!("{pos} / {len}  {}", describe_media(item)))
}

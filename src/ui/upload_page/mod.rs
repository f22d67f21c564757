//! The upload page: pick files, send them, browse and download results.
//!
//! State lives in [`UploadPageModel`] and changes only through
//! [`UploadPageMsg`]; [`run`] is the interactive console loop around it.

mod logic;
mod messages;
mod model;

pub use logic::{RESULT_PLACEHOLDER, SELECT_PROMPT};
pub use messages::{MenuAction, Pane, UploadPageMsg};
pub use model::{Notice, UploadPageModel};

use crate::config::Config;
use crate::media::extract::read_selected_file;
use crate::media::SelectedFile;
use crate::upload::{HttpBackend, MediaBackend, UploadSession};
use anyhow::{Context, Result};
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Run the page until the user quits.
pub async fn run(config: &Config) -> Result<()> {
    let backend = HttpBackend::new(config).context("Failed to create HTTP client")?;
    let mut page = UploadPageModel::new(UploadSession::new(backend, config));
    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    loop {
        render(&term, &page)?;

        let actions = page.available_actions();
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::with_theme(&theme)
            .items(&labels)
            .default(0)
            .interact_on(&term)?;

        let msg = match actions[choice] {
            MenuAction::Quit => break,
            MenuAction::Pick => UploadPageMsg::FilesPicked(pick_files(&theme, &term).await?),
            action => match action.message() {
                Some(msg) => msg,
                None => continue,
            },
        };

        if matches!(msg, UploadPageMsg::Submit) && !page.selected.is_empty() {
            term.write_line(&style("Надсилання файлів...").dim().to_string())?;
        }
        if let Some(notice) = page.update(msg).await {
            show_notice(&term, &notice)?;
        }
    }
    Ok(())
}

fn render<B: MediaBackend>(term: &Term, page: &UploadPageModel<B>) -> Result<()> {
    term.write_line("")?;
    term.write_line(&style("Завантажені файли").bold().to_string())?;
    term.write_line(&format!("  {}", page.selected_view()))?;
    if let Some(result) = page.result_view() {
        term.write_line(&style("Результат").bold().to_string())?;
        term.write_line(&format!("  {result}"))?;
    }
    if !page.status_message.is_empty() {
        term.write_line(&style(&page.status_message).dim().to_string())?;
    }
    Ok(())
}

fn show_notice(term: &Term, notice: &Notice) -> Result<()> {
    match notice {
        Notice::Info(text) => term.write_line(&style(text).green().to_string())?,
        Notice::Alert(text) => {
            term.write_line(&style(text).red().bold().to_string())?;
            term.write_line(&style("Натисніть Enter, щоб продовжити").dim().to_string())?;
            term.read_line()?;
        }
    }
    Ok(())
}

async fn pick_files(theme: &ColorfulTheme, term: &Term) -> Result<Vec<SelectedFile>> {
    let line: String = Input::with_theme(theme)
        .with_prompt("Шляхи до файлів або теки (через пробіл)")
        .allow_empty(true)
        .interact_text_on(term)?;

    let paths: Vec<PathBuf> = line
        .split_whitespace()
        .map(|p| PathBuf::from(shellexpand::tilde(p).to_string()))
        .collect();
    Ok(read_paths(&paths).await)
}

/// Read every path; directories contribute their files in name order.
/// Unreadable entries are logged and left out.
pub async fn read_paths(paths: &[PathBuf]) -> Vec<SelectedFile> {
    let mut files = Vec::new();
    for path in paths {
        match expand_path(path).await {
            Ok(expanded) => {
                for file_path in expanded {
                    match read_selected_file(&file_path).await {
                        Ok(file) => files.push(file),
                        Err(e) => warn!(error = %format!("{e:#}"), "Skipping unreadable file"),
                    }
                }
            }
            Err(e) => warn!(error = %format!("{e:#}"), "Skipping path"),
        }
    }
    debug!(count = files.len(), "Read picked files");
    files
}

async fn expand_path(path: &Path) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(path)
        .await
        .with_context(|| format!("Cannot access {}", path.display()))?;
    if !meta.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut entries = fs::read_dir(path)
        .await
        .with_context(|| format!("Cannot list {}", path.display()))?;
    let mut found = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            found.push(entry.path());
        }
    }
    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Direction;
    use crate::upload::UploadError;
    use async_trait::async_trait;
    use std::io::{Cursor, Write};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    struct StubBackend {
        body: Option<Vec<u8>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MediaBackend for StubBackend {
        async fn upload(&self, _files: &[SelectedFile]) -> Result<Vec<u8>, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.body {
                Some(body) => Ok(body.clone()),
                None => Err(UploadError::Status {
                    url: "http://stub/upload_media".into(),
                    status: reqwest::StatusCode::BAD_GATEWAY,
                }),
            }
        }
    }

    fn zip_of(names: &[&str]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for name in names {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(name.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn page(body: Option<Vec<u8>>, preview: bool, dir: &Path) -> UploadPageModel<StubBackend> {
        let config = Config {
            preview_results: preview,
            download_dir: dir.display().to_string(),
            ..Config::default()
        };
        let backend = StubBackend {
            body,
            calls: AtomicUsize::new(0),
        };
        UploadPageModel::new(UploadSession::new(backend, &config))
    }

    fn png(name: &str) -> SelectedFile {
        SelectedFile::new(name, "image/png", vec![1, 2, 3])
    }

    #[tokio::test]
    async fn empty_page_shows_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let page = page(None, true, dir.path());
        assert_eq!(page.selected_view(), SELECT_PROMPT);
        assert_eq!(page.result_view().as_deref(), Some(RESULT_PLACEHOLDER));
        assert_eq!(
            page.available_actions(),
            [MenuAction::Pick, MenuAction::Submit, MenuAction::Download, MenuAction::Quit]
        );
    }

    #[tokio::test]
    async fn picking_filters_unaccepted_types() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = page(None, true, dir.path());
        let notice = page
            .update(UploadPageMsg::FilesPicked(vec![
                png("a.png"),
                SelectedFile::new("b.gif", "image/gif", vec![]),
                SelectedFile::new("c.mp4", "video/mp4", vec![]),
            ]))
            .await;

        assert_eq!(page.selected.len(), 2);
        assert!(matches!(notice, Some(Notice::Info(text)) if text.contains("b.gif")));
        assert!(page.selected_view().starts_with("1 / 2"));

        page.update(UploadPageMsg::Navigate {
            pane: Pane::Selected,
            direction: Direction::Backward,
        })
        .await;
        assert!(page.selected_view().contains("c.mp4"));
    }

    #[tokio::test]
    async fn empty_pick_keeps_previous_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = page(None, true, dir.path());
        page.update(UploadPageMsg::FilesPicked(vec![png("a.png")])).await;
        page.update(UploadPageMsg::FilesPicked(Vec::new())).await;
        assert_eq!(page.selected.len(), 1);
    }

    #[tokio::test]
    async fn submit_without_files_alerts_and_skips_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = page(Some(zip_of(&["r.png"])), true, dir.path());
        let notice = page.update(UploadPageMsg::Submit).await;
        assert_eq!(notice, Some(Notice::Alert(UploadError::Validation.notice().into())));
        assert_eq!(page.session.backend().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn submit_fills_result_pane() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = page(Some(zip_of(&["r1.png", "r2.mp4"])), true, dir.path());
        page.update(UploadPageMsg::FilesPicked(vec![png("a.png")])).await;

        assert_eq!(page.update(UploadPageMsg::Submit).await, None);
        assert!(page.result_view().unwrap().starts_with("1 / 2"));
        assert!(page.available_actions().contains(&MenuAction::NextResult));

        page.update(UploadPageMsg::Navigate {
            pane: Pane::Results,
            direction: Direction::Forward,
        })
        .await;
        assert!(page.result_view().unwrap().contains("r2.mp4"));

        let notice = page.update(UploadPageMsg::ExportResult).await;
        assert!(matches!(notice, Some(Notice::Info(_))));
        assert!(dir.path().join("r2.mp4").exists());
    }

    #[tokio::test]
    async fn backend_failure_alerts() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = page(None, true, dir.path());
        page.update(UploadPageMsg::FilesPicked(vec![png("a.png")])).await;
        let notice = page.update(UploadPageMsg::Submit).await;
        assert_eq!(
            notice,
            Some(Notice::Alert(crate::upload::error::TRANSFER_NOTICE.into()))
        );
        assert_eq!(page.result_view().as_deref(), Some(RESULT_PLACEHOLDER));
    }

    #[tokio::test]
    async fn without_previews_archive_is_saved_on_submit() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = page(Some(zip_of(&["r1.png"])), false, dir.path());
        page.update(UploadPageMsg::FilesPicked(vec![png("a.png")])).await;

        let notice = page.update(UploadPageMsg::Submit).await;
        assert!(matches!(notice, Some(Notice::Info(text)) if text.contains("processed_files.zip")));
        assert!(dir.path().join("processed_files.zip").exists());
        assert!(page.result_view().is_none());
        assert!(!page.available_actions().contains(&MenuAction::Download));
    }

    #[tokio::test]
    async fn read_paths_expands_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.mp4"), b"v").unwrap();
        std::fs::write(dir.path().join("a.png"), b"i").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let files = read_paths(&[dir.path().to_path_buf(), dir.path().join("missing.jpg")]).await;
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.mp4"]);
    }
}

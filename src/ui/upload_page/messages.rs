//! Upload page messages (events)

use crate::media::{Direction, SelectedFile};

/// The two carousels on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Selected,
    Results,
}

/// Messages for the upload page
#[derive(Debug)]
pub enum UploadPageMsg {
    /// Files were picked (already read from disk)
    FilesPicked(Vec<SelectedFile>),

    /// Arrow clicked on one of the carousels
    Navigate { pane: Pane, direction: Direction },

    /// "Завантажити файл" button
    Submit,

    /// "Скачати zip архів" button
    DownloadArchive,

    /// Save the result currently on screen
    ExportResult,
}

/// Menu entries offered by the interactive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Pick,
    PrevSelected,
    NextSelected,
    Submit,
    PrevResult,
    NextResult,
    ExportResult,
    Download,
    Quit,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pick => "Обрати файли (png, jpg, mp4)",
            Self::PrevSelected => "← Попередній файл",
            Self::NextSelected => "Наступний файл →",
            Self::Submit => "Завантажити файл",
            Self::PrevResult => "← Попередній результат",
            Self::NextResult => "Наступний результат →",
            Self::ExportResult => "Зберегти поточний результат",
            Self::Download => "Скачати zip архів",
            Self::Quit => "Вийти",
        }
    }

    /// Message this entry sends, if it maps to one directly. Picking files
    /// and quitting are handled by the loop itself.
    pub fn message(self) -> Option<UploadPageMsg> {
        let navigate = |pane, direction| Some(UploadPageMsg::Navigate { pane, direction });
        match self {
            Self::PrevSelected => navigate(Pane::Selected, Direction::Backward),
            Self::NextSelected => navigate(Pane::Selected, Direction::Forward),
            Self::PrevResult => navigate(Pane::Results, Direction::Backward),
            Self::NextResult => navigate(Pane::Results, Direction::Forward),
            Self::Submit => Some(UploadPageMsg::Submit),
            Self::ExportResult => Some(UploadPageMsg::ExportResult),
            Self::Download => Some(UploadPageMsg::DownloadArchive),
            Self::Pick | Self::Quit => None,
        }
    }
}

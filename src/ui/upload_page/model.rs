//! Upload page state model

use crate::media::{Carousel, SelectedFile};
use crate::upload::UploadSession;

/// Something to tell the user after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    /// Blocking alert; the user has to acknowledge it.
    Alert(String),
}

/// Upload page state
pub struct UploadPageModel<B> {
    /// Files picked for upload
    pub selected: Carousel<SelectedFile>,

    /// Backend session, owns the result carousel and archive
    pub session: UploadSession<B>,

    /// Last status line
    pub status_message: String,
}

impl<B> UploadPageModel<B> {
    pub fn new(session: UploadSession<B>) -> Self {
        Self {
            selected: Carousel::new(),
            session,
            status_message: String::new(),
        }
    }
}

//! Sending picked files to the processing backend and keeping what it
//! sends back.

pub mod client;
pub mod error;
pub mod session;

pub use client::{HttpBackend, MediaBackend};
pub use error::UploadError;
pub use session::{Submission, UploadSession};

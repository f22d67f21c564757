//! Client for the e-scooter detection and tracking backend.
//!
//! Pick photos and videos, send them to the processing service, then browse
//! the processed results and save the archive it returns.

pub mod config;
pub mod media;
pub mod ui;
pub mod upload;

pub use config::Config;

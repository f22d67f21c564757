//! Media files on both sides of the upload.
//!
//! Classification of picked files, the wrapping carousels that show them,
//! unpacking of the backend's result archive, terminal previews and
//! saving downloads to disk.

pub mod archive;
pub mod carousel;
pub mod describe;
pub mod extract;
pub mod schema;
pub mod storage;

pub use archive::{unpack_archive, ArchiveFormatError};
pub use carousel::{Carousel, Direction};
pub use schema::{MediaItem, MediaKind, ResultFile, ResultSummary, SelectedFile};
pub use storage::{FileStorage, StorageError};

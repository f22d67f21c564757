//! Console pages: the landing page and the upload page.

pub mod landing;
pub mod upload_page;

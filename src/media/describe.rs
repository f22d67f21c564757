use super::schema::{MediaItem, MediaKind};
use image::ImageReader;
use std::io::Cursor;

/// Shown in place of a preview for files we cannot render.
pub const UNSUPPORTED_NOTICE: &str = "Файл не підтримується";

/// Text preview of a media item for the terminal.
/// For images: name, size and pixel dimensions when the header decodes.
/// For video: name and size.
/// Anything else gets the "unsupported" notice.
pub fn describe_media(item: &impl MediaItem) -> String {
    match item.kind() {
        MediaKind::Image => match image_dimensions(item.data()) {
            Some((width, height)) => format!(
                "[Зображення: {}, {}x{}, {}]",
                item.name(),
                width,
                height,
                human_size(item.size())
            ),
            None => format!(
                "[Зображення: {}, {}]",
                item.name(),
                human_size(item.size())
            ),
        },
        MediaKind::Video => format!(
            "[Відео: {}, {}]",
            item.name(),
            human_size(item.size())
        ),
        MediaKind::Unsupported => format!("{} ({})", UNSUPPORTED_NOTICE, item.name()),
    }
}

/// Read width and height from the image header without decoding pixels.
pub fn image_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

fn human_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    let b = bytes as f64;
    if b >= MIB {
        format!("{:.1} MiB", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{} B", bytes)
    }
}

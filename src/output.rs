//! Local persistence for extracted images.

use crate::ai::mime::detect_image_mime;
use crate::extract::ImagePayload;
use crate::Result;
use std::fs;
use std::path::Path;

/// Write an extracted image to `path` in a single scoped write.
///
/// The payload's MIME type does not influence the destination path; the
/// caller picks the extension. A mismatch between the declared MIME type
/// and the sniffed magic bytes is logged, not fatal.
pub fn save_image(path: &Path, payload: &ImagePayload) -> Result<()> {
    if let Some(detected) = detect_image_mime(&payload.data) {
        if detected != payload.mime_type {
            tracing::warn!(
                "Declared MIME type {} disagrees with sniffed {} for {}",
                payload.mime_type,
                detected,
                path.display()
            );
        }
    }

    fs::write(path, &payload.data)?;
    tracing::info!("Saved image ({} bytes) to {}", payload.data.len(), path.display());

    Ok(())
}

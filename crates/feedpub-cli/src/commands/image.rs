//! Avatar image loading.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::CommandError;

/// Infer the blob MIME type from the file extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

/// Read the image bytes, separating a missing file from other I/O failures.
pub async fn read(path: &Path) -> Result<Vec<u8>, CommandError> {
    tokio::fs::read(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CommandError::ImageNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CommandError::ImageRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

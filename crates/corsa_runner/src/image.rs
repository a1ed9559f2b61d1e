//! Screenshot loading for multimodal requests.

use corsa_core::ContentBlock;
use corsa_error::{CorsaError, CorsaErrorKind, CorsaResult};
use std::path::Path;

/// Reads an image file fully into memory and returns it as a PNG content
/// block.
///
/// No size limit is enforced here; the service's own payload limit is the
/// only effective bound.
///
/// # Errors
///
/// Returns an I/O error when the file is absent or unreadable.
pub fn encode_image(path: impl AsRef<Path>) -> CorsaResult<ContentBlock> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| {
        CorsaError::new(CorsaErrorKind::Io(format!(
            "failed to read image {}: {e}",
            path.display()
        )))
    })?;
    Ok(ContentBlock::png(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use corsa_core::IMAGE_PNG;

    #[test]
    fn reads_file_into_png_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oura_morning.png");
        std::fs::write(&path, [0x89, 0x50, 0x4e, 0x47]).unwrap();

        let block = encode_image(&path).unwrap();
        match block {
            ContentBlock::Image { mime, data } => {
                assert_eq!(mime, IMAGE_PNG);
                assert_eq!(data, vec![0x89, 0x50, 0x4e, 0x47]);
            }
            other => panic!("expected image block, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_image(dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err.kind(), CorsaErrorKind::Io(_)));
    }
}

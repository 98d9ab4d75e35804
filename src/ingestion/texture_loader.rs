use std::path::Path;

use tracing::debug;

use crate::error::{Result, SceneBinderError};

/// Decoded texture metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
}

/// Load a texture file: read raw bytes and decode for width/height.
pub fn load_texture(path: &Path) -> Result<TextureData> {
    let data = std::fs::read(path).map_err(|e| {
        SceneBinderError::Texture(format!("Failed to read texture {}: {e}", path.display()))
    })?;

    let img = image::load_from_memory(&data).map_err(|e| {
        SceneBinderError::Texture(format!(
            "Failed to decode texture {}: {e}",
            path.display()
        ))
    })?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded texture"
    );

    Ok(TextureData {
        width: img.width(),
        height: img.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_ppm_texture() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("wood_floor.ppm");
        let img = image::RgbImage::from_pixel(8, 4, image::Rgb([120, 80, 40]));
        img.save(&path).unwrap();

        let tex = load_texture(&path).unwrap();
        assert_eq!(tex, TextureData { width: 8, height: 4 });
    }

    #[test]
    fn load_missing_texture() {
        let err = load_texture(Path::new("/nonexistent/hood.ppm")).unwrap_err();
        assert!(matches!(err, SceneBinderError::Texture(_)));
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn load_undecodable_texture() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = load_texture(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to decode"));
    }
}

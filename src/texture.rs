use std::path::Path;

use anyhow::{ensure, Context, Result};

/// Decoded RGBA8 image, tightly packed, ready for GPU upload
#[derive(Debug)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Decode an image file into RGBA8 pixels. Any format the `image` crate
    /// understands works; the demo ships a PNG.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to load texture image {}", path.display()))?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        Self::from_pixels(width, height, rgba.into_raw())
    }

    /// Wrap an existing pixel buffer, checking it matches the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        ensure!(
            pixels.len() == expected,
            "pixel buffer holds {} bytes, expected {} for {}x{} RGBA",
            pixels.len(),
            expected,
            width,
            height
        );

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn bytes_per_row(&self) -> u32 {
        4 * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_accepts_matching_buffer() {
        let data = TextureData::from_pixels(2, 2, vec![0u8; 16]).unwrap();

        assert_eq!(data.width, 2);
        assert_eq!(data.height, 2);
        assert_eq!(data.bytes_per_row(), 8);
    }

    #[test]
    fn from_pixels_rejects_short_buffer() {
        let result = TextureData::from_pixels(4, 4, vec![0u8; 10]);

        let message = result.unwrap_err().to_string();
        assert!(message.contains("expected 64"), "got: {message}");
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let result = TextureData::load(Path::new("no/such/texture.png"));

        let chain = format!("{:#}", result.unwrap_err());
        assert!(chain.contains("no/such/texture.png"), "got: {chain}");
    }

    #[test]
    fn load_decodes_the_shipped_sprite() {
        let data = TextureData::load(Path::new("assets/bird64.png")).unwrap();

        assert_eq!(data.width, 64);
        assert_eq!(data.height, 64);
        assert_eq!(data.pixels.len(), 64 * 64 * 4);
        assert_eq!(data.bytes_per_row(), 256);
    }

    #[test]
    fn debug_format_includes_dimensions() {
        let data = TextureData::from_pixels(1, 1, vec![0u8; 4]).unwrap();

        let printed = format!("{:?}", data);
        assert!(printed.contains("width: 1"), "got: {printed}");
        assert!(printed.contains("height: 1"), "got: {printed}");
    }
}

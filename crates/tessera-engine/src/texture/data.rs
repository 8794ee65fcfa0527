use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::AssetError;

/// GPU pixel layout a decoded image maps to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormat {
    /// One 8-bit channel (font coverage pages).
    R8,
    /// Four 8-bit channels, sRGB colour with straight alpha.
    Rgba8,
}

impl PixelFormat {
    pub fn wgpu_format(self) -> wgpu::TextureFormat {
        match self {
            PixelFormat::R8 => wgpu::TextureFormat::R8Unorm,
            PixelFormat::Rgba8 => wgpu::TextureFormat::Rgba8UnormSrgb,
        }
    }

    pub fn bytes_per_pixel(self) -> u32 {
        match self {
            PixelFormat::R8 => 1,
            PixelFormat::Rgba8 => 4,
        }
    }

    pub fn is_single_channel(self) -> bool {
        self == PixelFormat::R8
    }
}

/// Decoded pixels ready for upload.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
    /// Channel count of the file before any expansion (3 for RGB sources).
    pub source_channels: u8,
}

impl TextureData {
    /// Decodes an image file. The format is sniffed from the content first,
    /// then from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let texture_err = |message: String| AssetError::Texture {
            path: path.to_path_buf(),
            message,
        };

        let image = image::io::Reader::open(path)
            .map_err(|e| texture_err(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| texture_err(e.to_string()))?
            .decode()
            .map_err(|e| texture_err(e.to_string()))?;

        let data = Self::from_image(path, image)?;
        log::debug!(
            "decoded {} ({}x{}, {:?}, {} source channels)",
            path.display(),
            data.width,
            data.height,
            data.format,
            data.source_channels,
        );
        Ok(data)
    }

    /// Maps an already decoded image onto a [`PixelFormat`].
    ///
    /// RGB is expanded to RGBA with opaque alpha. 16-bit, float and
    /// luma-alpha images are rejected.
    pub fn from_image(path: &Path, image: DynamicImage) -> Result<Self, AssetError> {
        let (width, height) = (image.width(), image.height());

        let (format, pixels, source_channels) = match image {
            DynamicImage::ImageLuma8(buf) => (PixelFormat::R8, buf.into_raw(), 1),
            DynamicImage::ImageRgb8(buf) => {
                let rgba = DynamicImage::ImageRgb8(buf).into_rgba8();
                (PixelFormat::Rgba8, rgba.into_raw(), 3)
            }
            DynamicImage::ImageRgba8(buf) => (PixelFormat::Rgba8, buf.into_raw(), 4),
            other => {
                return Err(AssetError::UnsupportedFormat {
                    path: PathBuf::from(path),
                    format: format!("{:?}", other.color()),
                });
            }
        };

        Ok(Self { width, height, format, pixels, source_channels })
    }

    /// Bytes per row of `pixels`.
    pub fn row_bytes(&self) -> u32 {
        self.width * self.format.bytes_per_pixel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Luma, LumaA, Rgb, Rgba};
    use std::fs;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tessera-texture-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn wgpu_format_mapping() {
        assert_eq!(PixelFormat::R8.wgpu_format(), wgpu::TextureFormat::R8Unorm);
        assert_eq!(PixelFormat::Rgba8.wgpu_format(), wgpu::TextureFormat::Rgba8UnormSrgb);
        assert!(PixelFormat::R8.is_single_channel());
        assert!(!PixelFormat::Rgba8.is_single_channel());
    }

    // ── from_image ────────────────────────────────────────────────────────

    #[test]
    fn luma8_maps_to_r8() {
        let img = ImageBuffer::from_pixel(3, 2, Luma([200u8]));
        let data = TextureData::from_image(Path::new("a.png"), DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(data.format, PixelFormat::R8);
        assert_eq!(data.pixels.len(), 6);
        assert_eq!(data.row_bytes(), 3);
        assert_eq!(data.source_channels, 1);
    }

    #[test]
    fn rgb8_is_expanded_to_opaque_rgba() {
        let img = ImageBuffer::from_pixel(2, 2, Rgb([10u8, 20, 30]));
        let data = TextureData::from_image(Path::new("a.png"), DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(data.format, PixelFormat::Rgba8);
        assert_eq!(data.source_channels, 3);
        assert_eq!(data.pixels.len(), 16);
        assert_eq!(&data.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn rgba8_keeps_alpha() {
        let img = ImageBuffer::from_pixel(1, 1, Rgba([1u8, 2, 3, 4]));
        let data = TextureData::from_image(Path::new("a.png"), DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(data.format, PixelFormat::Rgba8);
        assert_eq!(data.pixels, vec![1, 2, 3, 4]);
    }

    #[test]
    fn luma_alpha_is_unsupported() {
        let img = ImageBuffer::from_pixel(1, 1, LumaA([1u8, 2]));
        let err = TextureData::from_image(Path::new("la.png"), DynamicImage::ImageLumaA8(img)).unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedFormat { .. }));
    }

    #[test]
    fn sixteen_bit_is_unsupported() {
        let img = ImageBuffer::from_pixel(1, 1, Luma([1u16]));
        let err = TextureData::from_image(Path::new("l16.png"), DynamicImage::ImageLuma16(img)).unwrap_err();
        let AssetError::UnsupportedFormat { path, format } = err else { panic!("wrong variant") };
        assert_eq!(path, PathBuf::from("l16.png"));
        assert!(format.contains("16"));
    }

    // ── load ──────────────────────────────────────────────────────────────

    #[test]
    fn missing_file_is_texture_error() {
        let path = fixture_dir("missing").join("nope.dds");
        let err = TextureData::load(&path).unwrap_err();
        let AssetError::Texture { path: p, .. } = err else { panic!("wrong variant") };
        assert_eq!(p, path);
    }

    #[test]
    fn content_wins_over_extension() {
        let path = fixture_dir("sniff").join("Cell.dds");
        ImageBuffer::from_pixel(4, 4, Rgba([255u8, 0, 0, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let data = TextureData::load(&path).unwrap();
        assert_eq!((data.width, data.height), (4, 4));
        assert_eq!(data.format, PixelFormat::Rgba8);
    }

    #[test]
    fn garbage_file_is_texture_error() {
        let path = fixture_dir("garbage").join("junk.dds");
        fs::write(&path, b"not an image at all").unwrap();
        assert!(matches!(TextureData::load(&path), Err(AssetError::Texture { .. })));
    }
}

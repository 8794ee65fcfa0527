use std::fs;
use std::path::Path;

use crate::config::EngineConfig;
use crate::error::AssetError;
use crate::font::{parse_bmfont, FontTable};
use crate::texture::TextureData;

use super::Image;

const SHADER_ENTRY_POINTS: [&str; 2] = ["vs_main", "fs_main"];

/// Every asset the engine needs, decoded on the CPU.
///
/// Loading finishes (or fails) before any window or GPU object exists.
pub(crate) struct LoadedAssets {
    /// Indexed by [`Image::index`].
    pub textures: Vec<TextureData>,
    pub shader_source: String,
    pub font: FontTable,
}

impl LoadedAssets {
    pub fn load(config: &EngineConfig) -> Result<Self, AssetError> {
        let manifest = &config.manifest;

        let textures = Image::ALL
            .iter()
            .map(|&image| TextureData::load(config.asset_path(manifest.texture(image))))
            .collect::<Result<Vec<_>, _>>()?;

        let shader_source = load_shader(&config.asset_path(&manifest.shader))?;

        let font = match &manifest.font_descriptor {
            Some(rel) => load_font(&config.asset_path(rel))?,
            None => FontTable::builtin(),
        };
        check_font_page(&font, &textures[Image::Text.index()])?;

        log::debug!(
            "assets loaded from {} ({} textures, {} glyphs)",
            config.assets_dir.display(),
            textures.len(),
            font.glyphs().len(),
        );

        Ok(Self { textures, shader_source, font })
    }

    pub fn texture(&self, image: Image) -> &TextureData {
        &self.textures[image.index()]
    }
}

/// Glyph rectangles are in page pixels, so the text image must be that page.
fn check_font_page(font: &FontTable, page: &TextureData) -> Result<(), AssetError> {
    let (w, h) = font.page_size();
    if (page.width, page.height) != (w, h) {
        return Err(AssetError::Font {
            line: 0,
            message: format!(
                "glyphs are laid out on a {w}x{h} page but the text image is {}x{}",
                page.width, page.height
            ),
        });
    }
    Ok(())
}

fn load_shader(path: &Path) -> Result<String, AssetError> {
    let shader_err = |message: String| AssetError::Shader { path: path.to_path_buf(), message };

    let source = fs::read_to_string(path).map_err(|e| shader_err(e.to_string()))?;

    for entry in SHADER_ENTRY_POINTS {
        if !source.contains(&format!("fn {entry}(")) {
            return Err(shader_err(format!("missing entry point `{entry}`")));
        }
    }

    Ok(source)
}

fn load_font(path: &Path) -> Result<FontTable, AssetError> {
    let source = fs::read_to_string(path).map_err(|e| AssetError::Font {
        line: 0,
        message: format!("{}: {e}", path.display()),
    })?;
    parse_bmfont(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::PixelFormat;
    use image::{ImageBuffer, ImageFormat, Luma, Rgb, Rgba};
    use std::path::PathBuf;

    const SHADER: &str = "@vertex fn vs_main() {}\n@fragment fn fs_main() {}\n";

    /// Writes a complete assets directory and returns its config.
    fn fixture(name: &str) -> EngineConfig {
        let dir = std::env::temp_dir().join(format!("tessera-assets-{name}-{}", std::process::id()));
        fs::create_dir_all(dir.join("textures")).unwrap();
        fs::create_dir_all(dir.join("shaders")).unwrap();

        let cfg = EngineConfig::new(&dir);
        let m = &cfg.manifest;

        ImageBuffer::from_pixel(8, 8, Rgba([255u8, 255, 255, 255]))
            .save_with_format(cfg.asset_path(m.texture(Image::Background)), ImageFormat::Png)
            .unwrap();
        ImageBuffer::from_pixel(64, 8, Rgb([0u8, 128, 255]))
            .save_with_format(cfg.asset_path(m.texture(Image::Diamonds)), ImageFormat::Png)
            .unwrap();
        let (pw, ph) = FontTable::builtin().page_size();
        write_text_page(&cfg, pw, ph);
        fs::write(cfg.asset_path(&m.shader), SHADER).unwrap();

        cfg
    }

    fn write_text_page(cfg: &EngineConfig, width: u32, height: u32) {
        ImageBuffer::from_pixel(width, height, Luma([255u8]))
            .save_with_format(cfg.asset_path(cfg.manifest.texture(Image::Text)), ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn loads_a_complete_directory() {
        let cfg = fixture("complete");
        let assets = LoadedAssets::load(&cfg).unwrap();

        assert_eq!(assets.textures.len(), Image::COUNT);
        assert_eq!(assets.texture(Image::Diamonds).format, PixelFormat::Rgba8);
        assert_eq!(assets.texture(Image::Diamonds).source_channels, 3);
        assert_eq!(assets.texture(Image::Text).format, PixelFormat::R8);
        assert_eq!(assets.shader_source, SHADER);
        assert_eq!(assets.font.glyphs().len(), 95);
    }

    #[test]
    fn missing_texture_is_reported_by_path() {
        let cfg = fixture("missing-texture");
        let diamonds = cfg.asset_path(cfg.manifest.texture(Image::Diamonds));
        fs::remove_file(&diamonds).unwrap();

        let Err(AssetError::Texture { path, .. }) = LoadedAssets::load(&cfg) else {
            panic!("expected texture error");
        };
        assert_eq!(path, diamonds);
    }

    #[test]
    fn missing_shader_is_shader_error() {
        let mut cfg = fixture("missing-shader");
        cfg.manifest.shader = PathBuf::from("shaders/nope.wgsl");
        assert!(matches!(LoadedAssets::load(&cfg), Err(AssetError::Shader { .. })));
    }

    #[test]
    fn shader_without_fragment_entry_is_rejected() {
        let cfg = fixture("bad-shader");
        fs::write(cfg.asset_path(&cfg.manifest.shader), "@vertex fn vs_main() {}\n").unwrap();

        let Err(AssetError::Shader { message, .. }) = LoadedAssets::load(&cfg) else {
            panic!("expected shader error");
        };
        assert!(message.contains("fs_main"));
    }

    #[test]
    fn font_descriptor_replaces_builtin_metrics() {
        let mut cfg = fixture("font");
        fs::write(
            cfg.assets_dir.join("font.fnt"),
            "common lineHeight=16 base=12 scaleW=16 scaleH=16\n\
             char id=95 x=0 y=14 width=8 height=2 xoffset=0 yoffset=12 xadvance=8\n\
             char id=65 x=8 y=0 width=8 height=12 xoffset=0 yoffset=0 xadvance=9\n",
        )
        .unwrap();
        cfg.manifest.font_descriptor = Some(PathBuf::from("font.fnt"));
        write_text_page(&cfg, 16, 16);

        let assets = LoadedAssets::load(&cfg).unwrap();
        assert_eq!(assets.font.glyphs().len(), 2);
        assert_eq!(assets.font.find_glyph('A').advance, 9);
        assert_eq!(assets.font.page_size(), (16, 16));
    }

    #[test]
    fn text_image_must_match_the_glyph_page() {
        let cfg = fixture("page-mismatch");
        write_text_page(&cfg, 256, 512);

        let Err(AssetError::Font { line: 0, message }) = LoadedAssets::load(&cfg) else {
            panic!("expected font page error");
        };
        assert!(message.contains("512x512"));
        assert!(message.contains("256x512"));
    }

    #[test]
    fn descriptor_page_is_checked_against_the_text_image() {
        let mut cfg = fixture("descriptor-page");
        fs::write(
            cfg.assets_dir.join("font.fnt"),
            "common lineHeight=16 scaleW=32 scaleH=32\n\
             char id=95 x=0 y=14 width=8 height=2 xoffset=0 yoffset=12 xadvance=8\n",
        )
        .unwrap();
        cfg.manifest.font_descriptor = Some(PathBuf::from("font.fnt"));

        assert!(matches!(LoadedAssets::load(&cfg), Err(AssetError::Font { line: 0, .. })));
    }

    #[test]
    fn missing_font_descriptor_is_font_error() {
        let mut cfg = fixture("missing-font");
        cfg.manifest.font_descriptor = Some(PathBuf::from("absent.fnt"));
        assert!(matches!(LoadedAssets::load(&cfg), Err(AssetError::Font { line: 0, .. })));
    }
}

//! Engine configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use winit::dpi::LogicalSize;

use crate::coords::{ColorRgba, Viewport};
use crate::device::GpuInit;
use crate::engine::Image;
use crate::time::MAX_FRAME_TIME;
use crate::window::RuntimeConfig;

/// Asset file names, relative to the assets directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetManifest {
    /// One texture per [`Image`], indexed by [`Image::index`].
    pub textures: [PathBuf; Image::COUNT],
    /// WGSL module exposing `vs_main` and `fs_main`.
    pub shader: PathBuf,
    /// BMFont text descriptor for the text page. `None` uses the built-in metrics.
    pub font_descriptor: Option<PathBuf>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            textures: [
                PathBuf::from("textures/Cell.dds"),
                PathBuf::from("textures/Diamonds.dds"),
                PathBuf::from("textures/berlin_sans_demi_72_0.dds"),
            ],
            shader: PathBuf::from("shaders/sprite.wgsl"),
            font_descriptor: None,
        }
    }
}

impl AssetManifest {
    pub fn texture(&self, image: Image) -> &Path {
        &self.textures[image.index()]
    }
}

/// Everything `Engine::new` needs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub assets_dir: PathBuf,
    pub title: String,
    /// Window size in logical pixels. The window is not resizable.
    pub width: u32,
    pub height: u32,
    /// Ceiling for one frame's delta time.
    pub max_frame_time: Duration,
    pub clear_color: ColorRgba,
    pub manifest: AssetManifest,
    pub gpu: GpuInit,
}

impl EngineConfig {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            title: "tessera".to_string(),
            width: 800,
            height: 600,
            max_frame_time: MAX_FRAME_TIME,
            clear_color: ColorRgba::grey(0.35),
            manifest: AssetManifest::default(),
            gpu: GpuInit::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Resolves a manifest path against the assets directory.
    pub fn asset_path(&self, relative: &Path) -> PathBuf {
        self.assets_dir.join(relative)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    pub(crate) fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(f64::from(self.width), f64::from(self.height)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_game_window() {
        let cfg = EngineConfig::new("assets");
        assert_eq!((cfg.width, cfg.height), (800, 600));
        assert_eq!(cfg.max_frame_time, Duration::from_millis(300));
        assert_eq!(cfg.clear_color, ColorRgba::grey(0.35));
        assert_eq!(cfg.gpu.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(cfg.viewport().center(), (400.0, 300.0));
    }

    #[test]
    fn manifest_paths_resolve_under_assets_dir() {
        let cfg = EngineConfig::new("/data/game");
        let path = cfg.asset_path(cfg.manifest.texture(Image::Text));
        assert_eq!(path, PathBuf::from("/data/game/textures/berlin_sans_demi_72_0.dds"));
        assert_eq!(
            cfg.asset_path(&cfg.manifest.shader),
            PathBuf::from("/data/game/shaders/sprite.wgsl")
        );
    }

    #[test]
    fn runtime_config_carries_title_and_size() {
        let rc = EngineConfig::new("a").with_title("grid").runtime_config();
        assert_eq!(rc.title, "grid");
        assert_eq!(rc.initial_size, LogicalSize::new(800.0, 600.0));
    }
}

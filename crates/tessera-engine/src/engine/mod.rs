//! The engine: window, GPU context, sprite batches and the frame loop.
//!
//! Game code drives it through an [`Updater`] invoked once per frame. Inside
//! the updater, [`Engine::render`] and [`Engine::write`] draw immediately into
//! the current frame; input and timing are polled through accessors.

mod assets;
mod frame_loop;
mod slots;
mod text;

use std::sync::Arc;
use std::time::Instant;

use wgpu::util::StagingBelt;
use winit::window::Window;

use crate::config::EngineConfig;
use crate::coords::{ColorRgba, Transform2, Vec2, Viewport};
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::error::EngineError;
use crate::font::FontTable;
use crate::input::{InputEvent, InputState};
use crate::sprite::{
    SpriteBatch, SpriteHandle, SpritePipeline, UvRect, MAX_INSTANCES, MAX_TEMPLATES, STAGING_CHUNK_SIZE,
};
use crate::texture::SpriteTexture;
use crate::time::FrameClock;
use crate::window::Platform;

use self::assets::LoadedAssets;
use self::frame_loop::{FrameState, FrameStatus, LoopHost};

pub use self::slots::{Image, Sprite, DIAMOND_FRAMES};
pub use self::text::TEXT_SCALE;

/// Text glyph instances available to one `write` call.
pub const TEXT_POOL: usize = MAX_INSTANCES;

/// Game logic callback, invoked once per frame.
pub trait Updater {
    fn update(&mut self, engine: &mut Engine);
}

impl<F> Updater for F
where
    F: FnMut(&mut Engine),
{
    fn update(&mut self, engine: &mut Engine) {
        self(engine)
    }
}

/// Window, GPU context and sprite batches for one game.
///
/// Fields drop in declaration order: frame and sprites first, then the GPU
/// context, then the window and its event loop.
pub struct Engine {
    frame: Option<GpuFrame>,
    state: FrameState,

    sprites: Vec<SpriteHandle>,
    sprite_sizes: Vec<Vec2>,
    text_pool: Vec<SpriteHandle>,
    batches: Vec<SpriteBatch>,
    belt: StagingBelt,
    _textures: Vec<SpriteTexture>,
    pipeline: SpritePipeline,
    font: FontTable,

    gpu: Gpu,
    window: Arc<Window>,
    platform: Platform,

    viewport: Viewport,
    clear_color: ColorRgba,
}

impl Engine {
    /// Loads every asset, then opens the (hidden) window and builds the batches.
    ///
    /// Asset failures are reported before any window or GPU object exists.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let assets = LoadedAssets::load(&config)?;
        let viewport = config.viewport();

        let (platform, window) = Platform::new(config.runtime_config()).map_err(platform_error)?;
        let gpu = pollster::block_on(Gpu::new(Arc::clone(&window), &config.gpu))?;

        let pipeline = SpritePipeline::new(gpu.device(), gpu.surface_format(), &assets.shader_source);

        let mut textures = Vec::with_capacity(Image::COUNT);
        let mut batches = Vec::with_capacity(Image::COUNT);
        for image in Image::ALL {
            let data = assets.texture(image);
            let texture = SpriteTexture::create(gpu.device(), gpu.queue(), data, image.name());

            let reserved = Sprite::ALL.iter().filter(|s| s.image() == image).count();
            let capacity = if image == Image::Text { TEXT_POOL + reserved } else { MAX_INSTANCES };

            let mut batch = SpriteBatch::new(image.name(), texture.size(), MAX_TEMPLATES, capacity);
            batch.init(gpu.device(), &pipeline, &texture, viewport);

            textures.push(texture);
            batches.push(batch);
        }

        let font = assets.font;

        let mut sprites = Vec::with_capacity(Sprite::COUNT);
        let mut sprite_sizes = Vec::with_capacity(Sprite::COUNT);
        for sprite in Sprite::ALL {
            let batch = &mut batches[sprite.image().index()];
            let template = batch.create_template(sprite.uv(&font))?;
            let handle = batch.add_instance(template)?;
            sprite_sizes.push(handle.borrow().size);
            sprites.push(handle);
        }

        let text_batch = &mut batches[Image::Text.index()];
        let page = text_batch.create_template(UvRect::full())?;
        let text_pool = (0..TEXT_POOL)
            .map(|_| text_batch.add_instance(page))
            .collect::<Result<Vec<_>, _>>()?;

        let belt = StagingBelt::new(gpu.device().clone(), STAGING_CHUNK_SIZE);

        let state = FrameState::new(
            InputState::centered(viewport.width, viewport.height),
            FrameClock::starting_at(Instant::now(), config.max_frame_time),
        );

        log::info!(
            "engine ready: {} images, {} sprites, {} text instances",
            Image::COUNT,
            Sprite::COUNT,
            text_pool.len(),
        );

        Ok(Self {
            frame: None,
            state,
            sprites,
            sprite_sizes,
            text_pool,
            batches,
            belt,
            _textures: textures,
            pipeline,
            font,
            gpu,
            window,
            platform,
            viewport,
            clear_color: config.clear_color,
        })
    }

    /// Shows the window and runs the frame loop until [`quit`](Self::quit)
    /// is called or the window is closed. Once stopped, the loop does not run
    /// again.
    pub fn start<U: Updater + ?Sized>(&mut self, updater: &mut U) {
        self.window.set_visible(true);
        log::info!("frame loop started");

        let mut update = |engine: &mut Engine| updater.update(engine);
        let frames = frame_loop::run(self, Some(&mut update));

        // Release any frame left over from a fatal stop.
        self.frame = None;
        log::info!("frame loop stopped after {frames} frames");
    }

    /// Requests the loop to stop after the current iteration.
    pub fn quit(&mut self) {
        self.state.request_quit();
    }

    /// Draws `sprite` with its top-left corner at `(x, y)`, rotated about that
    /// corner by `rotation` radians.
    pub fn render(&mut self, sprite: Sprite, x: f32, y: f32, rotation: f32) {
        self.render_transform(sprite, &Transform2::translation(x, y).rotated(rotation));
    }

    /// Draws `sprite` at its native size under `transform`.
    pub fn render_transform(&mut self, sprite: Sprite, transform: &Transform2) {
        let idx = sprite.index();
        {
            let mut inst = self.sprites[idx].borrow_mut();
            inst.apply_transform(transform, self.sprite_sizes[idx]);
            inst.visible = true;
        }

        self.draw_batch(sprite.image());
        self.sprites[idx].borrow_mut().visible = false;
    }

    /// Draws `text` starting at `(x, y)`.
    ///
    /// With a non-zero `rotation` the string is centred horizontally on
    /// `(x, y)` and rotated about it.
    pub fn write(&mut self, text: &str, x: f32, y: f32, rotation: f32) {
        let transform = text_origin(&self.font, text, x, y, rotation);
        self.write_transform(text, &transform);
    }

    pub fn write_transform(&mut self, text: &str, transform: &Transform2) {
        let layout = text::layout_text(&self.font, text, transform, &self.text_pool);
        if layout.dropped > 0 {
            log::debug!("text pool exhausted; {} glyphs of {text:?} dropped", layout.dropped);
        }

        if layout.used > 0 {
            self.draw_batch(Image::Text);
        }
        text::hide(&self.text_pool, layout);
    }

    /// Width of `text` in logical pixels at [`TEXT_SCALE`].
    pub fn string_width(&self, text: &str) -> f32 {
        self.font.string_width(text, TEXT_SCALE)
    }

    pub fn mouse_x(&self) -> f32 {
        self.state.input.mouse_x
    }

    pub fn mouse_y(&self) -> f32 {
        self.state.input.mouse_y
    }

    pub fn mouse_button_down(&self) -> bool {
        self.state.input.mouse_button_down
    }

    /// Clamped duration of the last frame, in seconds.
    pub fn last_frame_seconds(&self) -> f32 {
        self.state.clock.last_frame_seconds()
    }

    pub fn frame_index(&self) -> u64 {
        self.state.clock.frame_index()
    }

    pub fn window_width(&self) -> u32 {
        self.viewport.width as u32
    }

    pub fn window_height(&self) -> u32 {
        self.viewport.height as u32
    }

    pub fn font(&self) -> &FontTable {
        &self.font
    }

    /// Flushes one batch and records its draw into the current frame.
    /// Outside a frame this does nothing.
    fn draw_batch(&mut self, image: Image) {
        let Some(frame) = self.frame.as_mut() else { return };
        let batch = &mut self.batches[image.index()];
        batch.flush_buffers(&mut self.belt, &mut frame.encoder);
        batch.draw(&self.pipeline, &mut frame.encoder, &frame.view);
    }
}

impl LoopHost for Engine {
    fn frame_state(&mut self) -> &mut FrameState {
        &mut self.state
    }

    fn begin_frame(&mut self) -> FrameStatus {
        match self.gpu.begin_frame(self.clear_color) {
            Ok(frame) => {
                self.frame = Some(frame);
                FrameStatus::Ready
            }
            Err(err) => match self.gpu.handle_surface_error(&err) {
                SurfaceErrorAction::Reconfigured => FrameStatus::Skip,
                SurfaceErrorAction::SkipFrame => {
                    log::warn!("skipping frame: {err}");
                    FrameStatus::Skip
                }
                SurfaceErrorAction::Fatal => {
                    log::error!("fatal surface error: {err}; stopping");
                    FrameStatus::Stop
                }
            },
        }
    }

    fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
        self.platform.pump(out);
    }

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn end_frame(&mut self) {
        if let Some(frame) = self.frame.take() {
            self.belt.finish();
            self.gpu.present(frame);
            self.belt.recall();
        }
    }
}

/// Pen transform used by [`Engine::write`].
fn text_origin(font: &FontTable, text: &str, x: f32, y: f32, rotation: f32) -> Transform2 {
    let transform = Transform2::translation(x, y);
    if rotation == 0.0 {
        return transform;
    }
    transform
        .rotated(rotation)
        .translated(-font.string_width(text, TEXT_SCALE) / 2.0, -20.0)
}

fn platform_error(e: anyhow::Error) -> EngineError {
    if e.downcast_ref::<winit::error::EventLoopError>().is_some() {
        EngineError::EventLoop(format!("{e:#}"))
    } else {
        EngineError::Context(format!("{e:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f32::consts::PI;

    fn text_pool(n: usize) -> (SpriteBatch, Vec<SpriteHandle>) {
        let mut batch = SpriteBatch::new("text", FontTable::builtin().page_size(), 1, n);
        let page = batch.create_template(UvRect::full()).unwrap();
        let pool = (0..n).map(|_| batch.add_instance(page).unwrap()).collect();
        (batch, pool)
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── write ─────────────────────────────────────────────────────────────

    #[test]
    fn unrotated_text_starts_at_the_pen() {
        let font = FontTable::builtin();
        let (_batch, pool) = text_pool(4);
        let origin = text_origin(&font, "Hi", 30.0, 40.0, 0.0);
        text::layout_text(&font, "Hi", &origin, &pool);

        let h = font.find_glyph('H');
        let expected = Vec2::new(
            30.0 + f32::from(h.xoffset) * TEXT_SCALE,
            40.0 + f32::from(h.yoffset) * TEXT_SCALE,
        );
        assert!(close(pool[0].borrow().position, expected));
    }

    #[test]
    fn rotated_text_is_centred_on_the_pen() {
        let font = FontTable::builtin();
        let (_batch, pool) = text_pool(4);
        let text = "Hi";
        let width = font.string_width(text, TEXT_SCALE);

        // A half turn maps the (-width/2, -20) shift to (+width/2, +20).
        let origin = text_origin(&font, text, 100.0, 100.0, PI);
        assert!(close(origin.origin(), Vec2::new(100.0 + width / 2.0, 120.0)));
        assert!((origin.angle().abs() - PI).abs() < 1e-5);

        text::layout_text(&font, text, &origin, &pool);
        let h = font.find_glyph('H');
        let expected = Vec2::new(
            100.0 + width / 2.0 - f32::from(h.xoffset) * TEXT_SCALE,
            120.0 - f32::from(h.yoffset) * TEXT_SCALE,
        );
        let first = pool[0].borrow();
        assert!(close(first.position, expected), "{:?} != {expected:?}", first.position);
        assert!((first.rotation.abs() - PI).abs() < 1e-5);
    }

    #[test]
    fn event_loop_errors_are_classified() {
        let e = anyhow::Error::new(winit::error::EventLoopError::RecreationAttempt).context("failed to create winit EventLoop");
        assert!(matches!(platform_error(e), EngineError::EventLoop(_)));

        let e = anyhow::anyhow!("failed to create window");
        assert!(matches!(platform_error(e), EngineError::Context(_)));
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::{Engine, EngineConfig, Sprite, Updater};

/// Spins a cell in the middle of the window and follows the mouse with a
/// caption; holding the button swaps in a red diamond.
struct Demo {
    angle: f32,
}

impl Updater for Demo {
    fn update(&mut self, engine: &mut Engine) {
        self.angle += engine.last_frame_seconds();

        let cx = engine.window_width() as f32 * 0.5;
        let cy = engine.window_height() as f32 * 0.5;
        engine.render(Sprite::Cell, cx, cy, self.angle);

        let (mx, my) = (engine.mouse_x(), engine.mouse_y());
        if engine.mouse_button_down() {
            engine.render(Sprite::Red, mx, my, 0.0);
        }

        let caption = format!("{mx:.0}, {my:.0}");
        engine.write(&caption, mx, my + 24.0, 0.0);
        engine.write("tessera", cx, 40.0, self.angle.sin() * 0.2);
    }
}

fn assets_dir() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("TESSERA_ASSETS").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("assets"))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let dir = assets_dir();
    log::info!("using assets from {}", dir.display());

    let config = EngineConfig::new(&dir).with_title("tessera demo");
    let mut engine = Engine::new(config)
        .with_context(|| format!("failed to start engine with assets in {}", dir.display()))?;

    engine.start(&mut Demo { angle: 0.0 });
    Ok(())
}

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::input::platform::translate_window_event;
use crate::input::InputEvent;

/// Pumps allowed before giving up on the platform delivering `resumed`.
const STARTUP_PUMPS: usize = 64;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tessera".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// The event loop plus the one window it drives.
///
/// The window is created hidden and non-resizable; the engine shows it when
/// its loop starts.
pub struct Platform {
    event_loop: EventLoop<()>,
    handler: PlatformHandler,
}

struct PlatformHandler {
    config: RuntimeConfig,
    window: Option<Arc<Window>>,
    events: Vec<InputEvent>,
    error: Option<anyhow::Error>,
}

impl Platform {
    /// Creates the event loop and pumps it until the window exists.
    pub fn new(config: RuntimeConfig) -> Result<(Self, Arc<Window>)> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let mut platform = Self {
            event_loop,
            handler: PlatformHandler {
                config,
                window: None,
                events: Vec::new(),
                error: None,
            },
        };

        for _ in 0..STARTUP_PUMPS {
            let status = platform
                .event_loop
                .pump_app_events(Some(Duration::ZERO), &mut platform.handler);

            if let Some(err) = platform.handler.error.take() {
                return Err(err);
            }
            if let Some(window) = platform.handler.window.clone() {
                // Anything delivered before the loop starts is stale.
                platform.handler.events.clear();
                return Ok((platform, window));
            }
            if let PumpStatus::Exit(code) = status {
                anyhow::bail!("event loop exited with code {code} before the window was created");
            }
        }

        anyhow::bail!("platform never resumed; window was not created")
    }

    /// Drains all pending OS events into `out` without blocking.
    ///
    /// An event loop exit is reported as [`InputEvent::QuitRequested`].
    pub fn pump(&mut self, out: &mut Vec<InputEvent>) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);

        out.append(&mut self.handler.events);

        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with code {code}");
            out.push(InputEvent::QuitRequested);
        }
    }
}

impl PlatformHandler {
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(false)
            .with_visible(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(Arc::new(window))
    }
}

impl ApplicationHandler for PlatformHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(window) => {
                log::info!(
                    "window created: {:?} {}x{}",
                    self.config.title,
                    self.config.initial_size.width,
                    self.config.initial_size.height,
                );
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("{e:#}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let scale_factor = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
        if let Some(ev) = translate_window_event(scale_factor, &event) {
            self.events.push(ev);
        }
    }
}

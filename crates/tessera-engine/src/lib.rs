//! Tessera engine crate.
//!
//! A small 2D sprite engine: one fixed-size window, textures decoded from an
//! assets directory, instanced sprite batches, bitmap-font text and a polled
//! frame loop driving a game [`Updater`].

pub mod config;
pub mod coords;
pub mod device;
pub mod engine;
pub mod error;
pub mod font;
pub mod input;
pub mod logging;
pub mod sprite;
pub mod texture;
pub mod time;
pub mod window;

pub use config::{AssetManifest, EngineConfig};
pub use engine::{Engine, Image, Sprite, Updater, TEXT_SCALE};
pub use error::{AssetError, EngineError};

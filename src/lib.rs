#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod sketchpad;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use command::{Command, CommandHistory, CommandId};
pub use config::SketchConfig;
pub use element::{Glyph, Sticker, Stroke};
pub use error::{ConfigError, ExportError};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use input::{InputEvent, InputHandler};
pub use renderer::RenderLoop;
pub use sketchpad::Sketchpad;
pub use state::{PointerState, SketchState};
pub use surface::{DisplayList, DrawOp, Surface};

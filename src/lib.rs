//! WebGL 2 lessons compiled to WebAssembly: an "F" moved, rotated and scaled with 3x3
//! matrices from slider input, and a 3D shape spinning every frame.
//!
//! Each lesson is started from JavaScript with an optional JSON configuration, for example
//! `start_matrix_2d('{"canvas_id": "canvas", "log_level": "debug"}')`.

#![deny(bare_trait_objects)]

mod animation;
mod config;
mod context;
mod error;
pub mod geometry;
pub mod lessons;
mod logging;
mod m3;
mod mesh;
mod program;
mod rect;
mod surface;
mod transform;
mod ui;
pub mod uniforms;

pub use crate::animation::*;
pub use crate::config::*;
pub use crate::context::*;
pub use crate::error::*;
pub use crate::m3::*;
pub use crate::mesh::*;
pub use crate::program::*;
pub use crate::rect::*;
pub use crate::surface::*;
pub use crate::transform::*;
pub use crate::ui::*;
pub use uniforms::{GlUniforms, Uniforms};

use wasm_bindgen::prelude::*;

/// The "F", moved by adding a translation uniform.
#[wasm_bindgen]
pub fn start_translation(config: Option<String>) -> Result<(), JsValue> {
    lessons::translation::start(&LessonConfig::from_optional_json(config)?)?;
    Ok(())
}

/// The "F" drawn five times through an accumulating translation * rotation * scale matrix.
#[wasm_bindgen]
pub fn start_matrix_2d(config: Option<String>) -> Result<(), JsValue> {
    lessons::matrix_2d::start(&LessonConfig::from_optional_json(config)?)?;
    Ok(())
}

/// Two "F"s with their own transforms; `#modeSelector` picks the one the sliders edit.
#[wasm_bindgen]
pub fn start_two_fs(config: Option<String>) -> Result<(), JsValue> {
    lessons::two_fs::start(&LessonConfig::from_optional_json(config)?)?;
    Ok(())
}

/// A triangle (or cube) with random vertex colours rotating about Z.
#[wasm_bindgen]
pub fn start_rotating_shape(config: Option<String>) -> Result<(), JsValue> {
    lessons::rotating_shape::start(&LessonConfig::from_optional_json(config)?)?;
    Ok(())
}

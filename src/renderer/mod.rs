//! wgpu rendering module
//!
//! Frames are composed into a [`DrawList`] of textured quads, then drawn by
//! a single sprite pipeline.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use frame::{DrawList, Fonts, TextureSlot, compose, compose_winner};
pub use pipeline::{RenderState, SpriteSet};
pub use text::PixelFont;

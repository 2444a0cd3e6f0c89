//! Spaceship Duel - a two-player local arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (movement, projectiles, hits, winner)
//! - `renderer`: wgpu rendering of sprites, barrier and bitmap text
//! - `platform`: Window, keyboard and frame pacing
//! - `assets`: Sprite and sound loading
//! - `audio`: Sound effect playback
//! - `config`: Rule constants and key bindings
//! - `app`: The game driver tying the pieces together

pub mod app;
pub mod assets;
pub mod audio;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use sim::{Side, Simulation};

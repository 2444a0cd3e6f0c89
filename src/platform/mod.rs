//! Platform abstraction layer
//!
//! Handles the native side of the game loop:
//! - Window creation and event pumping
//! - Keyboard state and queued intents
//! - Frame pacing

pub mod clock;
pub mod input;
pub mod window;

pub use clock::FrameClock;
pub use input::InputState;
pub use window::Platform;

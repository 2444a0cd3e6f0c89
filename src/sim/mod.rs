//! Round simulation
//!
//! All gameplay rules live here. This module is pure and deterministic:
//! - Fixed tick, integer arena units
//! - Intents applied in queue order
//! - No rendering, audio or platform dependencies

pub mod movement;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use movement::{ShipInput, move_ship};
pub use projectile::{Advance, advance_projectiles, spawn_projectile};
pub use rect::Rect;
pub use state::{Projectile, RoundState, Ship, Side};
pub use tick::{GameEvent, Intent, Simulation, TickInput, TickReport};

//! Game configuration
//!
//! Every rule constant lives in one immutable [`GameConfig`] handed to the
//! simulation and the driver at construction. Tests build their own configs
//! with small arenas and slow speeds.

use std::time::Duration;

use glam::IVec2;
use winit::keyboard::KeyCode;

use crate::sim::{Rect, Side};

/// Arena geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    pub width: i32,
    pub height: i32,
    /// Width of the central barrier
    pub border: i32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 500,
            border: 6,
        }
    }
}

impl ArenaConfig {
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

/// Ship size, speed and spawn points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipConfig {
    pub size: IVec2,
    /// Units moved per tick per held direction
    pub speed: i32,
    pub starting_health: u32,
    pub red_spawn: IVec2,
    pub yellow_spawn: IVec2,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            size: IVec2::new(55, 55),
            speed: 5,
            starting_health: 10,
            red_spawn: IVec2::new(100, 300),
            yellow_spawn: IVec2::new(745, 300),
        }
    }
}

/// Projectile size, speed and per-side cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileConfig {
    pub size: IVec2,
    /// Units moved per tick (sign comes from the owner)
    pub speed: i32,
    pub max_live: usize,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            size: IVec2::new(12, 6),
            speed: 7,
            max_live: 3,
        }
    }
}

/// Tick rate and the winner-screen hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    pub tick_rate: u32,
    pub winner_delay: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            winner_delay: Duration::from_secs(5),
        }
    }
}

impl TimingConfig {
    /// Target duration of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

/// RGBA colors for solid shapes and text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text: [f32; 4],
    pub barrier: [f32; 4],
    pub red_projectile: [f32; 4],
    pub yellow_projectile: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: [1.0, 1.0, 1.0, 1.0],
            barrier: [0.0, 0.0, 0.0, 1.0],
            red_projectile: [1.0, 0.0, 0.0, 1.0],
            yellow_projectile: [1.0, 1.0, 0.0, 1.0],
        }
    }
}

impl Palette {
    pub fn projectile(&self, side: Side) -> [f32; 4] {
        match side {
            Side::Red => self.red_projectile,
            Side::Yellow => self.yellow_projectile,
        }
    }
}

/// Key bindings for one ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipControls {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub fire: KeyCode,
}

/// Key bindings for both ships
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub red: ShipControls,
    pub yellow: ShipControls,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            red: ShipControls {
                left: KeyCode::KeyA,
                right: KeyCode::KeyD,
                up: KeyCode::KeyW,
                down: KeyCode::KeyS,
                fire: KeyCode::ControlLeft,
            },
            yellow: ShipControls {
                left: KeyCode::ArrowLeft,
                right: KeyCode::ArrowRight,
                up: KeyCode::ArrowUp,
                down: KeyCode::ArrowDown,
                fire: KeyCode::ControlRight,
            },
        }
    }
}

impl Controls {
    pub fn for_side(&self, side: Side) -> &ShipControls {
        match side {
            Side::Red => &self.red,
            Side::Yellow => &self.yellow,
        }
    }
}

/// Movement limits for one ship. Every check is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

/// Complete, immutable game configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameConfig {
    pub title: &'static str,
    pub arena: ArenaConfig,
    pub ship: ShipConfig,
    pub projectile: ProjectileConfig,
    pub timing: TimingConfig,
    pub palette: Palette,
    pub controls: Controls,
}

impl GameConfig {
    /// Default rules with the window caption filled in
    pub fn standard() -> Self {
        Self {
            title: "Spaceship Battle!",
            ..Default::default()
        }
    }

    /// The central divider. Its x is `(width - border / 2) / 2`.
    pub fn barrier(&self) -> Rect {
        let a = &self.arena;
        Rect::new((a.width - a.border / 2) / 2, 0, a.border, a.height)
    }

    /// Movement limits of the ship on `side`
    pub fn bounds(&self, side: Side) -> Bounds {
        let barrier = self.barrier();
        let (min_x, max_x) = match side {
            Side::Red => (0, barrier.left()),
            Side::Yellow => (barrier.right(), self.arena.width),
        };
        Bounds {
            min_x,
            max_x,
            min_y: 0,
            max_y: self.arena.height,
        }
    }

    /// Top-left corner a ship starts each round at
    pub fn spawn(&self, side: Side) -> IVec2 {
        match side {
            Side::Red => self.ship.red_spawn,
            Side::Yellow => self.ship.yellow_spawn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barrier_position() {
        let config = GameConfig::standard();
        let barrier = config.barrier();
        assert_eq!(barrier, Rect::new(448, 0, 6, 500));
    }

    #[test]
    fn test_bounds_split_at_barrier() {
        let config = GameConfig::standard();
        let red = config.bounds(Side::Red);
        let yellow = config.bounds(Side::Yellow);

        assert_eq!((red.min_x, red.max_x), (0, 448));
        assert_eq!((yellow.min_x, yellow.max_x), (454, 900));
        assert_eq!((red.min_y, red.max_y), (0, 500));
        assert_eq!((yellow.min_y, yellow.max_y), (0, 500));
    }

    #[test]
    fn test_tick_duration() {
        let timing = TimingConfig::default();
        assert_eq!(timing.tick_duration(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_spawns_inside_own_half() {
        let config = GameConfig::standard();
        for side in Side::ALL {
            let spawn = config.spawn(side);
            let bounds = config.bounds(side);
            assert!(spawn.x > bounds.min_x);
            assert!(spawn.x + config.ship.size.x < bounds.max_x);
        }
    }
}

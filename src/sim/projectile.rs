//! Projectile spawning and the per-tick advance pass

use glam::IVec2;

use super::rect::Rect;
use super::state::{Projectile, Side};
use crate::config::ProjectileConfig;

/// Build a projectile leaving `ship`'s nose, vertically centred on it.
///
/// Red fires from its right edge, yellow from its left edge.
pub fn spawn_projectile(owner: Side, ship: &Rect, config: &ProjectileConfig) -> Projectile {
    let x = match owner {
        Side::Red => ship.right(),
        Side::Yellow => ship.left(),
    };
    let y = ship.top() + ship.size.y / 2 - config.size.y / 2;
    Projectile {
        owner,
        rect: Rect::new(x, y, config.size.x, config.size.y),
        velocity: owner.heading() * config.speed,
    }
}

/// Result of advancing one side's projectiles by a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advance {
    /// Projectiles still in flight, in their original order
    pub retained: Vec<Projectile>,
    /// Number of projectiles that struck the target this tick
    pub hits: u32,
}

impl Projectile {
    /// True once the projectile's trailing edge has left `0..arena_width`
    pub fn has_exited(&self, arena_width: i32) -> bool {
        if self.velocity >= 0 {
            self.rect.left() >= arena_width
        } else {
            self.rect.right() <= 0
        }
    }
}

/// Move every projectile, then drop those that hit `target` or left the
/// arena. Hit takes precedence over exit when both apply in the same tick.
pub fn advance_projectiles(projectiles: &[Projectile], target: &Rect, arena_width: i32) -> Advance {
    let mut advance = Advance {
        retained: Vec::with_capacity(projectiles.len()),
        hits: 0,
    };

    for projectile in projectiles {
        let moved = Projectile {
            rect: projectile.rect.translated(IVec2::new(projectile.velocity, 0)),
            ..*projectile
        };

        if moved.rect.intersects(target) {
            advance.hits += 1;
        } else if !moved.has_exited(arena_width) {
            advance.retained.push(moved);
        }
    }

    advance
}

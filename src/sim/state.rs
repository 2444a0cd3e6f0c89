//! Round state and core simulation types
//!
//! A round owns both ships and both projectile lists. Nothing here survives
//! past the end of a round.

use std::fmt;

use super::rect::Rect;
use crate::config::GameConfig;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left half, fires rightward
    Red,
    /// Right half, fires leftward
    Yellow,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Yellow];

    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Yellow,
            Side::Yellow => Side::Red,
        }
    }

    /// Display name used in the winner banner
    pub fn label(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Yellow => "Yellow",
        }
    }

    /// Horizontal sign of this side's projectiles
    pub fn heading(self) -> i32 {
        match self {
            Side::Red => 1,
            Side::Yellow => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player-controlled ship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    pub side: Side,
    pub rect: Rect,
    pub health: u32,
}

impl Ship {
    /// Ship at its spawn point with full health
    pub fn spawn(side: Side, config: &GameConfig) -> Self {
        Self {
            side,
            rect: Rect::from_parts(config.spawn(side), config.ship.size),
            health: config.ship.starting_health,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Take one point of damage. Health never drops below zero.
    pub fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projectile {
    pub owner: Side,
    pub rect: Rect,
    /// Signed horizontal units per tick
    pub velocity: i32,
}

/// Everything that changes during a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub red: Ship,
    pub yellow: Ship,
    pub red_projectiles: Vec<Projectile>,
    pub yellow_projectiles: Vec<Projectile>,
}

impl RoundState {
    /// Fresh round: both ships at spawn, full health, no projectiles
    pub fn new(config: &GameConfig) -> Self {
        Self {
            red: Ship::spawn(Side::Red, config),
            yellow: Ship::spawn(Side::Yellow, config),
            red_projectiles: Vec::with_capacity(config.projectile.max_live),
            yellow_projectiles: Vec::with_capacity(config.projectile.max_live),
        }
    }

    pub fn ship(&self, side: Side) -> &Ship {
        match side {
            Side::Red => &self.red,
            Side::Yellow => &self.yellow,
        }
    }

    pub fn ship_mut(&mut self, side: Side) -> &mut Ship {
        match side {
            Side::Red => &mut self.red,
            Side::Yellow => &mut self.yellow,
        }
    }

    pub fn projectiles(&self, side: Side) -> &[Projectile] {
        match side {
            Side::Red => &self.red_projectiles,
            Side::Yellow => &self.yellow_projectiles,
        }
    }

    pub fn projectiles_mut(&mut self, side: Side) -> &mut Vec<Projectile> {
        match side {
            Side::Red => &mut self.red_projectiles,
            Side::Yellow => &mut self.yellow_projectiles,
        }
    }

    /// The side that has won, if any.
    ///
    /// Red is checked first and yellow second, with the later check taking
    /// precedence: if both ships are destroyed in the same tick, Red wins.
    pub fn winner(&self) -> Option<Side> {
        let mut winner = None;
        if self.red.is_destroyed() {
            winner = Some(Side::Yellow);
        }
        if self.yellow.is_destroyed() {
            winner = Some(Side::Red);
        }
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_defaults() {
        let config = GameConfig::standard();
        let round = RoundState::new(&config);

        assert_eq!(round.red.rect, Rect::new(100, 300, 55, 55));
        assert_eq!(round.yellow.rect, Rect::new(745, 300, 55, 55));
        assert_eq!(round.red.health, 10);
        assert_eq!(round.yellow.health, 10);
        assert!(round.red_projectiles.is_empty());
        assert!(round.yellow_projectiles.is_empty());
        assert_eq!(round.winner(), None);
    }

    #[test]
    fn test_health_saturates_at_zero() {
        let config = GameConfig::standard();
        let mut ship = Ship::spawn(Side::Red, &config);
        ship.health = 1;
        ship.take_hit();
        ship.take_hit();
        assert_eq!(ship.health, 0);
        assert!(ship.is_destroyed());
    }

    #[test]
    fn test_winner_is_opponent_of_destroyed_ship() {
        let config = GameConfig::standard();
        let mut round = RoundState::new(&config);

        round.red.health = 0;
        assert_eq!(round.winner(), Some(Side::Yellow));

        let mut round = RoundState::new(&config);
        round.yellow.health = 0;
        assert_eq!(round.winner(), Some(Side::Red));
    }

    #[test]
    fn test_double_knockout_goes_to_red() {
        let config = GameConfig::standard();
        let mut round = RoundState::new(&config);
        round.red.health = 0;
        round.yellow.health = 0;
        assert_eq!(round.winner(), Some(Side::Red));
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Red.opponent(), Side::Yellow);
        assert_eq!(Side::Yellow.opponent(), Side::Red);
        assert_eq!(Side::Red.heading(), 1);
        assert_eq!(Side::Yellow.heading(), -1);
        assert_eq!(Side::Yellow.to_string(), "Yellow");
    }
}

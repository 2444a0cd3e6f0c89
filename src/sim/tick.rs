//! Fixed-rate simulation tick
//!
//! Intents are collected into one ordered queue and applied at the top of
//! the next tick. Hits found while advancing projectiles go to the back of
//! that queue, so damage from tick N lands at the start of tick N+1.

use std::collections::VecDeque;

use super::movement::{ShipInput, move_ship};
use super::projectile::{advance_projectiles, spawn_projectile};
use super::state::{RoundState, Side};
use crate::config::GameConfig;

/// A queued command, applied in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Player on this side pressed fire
    Fire(Side),
    /// A projectile struck the ship on this side
    Hit(Side),
    /// The window asked to close
    Quit,
}

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Discrete events polled since the previous tick, oldest first
    pub events: Vec<Intent>,
    /// Held direction keys
    pub red: ShipInput,
    pub yellow: ShipInput,
}

impl TickInput {
    pub fn ship(&self, side: Side) -> ShipInput {
        match side {
            Side::Red => self.red,
            Side::Yellow => self.yellow,
        }
    }
}

/// Something that happened during a tick that the frontend reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A projectile was spawned for this side
    ProjectileFired(Side),
    /// The ship on this side lost a point of health
    ShipHit(Side),
}

/// Outcome of one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Set when the round ended this tick. Movement and projectiles were
    /// not advanced.
    pub winner: Option<Side>,
    /// A quit request was consumed this tick
    pub quit: bool,
}

/// The round simulation driven by the game loop
#[derive(Debug, Clone)]
pub struct Simulation {
    config: GameConfig,
    round: RoundState,
    pending: VecDeque<Intent>,
    round_number: u32,
    ticks: u64,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        let round = RoundState::new(&config);
        Self {
            config,
            round,
            pending: VecDeque::new(),
            round_number: 1,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// 1-based index of the current round
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Ticks simulated in the current round
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Intents waiting for the next tick
    pub fn pending(&self) -> impl Iterator<Item = &Intent> {
        self.pending.iter()
    }

    /// Queue an intent for the next tick
    pub fn submit(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    /// Throw the round away and start a fresh one. Queued intents belong to
    /// the old round and are dropped.
    pub fn reset(&mut self) {
        self.round = RoundState::new(&self.config);
        self.pending.clear();
        self.round_number += 1;
        self.ticks = 0;
        log::info!("Round {} started", self.round_number);
    }

    /// Advance the round by one tick
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        let mut report = TickReport::default();

        self.pending.extend(input.events.iter().copied());
        while let Some(intent) = self.pending.pop_front() {
            self.apply(intent, &mut report);
        }

        if let Some(winner) = self.round.winner() {
            log::info!(
                "Round {} won by {} after {} ticks",
                self.round_number,
                winner,
                self.ticks
            );
            report.winner = Some(winner);
            return report;
        }

        for side in Side::ALL {
            let bounds = self.config.bounds(side);
            let speed = self.config.ship.speed;
            move_ship(&mut self.round.ship_mut(side).rect, input.ship(side), &bounds, speed);
        }

        for side in Side::ALL {
            let target = side.opponent();
            let advance = advance_projectiles(
                self.round.projectiles(side),
                &self.round.ship(target).rect,
                self.config.arena.width,
            );
            *self.round.projectiles_mut(side) = advance.retained;
            for _ in 0..advance.hits {
                self.pending.push_back(Intent::Hit(target));
            }
        }

        self.ticks += 1;
        report
    }

    fn apply(&mut self, intent: Intent, report: &mut TickReport) {
        match intent {
            Intent::Quit => report.quit = true,
            Intent::Fire(side) => {
                if self.round.projectiles(side).len() >= self.config.projectile.max_live {
                    return;
                }
                let projectile =
                    spawn_projectile(side, &self.round.ship(side).rect, &self.config.projectile);
                self.round.projectiles_mut(side).push(projectile);
                report.events.push(GameEvent::ProjectileFired(side));
                log::debug!("{} fired", side);
            }
            Intent::Hit(side) => {
                let ship = self.round.ship_mut(side);
                ship.take_hit();
                report.events.push(GameEvent::ShipHit(side));
                log::debug!("{} hit, health {}", side, ship.health);
            }
        }
    }
}

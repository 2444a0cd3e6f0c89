//! Keyboard state and intent collection
//!
//! Movement reads continuous key state; firing and quitting are discrete
//! events queued in arrival order until the next tick takes them.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::config::Controls;
use crate::sim::{Intent, ShipInput, Side, TickInput};

#[derive(Debug, Clone)]
pub struct InputState {
    controls: Controls,
    held: HashSet<KeyCode>,
    events: Vec<Intent>,
}

impl InputState {
    pub fn new(controls: Controls) -> Self {
        Self {
            controls,
            held: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// A key went down. Auto-repeat keeps the key held but never fires again.
    pub fn key_down(&mut self, key: KeyCode, repeat: bool) {
        self.held.insert(key);
        if repeat {
            return;
        }
        for side in Side::ALL {
            if self.controls.for_side(side).fire == key {
                self.events.push(Intent::Fire(side));
            }
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Forget held keys, e.g. when the window loses focus and key-up events
    /// will not arrive
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn request_quit(&mut self) {
        self.events.push(Intent::Quit);
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn ship_input(&self, side: Side) -> ShipInput {
        let keys = self.controls.for_side(side);
        ShipInput {
            left: self.is_held(keys.left),
            right: self.is_held(keys.right),
            up: self.is_held(keys.up),
            down: self.is_held(keys.down),
        }
    }

    /// Drain queued events and sample held keys for one tick
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            events: std::mem::take(&mut self.events),
            red: self.ship_input(Side::Red),
            yellow: self.ship_input(Side::Yellow),
        }
    }

    /// Drop queued fire commands, keeping any quit request
    pub fn discard_fire(&mut self) {
        self.events.retain(|event| matches!(event, Intent::Quit));
    }
}

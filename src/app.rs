//! Game driver: window, renderer and audio wired around the simulation
//!
//! One round is played at a time. Each tick paces the clock, pumps OS
//! events, advances the simulation and draws the frame. A finished round
//! shows its winner banner for the configured delay and then restarts.

use std::time::Instant;

use anyhow::{Result, bail};

use crate::assets::Assets;
use crate::audio::{AudioManager, SoundEffect};
use crate::config::GameConfig;
use crate::platform::{FrameClock, Platform};
use crate::renderer::{DrawList, Fonts, RenderState, SpriteSet, compose, compose_winner};
use crate::sim::{Intent, Side, Simulation, TickReport};

/// How a round stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The window was closed; the program should exit
    Quit,
    /// A ship was destroyed
    Winner(Side),
}

impl RoundEnd {
    /// Quit takes precedence over a winner decided in the same tick
    pub fn from_report(report: &TickReport) -> Option<Self> {
        if report.quit {
            Some(RoundEnd::Quit)
        } else {
            report.winner.map(RoundEnd::Winner)
        }
    }
}

struct Game {
    sim: Simulation,
    platform: Platform,
    renderer: RenderState,
    audio: AudioManager,
    fonts: Fonts,
    clock: FrameClock,
}

/// Load everything, open the window and play rounds until the player quits
pub fn run() -> Result<()> {
    let config = GameConfig::standard();
    let assets = Assets::load(&Assets::default_dir(), &config)?;

    let audio = AudioManager::new(assets.fire_sound.clone(), assets.hit_sound.clone())?;

    let mut platform = Platform::new(&config)?;
    let window = platform.open_window()?;
    let renderer = RenderState::new(
        window,
        config.arena.size(),
        SpriteSet {
            background: &assets.background,
            red_ship: &assets.red_ship,
            yellow_ship: &assets.yellow_ship,
        },
    )?;

    let mut game = Game {
        clock: FrameClock::new(config.timing.tick_duration()),
        sim: Simulation::new(config),
        platform,
        renderer,
        audio,
        fonts: Fonts::default(),
    };
    log::debug!("Tick period {:?}", game.clock.period());
    log::info!("Round {} started", game.sim.round_number());

    loop {
        match game.play_round()? {
            RoundEnd::Quit => break,
            RoundEnd::Winner(winner) => {
                if game.show_winner(winner)? {
                    break;
                }
            }
        }
    }

    log::info!("Exiting after {} rounds", game.sim.round_number());
    Ok(())
}

impl Game {
    fn play_round(&mut self) -> Result<RoundEnd> {
        loop {
            self.clock.tick();
            self.platform.pump();
            self.apply_resize();

            let input = self.platform.input().take_tick_input();
            let report = self.sim.tick(&input);
            self.play_sounds(&report);

            if report.winner.is_none() {
                let list = compose(self.sim.config(), self.sim.round(), &self.fonts);
                self.draw(&list)?;
            }
            if let Some(end) = RoundEnd::from_report(&report) {
                return Ok(end);
            }
        }
    }

    /// Hold the winner banner on screen, then start the next round. Returns
    /// true if the window was closed while the banner was up.
    fn show_winner(&mut self, winner: Side) -> Result<bool> {
        let config = self.sim.config();
        let list = compose_winner(config, self.sim.round(), &self.fonts, winner);
        let until = Instant::now() + config.timing.winner_delay;

        self.clock.restart();
        while Instant::now() < until {
            self.clock.tick();
            self.platform.pump();
            self.apply_resize();
            self.draw(&list)?;
        }

        let input = self.platform.input();
        input.discard_fire();
        let quit = input.take_tick_input().events.contains(&Intent::Quit);

        self.clock.restart();
        self.sim.reset();
        Ok(quit)
    }

    fn play_sounds(&self, report: &TickReport) {
        for event in &report.events {
            self.audio.play(SoundEffect::from(*event));
        }
    }

    fn apply_resize(&mut self) {
        if let Some(size) = self.platform.take_resize() {
            self.renderer.resize(size.width, size.height);
        }
    }

    /// Present a frame. Surface loss skips the frame; running out of GPU
    /// memory is fatal.
    fn draw(&mut self, list: &DrawList) -> Result<()> {
        match self.renderer.render(list) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => bail!("GPU out of memory while presenting"),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
        Ok(())
    }
}

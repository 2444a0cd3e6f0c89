//! Native window and event pumping
//!
//! The game owns its loop, so the winit event loop is pumped once per tick
//! instead of being handed control with `run_app`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::error::OsError;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use super::input::InputState;
use crate::config::GameConfig;

/// How long to block per pump while waiting for the window to appear
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

struct WindowHandler {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    create_error: Option<OsError>,
    input: InputState,
    resized: Option<PhysicalSize<u32>>,
}

impl ApplicationHandler for WindowHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.create_error.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => self.create_error = Some(e),
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.input.request_quit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.input.key_down(key, event.repeat),
                        ElementState::Released => self.input.key_up(key),
                    }
                }
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::Resized(size) => self.resized = Some(size),
            _ => {}
        }
    }
}

/// The event loop plus the single game window
pub struct Platform {
    event_loop: EventLoop<()>,
    handler: WindowHandler,
}

impl Platform {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let attributes = Window::default_attributes()
            .with_title(config.title)
            .with_inner_size(LogicalSize::new(
                config.arena.width as f64,
                config.arena.height as f64,
            ))
            .with_resizable(false);

        Ok(Self {
            event_loop,
            handler: WindowHandler {
                attributes,
                window: None,
                create_error: None,
                input: InputState::new(config.controls),
                resized: None,
            },
        })
    }

    /// Pump events until the window exists
    pub fn open_window(&mut self) -> Result<Arc<Window>> {
        loop {
            if let PumpStatus::Exit(code) = self
                .event_loop
                .pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut self.handler)
            {
                bail!("event loop exited with code {} before the window opened", code);
            }
            if let Some(e) = self.handler.create_error.take() {
                bail!("failed to create window: {}", e);
            }
            if let Some(window) = &self.handler.window {
                log::info!("Window opened: {:?}", window.inner_size());
                return Ok(Arc::clone(window));
            }
        }
    }

    /// Deliver pending OS events without blocking
    pub fn pump(&mut self) {
        if let PumpStatus::Exit(_) = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler)
        {
            self.handler.input.request_quit();
        }
    }

    pub fn input(&mut self) -> &mut InputState {
        &mut self.handler.input
    }

    /// Surface size change since the last call, if any
    pub fn take_resize(&mut self) -> Option<PhysicalSize<u32>> {
        self.handler.resized.take()
    }
}

//! Frame driver: decides whether frames are scheduled and owns the pending
//! frame token.
//!
//! The host supplies a [`FrameScheduler`] (requestAnimationFrame in the
//! browser, a fake in tests) and calls [`FrameDriver::tick`] from the
//! scheduled callback. The driver keeps at most one token outstanding and
//! cancels it before issuing another.

use crate::config::{DotGridConfig, Effect};
use crate::session::{FrameStats, RenderSession};
use crate::surface::{Surface, Viewport};
use glam::Vec2;

/// Opaque handle returned by the host scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i32);

pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameToken;
    fn cancel_frame(&mut self, token: FrameToken);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverState {
    /// No effect and no hover: nothing scheduled, surface cleared.
    #[default]
    Stopped,
    /// Effect configured but paused: one frame at t = 0, then idle.
    StaticFrame,
    /// Effect playing and/or hover enabled.
    Looping,
}

impl DriverState {
    pub fn for_config(cfg: &DotGridConfig) -> Self {
        if !cfg.needs_overlay() {
            DriverState::Stopped
        } else if cfg.animates() {
            DriverState::Looping
        } else {
            debug_assert!(cfg.effect != Effect::None);
            DriverState::StaticFrame
        }
    }
}

#[derive(Debug)]
pub struct FrameDriver {
    session: RenderSession,
    state: DriverState,
    pending: Option<FrameToken>,
    live: bool,
}

impl FrameDriver {
    /// Build a driver for `config`. Nothing is scheduled until [`FrameDriver::start`].
    pub fn new(config: DotGridConfig, now_ms: f64) -> Self {
        let session = RenderSession::new(config, now_ms);
        Self {
            state: DriverState::Stopped,
            session,
            pending: None,
            live: true,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn session(&self) -> &RenderSession {
        &self.session
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Enter the state the current configuration asks for.
    pub fn start<F: FrameScheduler>(&mut self, now_ms: f64, scheduler: &mut F) -> DriverState {
        self.cancel_pending(scheduler);
        if !self.live {
            return self.state;
        }
        self.session.restart_clock(now_ms);
        let next = DriverState::for_config(self.session.config());
        if next != DriverState::Stopped {
            self.pending = Some(scheduler.request_frame());
        }
        if next != self.state {
            log::debug!("[driver] {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        next
    }

    /// Replace the configuration and re-enter the matching state. Entering
    /// `Stopped` clears `surface` if one is available.
    pub fn configure<F: FrameScheduler, S: Surface + ?Sized>(
        &mut self,
        config: DotGridConfig,
        now_ms: f64,
        scheduler: &mut F,
        surface: Option<&mut S>,
    ) -> DriverState {
        if !self.live {
            return self.state;
        }
        self.session.set_config(config, now_ms);
        let next = self.start(now_ms, scheduler);
        if next == DriverState::Stopped {
            if let Some(surface) = surface {
                surface.clear();
            }
        }
        next
    }

    /// Run one scheduled frame. `viewport` or `surface` being `None` means
    /// the host could not provide them this time; the frame is skipped but a
    /// looping driver still asks for the next one.
    pub fn tick<F: FrameScheduler, S: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        viewport: Option<Viewport>,
        surface: Option<&mut S>,
        scheduler: &mut F,
    ) -> Option<FrameStats> {
        // The token that fired is spent.
        self.pending = None;
        if !self.live || self.state == DriverState::Stopped {
            return None;
        }

        let stats = match (viewport, surface) {
            (Some(viewport), Some(surface)) => {
                Some(self.session.render_frame(now_ms, viewport, surface))
            }
            _ => {
                log::trace!("[driver] surface unavailable, skipping frame");
                None
            }
        };

        match self.state {
            DriverState::Looping => {
                self.pending = Some(scheduler.request_frame());
            }
            DriverState::StaticFrame if stats.is_none() => {
                // Retry until the static frame actually lands.
                self.pending = Some(scheduler.request_frame());
            }
            DriverState::StaticFrame => {}
            DriverState::Stopped => {}
        }
        stats
    }

    #[inline]
    pub fn pointer_move(&mut self, pos: Vec2, now_ms: f64) {
        if self.live {
            self.session.pointer_move(pos, now_ms);
        }
    }

    #[inline]
    pub fn pointer_leave(&mut self) {
        if self.live {
            self.session.pointer_leave();
        }
    }

    /// Cancel any pending frame and stop scheduling. Idempotent.
    pub fn stop<F: FrameScheduler>(&mut self, scheduler: &mut F) {
        self.cancel_pending(scheduler);
        if self.state != DriverState::Stopped {
            log::debug!("[driver] {:?} -> Stopped", self.state);
        }
        self.state = DriverState::Stopped;
    }

    /// Stop for good; later ticks, configures and pointer events are ignored.
    pub fn teardown<F: FrameScheduler>(&mut self, scheduler: &mut F) {
        self.stop(scheduler);
        self.live = false;
    }

    fn cancel_pending<F: FrameScheduler>(&mut self, scheduler: &mut F) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel_frame(token);
        }
    }
}

use crate::constants::{POINTER_SENTINEL, POINTER_STALE_MS, REFERENCE_SPEED_PX_PER_SEC};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    Tracking {
        pos: Vec2,
        last_ms: f64,
        /// px/s
        speed: f32,
    },
}

/// Last known pointer sample plus an instantaneous speed estimate.
///
/// Event handlers only call [`PointerTracker::on_move`] / [`PointerTracker::on_leave`];
/// the frame loop reads the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn on_move(&mut self, pos: Vec2, now_ms: f64) {
        self.state = match self.state {
            PointerState::Idle => PointerState::Tracking {
                pos,
                last_ms: now_ms,
                speed: 0.0,
            },
            PointerState::Tracking {
                pos: prev,
                last_ms,
                speed,
            } => {
                let dt_ms = now_ms - last_ms;
                let speed = if dt_ms > 0.0 {
                    (pos.distance(prev) as f64 / dt_ms * 1000.0) as f32
                } else {
                    speed
                };
                PointerState::Tracking {
                    pos,
                    last_ms: now_ms,
                    speed,
                }
            }
        };
    }

    pub fn on_leave(&mut self) {
        self.state = PointerState::Idle;
    }

    /// Current position, or the off-surface sentinel while idle.
    #[inline]
    pub fn position(&self) -> Vec2 {
        match self.state {
            PointerState::Tracking { pos, .. } => pos,
            PointerState::Idle => Vec2::from(POINTER_SENTINEL),
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        match self.state {
            PointerState::Tracking { speed, .. } => speed,
            PointerState::Idle => 0.0,
        }
    }

    /// Speed normalized against the reference speed, in [0, 1].
    #[inline]
    pub fn speed_factor(&self) -> f32 {
        (self.speed() / REFERENCE_SPEED_PX_PER_SEC).clamp(0.0, 1.0)
    }

    /// Speed factor as seen at `now_ms`. A pointer that has not moved for
    /// longer than [`POINTER_STALE_MS`] is resting and reports 0.
    #[inline]
    pub fn speed_factor_at(&self, now_ms: f64) -> f32 {
        match self.state {
            PointerState::Tracking { last_ms, .. } if now_ms - last_ms > POINTER_STALE_MS => 0.0,
            _ => self.speed_factor(),
        }
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, PointerState::Tracking { .. })
    }
}

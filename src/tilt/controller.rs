//! Controller - hover lifecycle for one tilted element
//!
//! ```text
//!   Idle ──enter──▶ Active ──move──▶ Active
//!    ▲                 │
//!    └──────leave──────┘   (schedules relax after speed ms)
//! ```
//!
//! The controller owns the geometry snapshot and decides *what* happens;
//! the DOM binding owns the real timer and applies the returned styles.

use super::calculator::{Geometry, Pointer, TiltResult, compute_tilt};
use super::config::TiltConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
}

/// What a pointer-enter asks the binding to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enter {
    /// A relax callback was still pending and must be cancelled
    pub cancel_relax: bool,
}

/// What a pointer-leave asks the binding to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leave {
    /// Delay before `relax()` should be called
    pub relax_after_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TiltController {
    config: TiltConfig,
    geometry: Option<Geometry>,
    phase: Phase,
    relax_pending: bool,
}

impl TiltController {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            geometry: None,
            phase: Phase::Idle,
            relax_pending: false,
        }
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn is_relax_pending(&self) -> bool {
        self.relax_pending
    }

    /// Pointer entered: take a fresh snapshot and go Active
    pub fn enter(&mut self, geometry: Geometry) -> Enter {
        let cancel_relax = std::mem::take(&mut self.relax_pending);
        self.geometry = Some(geometry);
        self.phase = Phase::Active;
        Enter { cancel_relax }
    }

    /// Pointer moved: compute a frame from the cached snapshot.
    ///
    /// `measure` only runs when no snapshot exists yet, e.g. the pointer
    /// was already over the element when it was attached.
    pub fn track<F>(&mut self, pointer: Pointer, measure: F) -> TiltResult
    where
        F: FnOnce() -> Geometry,
    {
        let geometry = *self.geometry.get_or_insert_with(measure);
        compute_tilt(pointer, &geometry, &self.config)
    }

    /// Pointer left: go Idle and ask for a deferred relax
    pub fn leave(&mut self) -> Leave {
        self.phase = Phase::Idle;
        self.relax_pending = true;
        Leave {
            relax_after_ms: self.config.speed_ms,
        }
    }

    /// Deferred relax fired. Returns whether the hint should drop to `auto`;
    /// a stale callback that outlived a re-enter is refused.
    pub fn relax(&mut self) -> bool {
        if !self.relax_pending || self.phase == Phase::Active {
            return false;
        }
        self.relax_pending = false;
        true
    }

    /// Out-of-band re-measure (window resize). Leaves the current frame alone.
    pub fn remeasure(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
    }

    /// Back to a freshly-constructed state, keeping the config
    pub fn detach(&mut self) {
        self.geometry = None;
        self.phase = Phase::Idle;
        self.relax_pending = false;
    }
}

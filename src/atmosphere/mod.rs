//! Day-night cycle.
//!
//! A running clock drives the sky color through night, sunrise, day and
//! sunset. The main entry point is [`DayNightCycle`], updated once per tick;
//! it produces a [`SkyInfo`] (CPU-side) and a [`SkyUniform`] (GPU-ready
//! buffer).

pub mod config;
pub mod sky;
pub mod state;
pub mod time;

// Re-exports
pub use config::DayCycleConfig;
pub use sky::{DayPhase, SkyInfo};
pub use state::{LightingUniform, SkyUniform};
pub use time::DayClock;

// ---------------------------------------------------------------------------
// DayNightCycle
// ---------------------------------------------------------------------------

/// Main day-night system. Call [`update`](Self::update) each tick, then read
/// the resulting [`sky`](Self::sky) or [`uniform`](Self::uniform).
pub struct DayNightCycle {
    config: DayCycleConfig,
    clock: DayClock,
    paused: bool,
    sky: SkyInfo,
}

impl DayNightCycle {
    /// Create a new cycle from the given configuration.
    pub fn new(config: DayCycleConfig) -> Self {
        let start = if config.always_day {
            config.always_day_hour
        } else {
            config.start_hour
        };
        let paused = config.start_paused;
        Self {
            config,
            clock: DayClock::new(start),
            paused,
            sky: SkyInfo::at(start),
        }
    }

    /// Clock speed for this tick. Fast-forward overrides pause.
    pub fn rate(&self, fast_forward: bool) -> f32 {
        if fast_forward {
            self.config.fast_forward_rate
        } else if self.paused {
            0.0
        } else {
            self.config.normal_rate
        }
    }

    /// Advance the clock by `dt` real seconds and recompute the sky.
    pub fn update(&mut self, dt: f32, fast_forward: bool) {
        if self.config.always_day {
            self.clock.set(self.config.always_day_hour);
        } else {
            let days = self.clock.day_count();
            self.clock.advance(dt, self.rate(fast_forward));
            if self.clock.day_count() != days {
                log::debug!("Day {} begins", self.clock.day_count());
            }
        }

        let phase = self.sky.phase;
        self.sky = SkyInfo::at(self.clock.hour());
        if self.sky.phase != phase {
            log::debug!("{:?} at {:.2}h", self.sky.phase, self.clock.hour());
        }
    }

    /// Flip the pause switch.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("Day clock {}", if self.paused { "paused" } else { "running" });
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn hour(&self) -> f32 {
        self.clock.hour()
    }

    #[inline]
    pub fn day_count(&self) -> u32 {
        self.clock.day_count()
    }

    /// Set time of day and immediately recompute the sky.
    pub fn set_hour(&mut self, hour: f32) {
        self.clock.set(hour);
        self.sky = SkyInfo::at(self.clock.hour());
    }

    /// Current sky state (CPU-side).
    #[inline]
    pub fn sky(&self) -> &SkyInfo {
        &self.sky
    }

    /// Build a GPU-ready uniform from current state.
    pub fn uniform(&self) -> SkyUniform {
        SkyUniform::new(&self.sky, self.clock.hour())
    }

    #[inline]
    pub fn config(&self) -> &DayCycleConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Simulation time model.
//!
//! Time is a monotonically increasing integer `Tick` counter.  One tick is
//! one second in the reference parameters; `SimClock` keeps the mapping so
//! reports can express tick counts as wall time.
//!
//! Integer ticks keep every wait/travel calculation exact, which is what
//! makes two runs over the same manifest bit-identical.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at 0.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock: current tick plus its wall-time resolution.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many real seconds one tick represents.  Default: 1.
    pub tick_duration_secs: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: u32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_secs as u64
    }

    /// Break elapsed time into (hours, minutes, seconds).
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total = self.elapsed_secs();
        let hours = total / 3_600;
        let minutes = ((total % 3_600) / 60) as u32;
        let seconds = (total % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}

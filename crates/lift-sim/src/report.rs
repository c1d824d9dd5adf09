//! Per-tick summaries and end-of-run metrics.

use std::fmt;

use lift_core::Tick;

// ── TickSummary ───────────────────────────────────────────────────────────────

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:            Tick,
    /// Passengers queued on their start floor this tick.
    pub arrived:         usize,
    /// Arrivals dropped because a floor was outside the building.
    pub rejected:        usize,
    pub boarded:         usize,
    pub delivered:       usize,
    /// Deliveries since tick 0, including this tick's.
    pub total_delivered: usize,
    /// Passengers still queued on any floor at the end of the tick.
    pub waiting:         usize,
}

// ── SimReport ─────────────────────────────────────────────────────────────────

/// Aggregate results of a run.  Averages are in ticks and are 0 when nobody
/// was delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    pub total_passengers:     usize,
    pub delivered_passengers: usize,
    pub rejected_passengers:  usize,
    /// The clock value when the run stopped.  Arrivals rejected for
    /// out-of-range floors count as resolved, so they can end a run well
    /// before `max_ticks`.
    pub final_tick:           Tick,
    pub average_wait:         f64,
    pub average_travel:       f64,
    pub floor_travel_ticks:   u32,
    pub tick_duration_secs:   u32,
}

impl SimReport {
    /// Average wait plus average travel.
    pub fn average_total(&self) -> f64 {
        self.average_wait + self.average_travel
    }

    /// Compare `self` (the proposed configuration) against `baseline`.
    pub fn reduction_vs(&self, baseline: &SimReport) -> Reduction {
        Reduction {
            wait:     Delta::new(baseline.average_wait, self.average_wait),
            travel:   Delta::new(baseline.average_travel, self.average_travel),
            total:    Delta::new(baseline.average_total(), self.average_total()),
            sim_time: Delta::new(baseline.final_tick.0 as f64, self.final_tick.0 as f64),
        }
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.tick_duration_secs as f64;
        writeln!(f, "Floor travel time:    {} ticks", self.floor_travel_ticks)?;
        writeln!(f, "Total passengers:     {}", self.total_passengers)?;
        writeln!(f, "Delivered passengers: {}", self.delivered_passengers)?;
        if self.rejected_passengers > 0 {
            writeln!(f, "Rejected passengers:  {}", self.rejected_passengers)?;
        }
        writeln!(
            f,
            "Simulation time:      {} s",
            self.final_tick.0 * self.tick_duration_secs as u64
        )?;
        writeln!(f, "Average wait time:    {:.3} s", self.average_wait * secs)?;
        writeln!(f, "Average travel time:  {:.3} s", self.average_travel * secs)?;
        write!(f, "Average total time:   {:.3} s", self.average_total() * secs)
    }
}

// ── Reduction ─────────────────────────────────────────────────────────────────

/// A baseline value next to the proposed one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta {
    pub baseline: f64,
    pub proposed: f64,
}

impl Delta {
    pub fn new(baseline: f64, proposed: f64) -> Self {
        Self { baseline, proposed }
    }

    /// `baseline - proposed`; positive means the proposal is faster.
    pub fn absolute(&self) -> f64 {
        self.baseline - self.proposed
    }

    /// The reduction as a percentage of the baseline, or 0 if the baseline is 0.
    pub fn percent(&self) -> f64 {
        if self.baseline == 0.0 {
            0.0
        } else {
            self.absolute() / self.baseline * 100.0
        }
    }
}

/// How much a proposed configuration improves on a baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    pub wait:     Delta,
    pub travel:   Delta,
    pub total:    Delta,
    pub sim_time: Delta,
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Average wait time", &self.wait),
            ("Average travel time", &self.travel),
            ("Total average time", &self.total),
            ("Simulation time", &self.sim_time),
        ];
        for (i, (label, d)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{label:<20} {:>12.3} -> {:>12.3}  ({:+.3}, {:.2}%)",
                d.baseline,
                d.proposed,
                -d.absolute(),
                d.percent()
            )?;
        }
        Ok(())
    }
}

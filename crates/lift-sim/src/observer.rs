//! Simulation observer trait for progress reporting and data collection.

use lift_building::{Elevator, Floor, Passenger};
use lift_core::Tick;

use crate::{SimReport, TickSummary};

/// Callbacks invoked by [`Sim::tick`][crate::Sim::tick] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(usize);
///
/// impl SimObserver for Deliveries {
///     fn on_delivery(&mut self, _tick: Tick, _p: &Passenger) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before arrivals are injected.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per passenger delivered this tick, in delivery order,
    /// after every elevator has been updated.
    fn on_delivery(&mut self, _tick: Tick, _passenger: &Passenger) {}

    /// Called at the end of each tick with its boarding/delivery counts.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the elevators and floors.
    fn on_snapshot(&mut self, _tick: Tick, _elevators: &[Elevator], _floors: &[Floor]) {}

    /// Called once by `Sim::run` after the final tick.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

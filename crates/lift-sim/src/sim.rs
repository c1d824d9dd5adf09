//! The `Sim` struct and its tick loop.

use lift_building::{DispatchPolicy, Elevator, ElevatorState, Floor, PassengerStore};
use lift_core::{PassengerId, SimClock, SimConfig, Tick};
use tracing::{Level, debug, info, trace, warn};

use crate::{SimObserver, SimReport, TickSummary};

/// The simulation driver.
///
/// Owns every floor, every elevator and the passenger arena.  Each call to
/// [`tick`][Self::tick] runs one full tick (inject → update → sweep →
/// advance); [`run`][Self::run] ticks until every passenger is resolved or
/// `config.max_ticks` is reached.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: DispatchPolicy> {
    /// Building and timing parameters for this run.
    pub config: SimConfig,

    /// Simulation clock.  Only moves forward.
    pub clock: SimClock,

    /// Every manifest passenger, indexed by `PassengerId`.
    pub passengers: PassengerStore,

    /// Floor queues, indexed by `FloorId`.
    pub floors: Vec<Floor>,

    /// Elevators, updated in this order every tick.
    pub elevators: Vec<Elevator>,

    /// Delivered passengers in delivery order.
    pub delivered: Vec<PassengerId>,

    /// Passengers whose start or end floor is outside the building.  They
    /// never enter a floor queue.
    pub rejected: Vec<PassengerId>,

    /// The dispatch policy consulted by every stopped elevator.
    pub policy: D,

    /// Passenger ids sorted by request tick (stable).
    pub(crate) arrival_order: Vec<PassengerId>,

    /// Cursor into `arrival_order`.  Only moves forward.
    pub(crate) next_arrival: usize,
}

impl<D: DispatchPolicy> Sim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every passenger is delivered (or rejected) or the clock
    /// reaches `config.max_ticks`, then return the final report.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimReport {
        info!(
            passengers = self.passengers.len(),
            elevators = self.elevators.len(),
            floors = self.floors.len(),
            floor_travel_ticks = self.config.floor_travel_ticks,
            "starting elevator simulation"
        );

        while !self.is_finished() {
            self.tick(observer);
        }

        let report = self.report();
        if !self.all_resolved() {
            warn!(
                undelivered = report.total_passengers
                    - report.delivered_passengers
                    - report.rejected_passengers,
                max_ticks = self.config.max_ticks,
                "tick limit reached with passengers still undelivered"
            );
        }
        info!(
            clock = %self.clock,
            delivered = report.delivered_passengers,
            total = report.total_passengers,
            "simulation complete"
        );
        observer.on_sim_end(&report);
        report
    }

    /// Run exactly `n` ticks from the current position, ignoring the
    /// termination conditions.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// Advance the simulation by one tick.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> TickSummary {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── ① Inject arrivals ─────────────────────────────────────────────
        let (arrived, rejected) = self.inject_arrivals(now);

        // ── ② Update elevators in id order ────────────────────────────────
        let delivered_before = self.delivered.len();
        let mut boarded = 0;
        for elevator in &mut self.elevators {
            let outcome = elevator.update(
                now,
                &mut self.floors,
                &mut self.passengers,
                &mut self.delivered,
                &self.policy,
            );
            boarded += outcome.boarded;
        }

        // ── ③ Delivery sweep for stopped elevators ────────────────────────
        for elevator in &mut self.elevators {
            if elevator.state() == ElevatorState::Stopped {
                elevator.drop_off(now, &mut self.passengers, &mut self.delivered);
            }
        }

        for &id in &self.delivered[delivered_before..] {
            observer.on_delivery(now, self.passengers.get(id));
        }

        let summary = TickSummary {
            tick: now,
            arrived,
            rejected,
            boarded,
            delivered: self.delivered.len() - delivered_before,
            total_delivered: self.delivered.len(),
            waiting: self.floors.iter().map(Floor::waiting_count).sum(),
        };
        self.log_tick(&summary);

        observer.on_tick_end(&summary);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(now, &self.elevators, &self.floors);
        }

        // ── ④ Advance ─────────────────────────────────────────────────────
        self.clock.advance();
        summary
    }

    /// `true` once every passenger is resolved or the tick cap is reached.
    pub fn is_finished(&self) -> bool {
        self.clock.current_tick.0 >= self.config.max_ticks || self.all_resolved()
    }

    /// `true` if every manifest passenger is either delivered or rejected.
    pub fn all_resolved(&self) -> bool {
        self.delivered.len() + self.rejected.len() >= self.passengers.len()
    }

    // ── Metrics ───────────────────────────────────────────────────────────

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn total_passengers(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn delivered_count(&self) -> usize {
        self.delivered.len()
    }

    /// Mean of `picked_up_at - requested_at` over delivered passengers.
    pub fn average_wait_time(&self) -> f64 {
        self.mean_over_delivered(|id| self.passengers.get(id).wait_time())
    }

    /// Mean of `delivered_at - picked_up_at` over delivered passengers.
    pub fn average_travel_time(&self) -> f64 {
        self.mean_over_delivered(|id| self.passengers.get(id).travel_time())
    }

    /// Snapshot of the aggregate metrics at the current tick.
    pub fn report(&self) -> SimReport {
        SimReport {
            total_passengers:     self.passengers.len(),
            delivered_passengers: self.delivered.len(),
            rejected_passengers:  self.rejected.len(),
            final_tick:           self.clock.current_tick,
            average_wait:         self.average_wait_time(),
            average_travel:       self.average_travel_time(),
            floor_travel_ticks:   self.config.floor_travel_ticks,
            tick_duration_secs:   self.config.tick_duration_secs,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Queue every passenger requested at or before `now` on its start floor.
    fn inject_arrivals(&mut self, now: Tick) -> (usize, usize) {
        let mut arrived = 0;
        let mut rejected = 0;

        while let Some(&id) = self.arrival_order.get(self.next_arrival) {
            let passenger = self.passengers.get(id);
            if passenger.requested_at > now {
                break;
            }
            self.next_arrival += 1;

            let (start, end) = (passenger.start_floor, passenger.end_floor);
            let check = self
                .config
                .check_floor(start)
                .and_then(|()| self.config.check_floor(end));
            match check {
                Ok(()) => {
                    self.floors[start.index()].add_passenger(id);
                    arrived += 1;
                }
                Err(e) => {
                    warn!(passenger = id.0, error = %e, "rejecting arrival");
                    self.rejected.push(id);
                    rejected += 1;
                }
            }
        }

        (arrived, rejected)
    }

    fn mean_over_delivered(&self, metric: impl Fn(PassengerId) -> Option<u64>) -> f64 {
        if self.delivered.is_empty() {
            return 0.0;
        }
        let total: u64 = self.delivered.iter().filter_map(|&id| metric(id)).sum();
        total as f64 / self.delivered.len() as f64
    }

    fn log_tick(&self, summary: &TickSummary) {
        if summary.boarded > 0 {
            debug!(tick = summary.tick.0, count = summary.boarded, "passengers boarded");
        }
        if summary.delivered > 0 {
            debug!(tick = summary.tick.0, count = summary.delivered, "passengers disembarked");
        }
        if tracing::enabled!(Level::TRACE) {
            trace!(
                tick = summary.tick.0,
                delivered = summary.total_delivered,
                total = self.passengers.len(),
                waiting = summary.waiting,
                "progress"
            );
            for e in &self.elevators {
                trace!(
                    elevator = e.id().0,
                    floor = e.current_floor().number(),
                    state = %e.state(),
                    load = e.passenger_count(),
                    capacity = e.capacity(),
                    "elevator status"
                );
            }
        }
    }
}

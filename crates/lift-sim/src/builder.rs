//! Fluent builder for constructing a [`Sim`].

use lift_building::{DispatchPolicy, Elevator, Floor, PassengerStore};
use lift_core::{ElevatorId, FloorId, PassengerId, SimConfig};
use lift_manifest::{ArrivalRecord, Manifest};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<D>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: building size, capacity, travel time and tick cap
/// - `D: DispatchPolicy`: usually [`lift_building::NearestTargetDispatch`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default            |
/// |-------------------|--------------------|
/// | `.arrivals(v)`    | No passengers      |
/// | `.manifest(m)`    | No passengers      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, NearestTargetDispatch)
///     .arrivals(records)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<D: DispatchPolicy> {
    config:   SimConfig,
    arrivals: Vec<ArrivalRecord>,
    policy:   D,
}

impl<D: DispatchPolicy> SimBuilder<D> {
    pub fn new(config: SimConfig, policy: D) -> Self {
        Self {
            config,
            arrivals: Vec::new(),
            policy,
        }
    }

    /// Supply arrival records.  Passenger ids follow the order given here.
    pub fn arrivals(mut self, arrivals: Vec<ArrivalRecord>) -> Self {
        self.arrivals = arrivals;
        self
    }

    /// Supply the records of a loaded [`Manifest`].
    pub fn manifest(self, manifest: Manifest) -> Self {
        self.arrivals(manifest.records)
    }

    /// Validate the configuration, build the passenger arena, floors and
    /// elevators, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<D>> {
        self.config.validate()?;

        let max = PassengerId::INVALID.index();
        if self.arrivals.len() >= max {
            return Err(SimError::TooManyPassengers {
                got: self.arrivals.len(),
                max,
            });
        }

        // ── Passenger arena (ids in manifest order) ───────────────────────
        let mut passengers = PassengerStore::new();
        for record in &self.arrivals {
            passengers.insert(record.start_floor, record.end_floor, record.requested_at);
        }

        // ── Arrival cursor order: by request tick, ties keep manifest order ─
        let mut arrival_order: Vec<PassengerId> = passengers.iter().map(|p| p.id).collect();
        arrival_order.sort_by_key(|&id| passengers.get(id).requested_at);

        let floors = (0..self.config.floor_count)
            .map(|i| Floor::new(FloorId(i)))
            .collect();

        let elevators = (0..self.config.elevator_count)
            .map(|i| Elevator::from_config(ElevatorId(i), &self.config))
            .collect();

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            passengers,
            floors,
            elevators,
            delivered: Vec::new(),
            rejected: Vec::new(),
            policy: self.policy,
            arrival_order,
            next_arrival: 0,
        })
    }
}

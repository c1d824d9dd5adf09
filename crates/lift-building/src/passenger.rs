//! Passenger records and the arena that owns them.

use lift_core::{FloorId, PassengerId, Tick};

/// One travel request plus its lifecycle timestamps.
///
/// `start_floor`, `end_floor` and `requested_at` never change after
/// construction.  `picked_up_at` is set at most once and always before
/// `delivered_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:           PassengerId,
    pub start_floor:  FloorId,
    pub end_floor:    FloorId,
    /// Tick at which the passenger appears at `start_floor`.
    pub requested_at: Tick,
    picked_up_at:     Option<Tick>,
    delivered_at:     Option<Tick>,
}

impl Passenger {
    pub fn new(id: PassengerId, start_floor: FloorId, end_floor: FloorId, requested_at: Tick) -> Self {
        Self {
            id,
            start_floor,
            end_floor,
            requested_at,
            picked_up_at: None,
            delivered_at: None,
        }
    }

    #[inline]
    pub fn picked_up_at(&self) -> Option<Tick> {
        self.picked_up_at
    }

    #[inline]
    pub fn delivered_at(&self) -> Option<Tick> {
        self.delivered_at
    }

    #[inline]
    pub fn is_picked_up(&self) -> bool {
        self.picked_up_at.is_some()
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.delivered_at.is_some()
    }

    /// Record boarding at `now`.  Later calls are ignored.
    pub fn mark_picked_up(&mut self, now: Tick) {
        if self.picked_up_at.is_none() {
            self.picked_up_at = Some(now);
        }
    }

    /// Record delivery at `now`.
    ///
    /// A passenger delivered without a recorded pickup is treated as picked
    /// up at the same tick, so `travel_time` is 0 rather than undefined.
    pub fn mark_delivered(&mut self, now: Tick) {
        self.mark_picked_up(now);
        self.delivered_at = Some(now);
    }

    /// `picked_up_at - requested_at`, or `None` before pickup.
    pub fn wait_time(&self) -> Option<u64> {
        self.picked_up_at.map(|t| t.since(self.requested_at))
    }

    /// `delivered_at - picked_up_at`, or `None` before delivery.
    pub fn travel_time(&self) -> Option<u64> {
        match (self.picked_up_at, self.delivered_at) {
            (Some(up), Some(down)) => Some(down.since(up)),
            _ => None,
        }
    }
}

// ── PassengerStore ────────────────────────────────────────────────────────────

/// Arena of every passenger in the manifest, indexed by `PassengerId`.
///
/// Ids are dense: the passenger with id `n` is at position `n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassengerStore {
    inner: Vec<Passenger>,
}

impl PassengerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a passenger with the next free id and return that id.
    pub fn insert(&mut self, start_floor: FloorId, end_floor: FloorId, requested_at: Tick) -> PassengerId {
        let id = PassengerId(self.inner.len() as u32);
        self.inner.push(Passenger::new(id, start_floor, end_floor, requested_at));
        id
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> &Passenger {
        &self.inner[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: PassengerId) -> &mut Passenger {
        &mut self.inner[id.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.inner.iter()
    }
}

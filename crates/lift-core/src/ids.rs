//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash`.  The inner integer is `pub` to allow
//! direct indexing into the passenger arena and the floor / elevator `Vec`s
//! via `id.0 as usize`, but callers should prefer `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a passenger in the driver-owned `PassengerStore`.
    ///
    /// Assigned in manifest file order, starting at 0.
    pub struct PassengerId(u32);
}

typed_id! {
    /// Index of an elevator.  Elevators are updated in ascending id order.
    pub struct ElevatorId(u16);
}

typed_id! {
    /// A 0-indexed building level.  The manifest uses 1-indexed floors; the
    /// loader converts before records reach the simulation.
    pub struct FloorId(u32);
}

impl FloorId {
    /// Absolute distance in floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: FloorId) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The 1-indexed floor number used by manifests and reports.
    #[inline]
    pub fn number(self) -> u32 {
        self.0 + 1
    }
}

use crate::flight::{Flight, FlightId};
use crate::plane::{Plane, PlaneId, SeatClass};
use crate::time::{DateRange, Time};
use std::collections::HashMap;
use std::io;
use thiserror::Error;

pub mod memory;

/// A store operation failed for infrastructure reasons. Anything of this
/// kind aborts the whole reassignment batch; "no candidate found" is never
/// reported through this type.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
    #[error("malformed scenario data: {0}")]
    Dataset(#[from] serde_json::Error),
    #[error("unknown flight {0}")]
    UnknownFlight(FlightId),
    #[error("unknown plane {0}")]
    UnknownPlane(PlaneId),
}

/// Data-store contract consumed by the reassignment engine.
///
/// Reads issued between `begin` and `commit`/`rollback` must observe writes
/// made earlier in the same scope: the engine relies on this so that two
/// flights in one batch cannot be handed conflicting replacements.
pub trait Store {
    fn lookup_plane(&self, tail: &PlaneId) -> Result<Option<Plane>, StoreError>;

    /// Flights currently assigned to `tail` departing on a day inside
    /// `range`, ordered by ascending departure.
    fn assigned_flights(&self, tail: &PlaneId, range: DateRange)
    -> Result<Vec<Flight>, StoreError>;

    /// Booking counts per seat class. Classes with no bookings are absent.
    fn bookings_by_class(
        &self,
        flight: &FlightId,
    ) -> Result<HashMap<SeatClass, u32>, StoreError>;

    /// Seat counts per class. Classes the plane does not carry are absent.
    fn seat_capacities(&self, tail: &PlaneId) -> Result<HashMap<SeatClass, u32>, StoreError>;

    /// Tails owned by `airline`, excluding `exclude`, whose assigned flights
    /// all fall outside `window` at their true (unbuffered) times.
    fn conflict_free_fleet(
        &self,
        airline: &str,
        exclude: &PlaneId,
        window: (Time, Time),
    ) -> Result<Vec<PlaneId>, StoreError>;

    /// Number of flights assigned to `tail` departing on a day inside `range`.
    fn trip_count(&self, tail: &PlaneId, range: DateRange) -> Result<u32, StoreError>;

    fn reassign_flight(&mut self, flight: &FlightId, tail: &PlaneId) -> Result<(), StoreError>;

    fn begin(&mut self) -> Result<(), StoreError>;
    fn commit(&mut self) -> Result<(), StoreError>;
    fn rollback(&mut self) -> Result<(), StoreError>;
}

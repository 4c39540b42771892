use crate::flight::FlightId;
use crate::plane::{PlaneId, SeatClass};
use crate::store::{Store, StoreError};
use crate::time::{DateRange, Time};
use std::collections::HashMap;
use tracing::{debug, error, info};

/// Required gap between a reassigned flight and anything else on the
/// replacement plane, applied on both sides of the flight's own interval.
pub const TURNAROUND_BUFFER: u64 = 120;

/// What a batch did. `unresolved` keeps departure order; those flights stay
/// on their original plane.
#[derive(Debug, PartialEq)]
pub struct ReassignReport {
    pub reassigned: Vec<(FlightId, PlaneId)>,
    pub unresolved: Vec<FlightId>,
}

impl ReassignReport {
    fn empty() -> ReassignReport {
        ReassignReport {
            reassigned: vec![],
            unresolved: vec![],
        }
    }
}

/// Reassign every flight of `unavailable` departing inside `range` to a
/// replacement plane, earliest departure first.
///
/// The whole batch runs inside one store transaction. Flights with no valid
/// replacement are reported, never an error; only store faults abort the
/// batch, and those roll back every reassignment made so far.
pub fn reassign_fleet<S: Store>(
    store: &mut S,
    unavailable: &PlaneId,
    range: DateRange,
) -> Result<ReassignReport, StoreError> {
    store.begin()?;
    let committed = run_batch(store, unavailable, range)
        .and_then(|report| store.commit().map(|()| report));
    match committed {
        Ok(report) => {
            info!(
                tail = %unavailable,
                reassigned = report.reassigned.len(),
                unresolved = report.unresolved.len(),
                "batch committed"
            );
            Ok(report)
        }
        Err(err) => {
            if let Err(rb) = store.rollback() {
                error!(error = %rb, "rollback failed after store fault");
            }
            Err(err)
        }
    }
}

fn run_batch<S: Store>(
    store: &mut S,
    unavailable: &PlaneId,
    range: DateRange,
) -> Result<ReassignReport, StoreError> {
    let Some(plane) = store.lookup_plane(unavailable)? else {
        debug!(tail = %unavailable, "unknown tail, no flights examined");
        return Ok(ReassignReport::empty());
    };

    let mut report = ReassignReport::empty();
    for flight in store.assigned_flights(unavailable, range)? {
        let demand = store.bookings_by_class(&flight.id)?;
        let window = buffered_window(flight.departure, flight.arrival);
        let candidates = store.conflict_free_fleet(&plane.airline, unavailable, window)?;
        debug!(
            flight = %flight.id,
            candidates = candidates.len(),
            "conflict-free candidates"
        );

        let mut eligible = Vec::new();
        for tail in candidates {
            if meets_demand(&store.seat_capacities(&tail)?, &demand) {
                let trips = store.trip_count(&tail, range)?;
                eligible.push((tail, trips));
            }
        }

        match pick_replacement(eligible) {
            Some(tail) => {
                store.reassign_flight(&flight.id, &tail)?;
                debug!(flight = %flight.id, tail = %tail, "reassigned");
                report.reassigned.push((flight.id.clone(), tail));
            }
            None => {
                debug!(flight = %flight.id, "no replacement found");
                report.unresolved.push(flight.id.clone());
            }
        }
    }
    Ok(report)
}

/// The flight's own interval padded by the turnaround buffer. Candidates'
/// existing flights are matched against this at their true times; they get
/// no padding of their own.
pub(crate) fn buffered_window(departure: Time, arrival: Time) -> (Time, Time) {
    (
        departure.saturating_sub(TURNAROUND_BUFFER),
        arrival + TURNAROUND_BUFFER,
    )
}

/// True if every demanded class is covered; a class the plane does not
/// carry counts as capacity 0.
pub(crate) fn meets_demand(
    capacities: &HashMap<SeatClass, u32>,
    demand: &HashMap<SeatClass, u32>,
) -> bool {
    demand
        .iter()
        .all(|(class, needed)| capacities.get(class).copied().unwrap_or(0) >= *needed)
}

/// Fewest trips in range wins; ties go to the lexicographically smaller
/// tail number.
pub(crate) fn pick_replacement(mut candidates: Vec<(PlaneId, u32)>) -> Option<PlaneId> {
    candidates.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    candidates.into_iter().next().map(|(tail, _)| tail)
}

#[cfg(test)]
mod tests;

use crate::flight::{Flight, FlightId};
use crate::plane::{Plane, PlaneId, SeatClass};
use crate::store::memory::MemoryStore;
use crate::time::{Date, DateRange, Time};
use proptest::prelude::Strategy;
use std::collections::HashMap;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn add_plane(planes: &mut HashMap<PlaneId, Plane>, tail: &str, airline: &str) {
    planes.insert(
        id(tail),
        Plane {
            tail: id(tail),
            airline: id(airline),
        },
    );
}

pub fn add_flight(
    flights: &mut Vec<Flight>,
    flight_id: &str,
    tail: &str,
    departure: u64,
    arrival: u64,
) {
    flights.push(Flight {
        id: id(flight_id),
        tail: id(tail),
        departure: Time(departure),
        arrival: Time(arrival),
    });
}

pub fn add_seats(
    seats: &mut HashMap<PlaneId, HashMap<SeatClass, u32>>,
    tail: &str,
    class: SeatClass,
    capacity: u32,
) {
    seats.entry(id(tail)).or_default().insert(class, capacity);
}

pub fn add_bookings(
    bookings: &mut HashMap<FlightId, HashMap<SeatClass, u32>>,
    flight_id: &str,
    class: SeatClass,
    count: u32,
) {
    bookings.entry(id(flight_id)).or_default().insert(class, count);
}

pub fn store(
    planes: HashMap<PlaneId, Plane>,
    flights: Vec<Flight>,
    seats: HashMap<PlaneId, HashMap<SeatClass, u32>>,
    bookings: HashMap<FlightId, HashMap<SeatClass, u32>>,
) -> MemoryStore {
    MemoryStore::new(planes, flights, seats, bookings)
}

pub fn days(from: u64, to: u64) -> DateRange {
    DateRange::new(Date(from), Date(to))
}

#[derive(Debug)]
pub struct ArbScenario {
    pub store: MemoryStore,
    pub unavailable: PlaneId,
}

/// Random fleet of two airlines with random assignments, seating and
/// bookings, and the first AL_1 tail marked unavailable.
pub fn arb_scenario() -> impl Strategy<Value = ArbScenario> {
    use proptest::collection::vec;
    use proptest::prelude::*;

    let tails = ["AC_1", "AC_2", "AC_3", "AC_4", "BX_1"];
    (
        vec((0..tails.len(), 0..4320u64, 30..600u64), 1..20),
        vec((0..10u32, 0..10u32, 0..10u32), tails.len()),
        vec((0..6u32, 0..6u32), 1..20),
    )
        .prop_map(move |(flight_data, seat_data, booking_data)| {
            let mut planes = HashMap::new();
            for tail in &tails[..4] {
                add_plane(&mut planes, tail, "AL_1");
            }
            add_plane(&mut planes, tails[4], "AL_2");

            let mut flights = Vec::new();
            for (i, (tail_idx, dep, dur)) in flight_data.iter().enumerate() {
                add_flight(
                    &mut flights,
                    &format!("FL_{}", i),
                    tails[*tail_idx],
                    *dep,
                    dep + dur,
                );
            }

            let mut seats = HashMap::new();
            for (tail, (eco, biz, first)) in tails.iter().zip(seat_data) {
                add_seats(&mut seats, tail, SeatClass::Economy, eco);
                add_seats(&mut seats, tail, SeatClass::Business, biz);
                add_seats(&mut seats, tail, SeatClass::FirstClass, first);
            }

            let mut bookings = HashMap::new();
            for (i, (eco, first)) in booking_data.iter().enumerate() {
                if *eco > 0 {
                    add_bookings(&mut bookings, &format!("FL_{}", i), SeatClass::Economy, *eco);
                }
                if *first > 0 {
                    add_bookings(
                        &mut bookings,
                        &format!("FL_{}", i),
                        SeatClass::FirstClass,
                        *first,
                    );
                }
            }

            ArbScenario {
                store: store(planes, flights, seats, bookings),
                unavailable: id("AC_1"),
            }
        })
}

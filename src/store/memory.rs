use crate::flight::{Flight, FlightId};
use crate::plane::{Plane, PlaneId, SeatClass};
use crate::store::{Store, StoreError};
use crate::time::{DateRange, Time};
use serde::Deserialize;
use std::collections::HashMap;

/// In-memory store, loaded from a JSON scenario file. `begin` snapshots the
/// flight table (the only relation the engine mutates); `rollback` restores
/// it and `commit` drops the snapshot.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    planes: HashMap<PlaneId, Plane>,
    pub flights: Vec<Flight>,
    flights_index: HashMap<FlightId, usize>,
    seats: HashMap<PlaneId, HashMap<SeatClass, u32>>,
    bookings: HashMap<FlightId, HashMap<SeatClass, u32>>,
    checkpoint: Option<Vec<Flight>>,
}

#[derive(Deserialize)]
struct SeatRow {
    tail: PlaneId,
    class: SeatClass,
    capacity: u32,
}

#[derive(Deserialize)]
struct BookingRow {
    flight: FlightId,
    class: SeatClass,
}

impl MemoryStore {
    pub fn new(
        planes: HashMap<PlaneId, Plane>,
        mut flights: Vec<Flight>,
        seats: HashMap<PlaneId, HashMap<SeatClass, u32>>,
        bookings: HashMap<FlightId, HashMap<SeatClass, u32>>,
    ) -> MemoryStore {
        flights.sort_by_key(|f| f.departure);
        let flights_index = flights
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect::<HashMap<FlightId, usize>>();
        MemoryStore {
            planes,
            flights,
            flights_index,
            seats,
            bookings,
            checkpoint: None,
        }
    }

    pub fn load_from_file(path: &str) -> Result<Self, StoreError> {
        let data = std::fs::read_to_string(path)?;
        #[derive(Deserialize)]
        struct RawData {
            planes: Vec<Plane>,
            flights: Vec<Flight>,
            seats: Vec<SeatRow>,
            bookings: Vec<BookingRow>,
        }
        let raw: RawData = serde_json::from_str(&data)?;

        let plane_map = raw
            .planes
            .into_iter()
            .map(|p| (p.tail.clone(), p))
            .collect();

        let mut seat_map: HashMap<PlaneId, HashMap<SeatClass, u32>> = HashMap::new();
        for row in raw.seats {
            seat_map
                .entry(row.tail)
                .or_default()
                .insert(row.class, row.capacity);
        }

        let mut booking_map: HashMap<FlightId, HashMap<SeatClass, u32>> = HashMap::new();
        for row in raw.bookings {
            *booking_map
                .entry(row.flight)
                .or_default()
                .entry(row.class)
                .or_insert(0) += 1;
        }

        Ok(MemoryStore::new(plane_map, raw.flights, seat_map, booking_map))
    }

    pub fn planes(&self) -> Vec<&Plane> {
        let mut planes = self.planes.values().collect::<Vec<&Plane>>();
        planes.sort_by(|a, b| a.tail.cmp(&b.tail));
        planes
    }

    pub fn flight(&self, id: &FlightId) -> Option<&Flight> {
        self.flights_index.get(id).map(|i| &self.flights[*i])
    }
}

impl Store for MemoryStore {
    fn lookup_plane(&self, tail: &PlaneId) -> Result<Option<Plane>, StoreError> {
        Ok(self.planes.get(tail).cloned())
    }

    fn assigned_flights(
        &self,
        tail: &PlaneId,
        range: DateRange,
    ) -> Result<Vec<Flight>, StoreError> {
        // flights stays sorted by departure, so the filtered view is too
        Ok(self
            .flights
            .iter()
            .filter(|f| f.tail == *tail && range.contains(f.departure.date()))
            .cloned()
            .collect())
    }

    fn bookings_by_class(
        &self,
        flight: &FlightId,
    ) -> Result<HashMap<SeatClass, u32>, StoreError> {
        Ok(self.bookings.get(flight).cloned().unwrap_or_default())
    }

    fn seat_capacities(&self, tail: &PlaneId) -> Result<HashMap<SeatClass, u32>, StoreError> {
        Ok(self.seats.get(tail).cloned().unwrap_or_default())
    }

    fn conflict_free_fleet(
        &self,
        airline: &str,
        exclude: &PlaneId,
        window: (Time, Time),
    ) -> Result<Vec<PlaneId>, StoreError> {
        let mut fleet = self
            .planes
            .values()
            .filter(|p| *p.airline == *airline && p.tail != *exclude)
            .filter(|p| {
                self.flights
                    .iter()
                    .filter(|f| f.tail == p.tail)
                    .all(|f| !Time::is_overlapping(&(f.departure, f.arrival), &window))
            })
            .map(|p| p.tail.clone())
            .collect::<Vec<PlaneId>>();
        fleet.sort();
        Ok(fleet)
    }

    fn trip_count(&self, tail: &PlaneId, range: DateRange) -> Result<u32, StoreError> {
        Ok(self
            .flights
            .iter()
            .filter(|f| f.tail == *tail && range.contains(f.departure.date()))
            .count() as u32)
    }

    fn reassign_flight(&mut self, flight: &FlightId, tail: &PlaneId) -> Result<(), StoreError> {
        if !self.planes.contains_key(tail) {
            return Err(StoreError::UnknownPlane(tail.clone()));
        }
        let idx = self
            .flights_index
            .get(flight)
            .ok_or_else(|| StoreError::UnknownFlight(flight.clone()))?;
        self.flights[*idx].tail = tail.clone();
        Ok(())
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        self.checkpoint = Some(self.flights.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.checkpoint = None;
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), StoreError> {
        if let Some(snapshot) = self.checkpoint.take() {
            self.flights = snapshot;
        }
        Ok(())
    }
}

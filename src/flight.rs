use crate::plane::PlaneId;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tabled::Tabled;

pub type FlightId = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Flight {
    pub id: FlightId,
    pub tail: PlaneId,
    pub departure: Time,
    pub arrival: Time,
}

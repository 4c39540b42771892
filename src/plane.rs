use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use tabled::Tabled;

pub type PlaneId = Arc<str>;
pub type Airline = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Plane {
    pub tail: PlaneId,
    pub airline: Airline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatClass {
    Economy,
    Business,
    FirstClass,
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            SeatClass::Economy => "economy",
            SeatClass::Business => "business",
            SeatClass::FirstClass => "first_class",
        })
    }
}

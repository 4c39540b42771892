use crate::plane::SeatClass::{Business, Economy, FirstClass};
use crate::reassign::tests::utils::id;
use crate::reassign::{buffered_window, meets_demand, pick_replacement};
use crate::time::Time;
use std::collections::HashMap;

#[test]
fn test_pick_prefers_fewer_trips() {
    let picked = pick_replacement(vec![(id("A111"), 4), (id("B222"), 1), (id("C333"), 2)]);
    assert_eq!(picked, Some(id("B222")));
}

#[test]
fn test_pick_breaks_ties_lexicographically() {
    let picked = pick_replacement(vec![(id("C333"), 2), (id("A111"), 2), (id("B222"), 2)]);
    assert_eq!(picked, Some(id("A111")));
}

#[test]
fn test_pick_trip_count_outranks_tail_order() {
    let picked = pick_replacement(vec![(id("A111"), 3), (id("Z999"), 1)]);
    assert_eq!(picked, Some(id("Z999")));
}

#[test]
fn test_pick_on_empty_input() {
    assert_eq!(pick_replacement(vec![]), None);
}

#[test]
fn test_demand_met_exactly() {
    let mut capacities = HashMap::new();
    capacities.insert(Economy, 5);
    capacities.insert(Business, 2);
    let mut demand = HashMap::new();
    demand.insert(Economy, 5);
    demand.insert(Business, 2);
    assert!(meets_demand(&capacities, &demand));
}

#[test]
fn test_missing_class_counts_as_zero() {
    let mut capacities = HashMap::new();
    capacities.insert(Economy, 100);
    let mut demand = HashMap::new();
    demand.insert(FirstClass, 1);
    assert!(!meets_demand(&capacities, &demand));
}

#[test]
fn test_empty_demand_always_met() {
    assert!(meets_demand(&HashMap::new(), &HashMap::new()));
}

#[test]
fn test_surplus_in_one_class_does_not_cover_another() {
    let mut capacities = HashMap::new();
    capacities.insert(Economy, 100);
    capacities.insert(Business, 1);
    let mut demand = HashMap::new();
    demand.insert(Economy, 1);
    demand.insert(Business, 2);
    assert!(!meets_demand(&capacities, &demand));
}

#[test]
fn test_window_pads_two_hours_each_side() {
    assert_eq!(buffered_window(Time(780), Time(840)), (Time(660), Time(960)));
}

#[test]
fn test_window_saturates_at_zero() {
    assert_eq!(buffered_window(Time(60), Time(120)), (Time(0), Time(240)));
}

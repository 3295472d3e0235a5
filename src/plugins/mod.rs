mod drone;

pub use drone::{insert_flight_resources, spawn_player_drone, FlightSet, FpvDronePlugin};

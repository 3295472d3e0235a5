mod integrator;

pub use integrator::{drone_physics_system, FlightIntegrator};

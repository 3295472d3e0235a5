pub mod components;
pub mod plugins;
pub mod resources;
pub mod session;
pub mod systems;
pub mod utils;

pub use session::{FlightSession, SessionSummary, TickReport};

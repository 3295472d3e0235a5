pub mod profile;
pub mod render;
pub mod session;
pub mod simulation;
pub mod toggles;
pub mod world;

pub use profile::{FlightProfile, ProfilePreset};
pub use render::RenderConfig;
pub use session::{RangePreset, SessionConfig, SpeedPreset};
pub use simulation::SimulationConfig;
pub use toggles::FeatureToggles;
pub use world::WorldConfig;

pub mod config;
mod emg;
mod errors;
mod scenario;
mod time;
pub mod transformations;

pub use config::{
    FeatureToggles, FlightProfile, ProfilePreset, RangePreset, RenderConfig, SessionConfig,
    SimulationConfig, SpeedPreset, WorldConfig,
};
pub use emg::{emg_channel, EmgMapping, EmgReceiver, EmgSample, EmgSender};
pub use errors::ConfigError;
pub use scenario::{MissionProgress, MissionStatus, Scenario, ScenarioPreset};
pub use time::SimulationClock;
pub use transformations::{project, CameraBasis, CameraProjector, ScreenPoint};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{
    profile::FlightProfile, render::RenderConfig, session::SessionConfig,
    toggles::FeatureToggles, world::WorldConfig,
};
use crate::resources::{ConfigError, EmgMapping};

/// Everything read once when a flight session is created.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimulationConfig {
    pub profile: FlightProfile,
    pub world: WorldConfig,
    pub render: RenderConfig,
    pub toggles: FeatureToggles,
    pub session: SessionConfig,
    pub emg: EmgMapping,
}

impl SimulationConfig {
    /// `<config dir>/fpv-flyer/config.yaml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fpv-flyer").join("config.yaml"))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.profile.validate()?;
        self.world.validate()?;
        self.render.validate()?;
        self.session.validate()?;
        self.emg.validate()?;

        if self.profile.lift_coefficient > 2.0 * FlightProfile::research().lift_coefficient {
            warn!(
                "Lift coefficient {} is high, the aircraft may be hard to control",
                self.profile.lift_coefficient
            );
        }
        if !self.toggles.ground_collision {
            warn!("Ground collision disabled, flights can only end by mission rules");
        }
        Ok(())
    }
}

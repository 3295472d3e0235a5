use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Horizontal field of view [deg]
    pub fov: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,
            fov: 90.0,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Validation(
                "screen dimensions must be non-zero".to_string(),
            ));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::Validation(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.fov
            )));
        }
        Ok(())
    }
}

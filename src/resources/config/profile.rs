use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;
use crate::utils::REFERENCE_TICK_RATE;

/// Lift coefficient used by the research preset, all other presets scale from it.
const REFERENCE_LIFT: f64 = 0.25;
/// Thrust rating of the research preset on the 0.8 (gentle) .. 2.5 (racing) scale.
const RESEARCH_THRUST_RATING: f64 = 1.2;

/// Named flight-model tunings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProfilePreset {
    /// Low drag, strong lift for high speed flying.
    Racing,
    /// Balanced tuning for EMG control studies.
    #[default]
    Research,
    /// Smooth and forgiving, used while calibrating EMG channels.
    Gentle,
    /// Standard drag with moderate thrust.
    Realistic,
    /// High drag, the aircraft settles quickly when inputs are released.
    Stable,
}

impl ProfilePreset {
    /// Multiplicative per-tick velocity decay.
    pub fn drag(&self) -> f64 {
        match self {
            ProfilePreset::Racing => 0.985,
            ProfilePreset::Research => 0.985,
            ProfilePreset::Gentle => 0.98,
            ProfilePreset::Realistic => 0.95,
            ProfilePreset::Stable => 0.90,
        }
    }

    /// Thrust rating on the 0.8 (gentle) .. 2.5 (racing) scale.
    pub fn thrust_rating(&self) -> f64 {
        match self {
            ProfilePreset::Racing => 2.5,
            ProfilePreset::Research => RESEARCH_THRUST_RATING,
            ProfilePreset::Gentle => 0.8,
            ProfilePreset::Realistic | ProfilePreset::Stable => 1.5,
        }
    }
}

/// Every tunable constant of the flight model.
///
/// All per-tick quantities are expressed for a tick at [`FlightProfile::reference_tick_rate`]
/// and are scaled by `dt * reference_tick_rate` inside the integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightProfile {
    /// Tick rate the per-tick constants were tuned at [Hz].
    pub reference_tick_rate: f64,
    /// Velocity decay per reference tick, in (0, 1].
    pub drag: f64,
    /// Downward (+Y) acceleration per reference tick.
    pub gravity: f64,
    /// Upward velocity gained per tick at full throttle.
    pub lift_coefficient: f64,
    /// Forward velocity gained per tick at full throttle (rotor wash).
    pub forward_thrust: f64,
    /// Pitch/roll rate at full stick [deg per reference tick].
    pub rotation_speed: f64,
    /// Stick magnitude below which coupling terms are ignored.
    pub deadzone: f64,
    /// Heading change from bank, as a fraction of the rotation rate.
    pub bank_turn_factor: f64,
    /// Sideways velocity from bank per tick at full roll.
    pub bank_lateral_force: f64,
    /// Forward velocity from pitch per tick at full pitch.
    pub pitch_forward_force: f64,
    /// Climb velocity from pitch per tick at full pitch.
    pub pitch_vertical_force: f64,
    /// Heading change from the yaw stick, as a fraction of the rotation rate.
    pub yaw_turn_factor: f64,
    /// Overspeed ratio tolerated before the speed limiter fires.
    pub speed_limit_tolerance: f64,
    /// Throttle above which the overboost term is added.
    pub boost_threshold: f64,
    /// Forward velocity per tick per unit of throttle above the threshold.
    pub boost_gain: f64,
    /// Minutes of flight from a full battery at baseline drain.
    pub battery_endurance_min: f64,
    pub activity_drain_weight: f64,
    pub speed_drain_weight: f64,
    /// Metres past the range limit that produce one unit of pushback per tick.
    pub range_pushback_divisor: f64,
    /// Downward velocity per tick per unit above the flight ceiling.
    pub ceiling_push_gain: f64,
    /// Distance above the ceiling where position is hard clamped.
    pub ceiling_hard_margin: f64,
}

impl Default for FlightProfile {
    fn default() -> Self {
        Self::from_preset(ProfilePreset::Research)
    }
}

impl FlightProfile {
    pub fn from_preset(preset: ProfilePreset) -> Self {
        Self {
            reference_tick_rate: REFERENCE_TICK_RATE,
            drag: preset.drag(),
            gravity: 0.08,
            lift_coefficient: REFERENCE_LIFT * preset.thrust_rating() / RESEARCH_THRUST_RATING,
            forward_thrust: 0.05,
            rotation_speed: 6.0,
            deadzone: 0.05,
            bank_turn_factor: 0.8,
            bank_lateral_force: 0.6,
            pitch_forward_force: 0.4,
            pitch_vertical_force: 0.2,
            yaw_turn_factor: 0.4,
            speed_limit_tolerance: 1.1,
            boost_threshold: 0.8,
            boost_gain: 2.0,
            battery_endurance_min: 5.0,
            activity_drain_weight: 2.0,
            speed_drain_weight: 1.0,
            range_pushback_divisor: 100.0,
            ceiling_push_gain: 0.1,
            ceiling_hard_margin: 50.0,
        }
    }

    pub fn racing() -> Self {
        Self::from_preset(ProfilePreset::Racing)
    }

    pub fn research() -> Self {
        Self::from_preset(ProfilePreset::Research)
    }

    pub fn gentle() -> Self {
        Self::from_preset(ProfilePreset::Gentle)
    }

    /// Number of reference ticks covered by a step of `dt` seconds.
    #[inline]
    pub fn ticks(&self, dt: f64) -> f64 {
        dt * self.reference_tick_rate
    }

    /// Battery percentage drained per reference tick with idle sticks at rest.
    pub fn base_drain_per_tick(&self) -> f64 {
        100.0 / (self.battery_endurance_min * 60.0 * self.reference_tick_rate)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.reference_tick_rate,
            self.drag,
            self.gravity,
            self.lift_coefficient,
            self.forward_thrust,
            self.rotation_speed,
            self.deadzone,
            self.bank_turn_factor,
            self.bank_lateral_force,
            self.pitch_forward_force,
            self.pitch_vertical_force,
            self.yaw_turn_factor,
            self.speed_limit_tolerance,
            self.boost_threshold,
            self.boost_gain,
            self.battery_endurance_min,
            self.activity_drain_weight,
            self.speed_drain_weight,
            self.range_pushback_divisor,
            self.ceiling_push_gain,
            self.ceiling_hard_margin,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Validation(
                "flight profile contains non-finite values".to_string(),
            ));
        }
        if self.drag <= 0.0 || self.drag > 1.0 {
            return Err(ConfigError::Validation(format!(
                "drag must be in (0, 1], got {}",
                self.drag
            )));
        }
        if self.reference_tick_rate <= 0.0 {
            return Err(ConfigError::Validation(
                "reference tick rate must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.deadzone) {
            return Err(ConfigError::Validation(format!(
                "deadzone must be in [0, 1), got {}",
                self.deadzone
            )));
        }
        if self.forward_thrust >= self.lift_coefficient {
            return Err(ConfigError::Validation(
                "forward thrust must stay below lift so throttle remains a lift control"
                    .to_string(),
            ));
        }
        if self.speed_limit_tolerance < 1.0 {
            return Err(ConfigError::Validation(
                "speed limit tolerance below 1.0 would clamp under the cap".to_string(),
            ));
        }
        if self.battery_endurance_min <= 0.0 || self.range_pushback_divisor <= 0.0 {
            return Err(ConfigError::Validation(
                "battery endurance and range pushback divisor must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

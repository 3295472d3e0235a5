use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{ControlAxes, CrashCause, CrashEvent, DroneState, PlayerController};
use crate::resources::{FeatureToggles, FlightProfile, SimulationClock, SimulationConfig, WorldConfig};
use crate::utils::{heading_vector, starboard_vector, try_normalize, wrap_degrees};

/// Advances a [`DroneState`] by one tick of the arcade flight model.
///
/// The model is tuned per reference tick (60 Hz); every per-tick quantity is
/// scaled by `dt * reference_tick_rate` so other tick rates fly the same.
/// Stepping a crashed state returns it unchanged.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FlightIntegrator {
    profile: FlightProfile,
    world: WorldConfig,
    toggles: FeatureToggles,
}

impl Default for FlightIntegrator {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl FlightIntegrator {
    pub fn new(profile: FlightProfile, world: WorldConfig, toggles: FeatureToggles) -> Self {
        Self {
            profile,
            world,
            toggles,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.profile.clone(), config.world.clone(), config.toggles)
    }

    pub fn profile(&self) -> &FlightProfile {
        &self.profile
    }

    pub fn world(&self) -> &WorldConfig {
        &self.world
    }

    pub fn toggles(&self) -> &FeatureToggles {
        &self.toggles
    }

    /// Pure form of [`FlightIntegrator::advance`].
    pub fn step(&self, state: &DroneState, controls: ControlAxes, dt: f64) -> DroneState {
        let mut next = state.clone();
        self.advance(&mut next, controls, dt);
        next
    }

    /// Integrate `state` in place. The order of the stages matters: coupling terms
    /// read the heading from before this tick's turn, and the speed limiter and
    /// battery drain both see the post-drag speed.
    pub fn advance(&self, state: &mut DroneState, controls: ControlAxes, dt: f64) {
        if state.crashed || !(dt > 0.0) {
            return;
        }

        let p = &self.profile;
        let controls = controls.clamped();
        let ticks = p.ticks(dt);
        let previous_position = state.position;

        state.velocity.y += p.gravity * ticks;

        // Throttle lifts (-Y) and pushes slightly along the heading
        let heading = state.rotation.y;
        if controls.throttle > 0.0 {
            state.velocity.y -= controls.throttle * p.lift_coefficient * ticks;
            state.velocity += heading_vector(heading) * (controls.throttle * p.forward_thrust * ticks);
        }

        let rotation_factor = p.rotation_speed * ticks;
        state.rotation.x += controls.pitch * rotation_factor;
        state.rotation.z += controls.roll * rotation_factor;

        self.apply_coupling(state, &controls, heading, rotation_factor, ticks);

        state.velocity *= p.drag.powf(ticks);

        let speed = state.velocity.norm();
        let max_speed = state.limits.max_speed_ms;
        if max_speed > 0.0 && speed / max_speed > p.speed_limit_tolerance {
            state.velocity *= max_speed / speed;
        }

        // Overboost deliberately bypasses the limiter for this tick
        if controls.throttle > p.boost_threshold {
            state.velocity += heading_vector(heading)
                * ((controls.throttle - p.boost_threshold) * p.boost_gain * ticks);
        }

        state.position += state.velocity * ticks;

        state.max_speed_achieved = state.max_speed_achieved.max(state.speed_kmh());
        state.total_distance_traveled += (state.position - previous_position).norm();

        if self.toggles.battery_drain {
            self.drain_battery(state, &controls, speed, ticks);
        }

        if self.toggles.range_limit {
            self.push_back_into_range(state, ticks);
        }

        self.resolve_ground(state, &previous_position);
        self.resolve_ceiling(state, ticks);

        state.position = self.world.clamp_horizontal(&state.position);
        state.rotation.y = wrap_degrees(state.rotation.y);
    }

    /// Bank turns and slides the aircraft, pitch converts into forward and vertical
    /// speed, yaw turns the heading.
    fn apply_coupling(
        &self,
        state: &mut DroneState,
        controls: &ControlAxes,
        heading: f64,
        rotation_factor: f64,
        ticks: f64,
    ) {
        let p = &self.profile;

        if controls.roll.abs() > p.deadzone {
            state.rotation.y = wrap_degrees(
                state.rotation.y + controls.roll * rotation_factor * p.bank_turn_factor,
            );
            state.velocity += starboard_vector(heading) * (controls.roll * p.bank_lateral_force * ticks);
        }

        if controls.pitch.abs() > p.deadzone {
            state.velocity += heading_vector(heading) * (controls.pitch * p.pitch_forward_force * ticks);
            state.velocity.y -= controls.pitch * p.pitch_vertical_force * ticks;
        }

        if controls.yaw.abs() > p.deadzone {
            state.rotation.y =
                wrap_degrees(state.rotation.y + controls.yaw * rotation_factor * p.yaw_turn_factor);
        }
    }

    fn drain_battery(&self, state: &mut DroneState, controls: &ControlAxes, speed: f64, ticks: f64) {
        let p = &self.profile;
        let activity = 1.0 + p.activity_drain_weight * controls.mean_activity();
        let speed_ratio = if state.limits.max_speed_ms > 0.0 {
            speed / state.limits.max_speed_ms
        } else {
            0.0
        };
        let speed_factor = 1.0 + p.speed_drain_weight * speed_ratio * speed_ratio;

        let drain = p.base_drain_per_tick() * activity * speed_factor * ticks;
        state.battery = (state.battery - drain).max(0.0);
    }

    fn push_back_into_range(&self, state: &mut DroneState, ticks: f64) {
        let to_start: Vector3<f64> = state.start_position - state.position;
        let overage = to_start.norm() - state.limits.max_range_m;
        if overage <= 0.0 {
            return;
        }
        if let Some(direction) = try_normalize(&to_start) {
            state.velocity += direction * (overage / self.profile.range_pushback_divisor * ticks);
        }
    }

    /// A tick that starts or ends at the crash threshold counts as ground contact.
    fn resolve_ground(&self, state: &mut DroneState, previous_position: &Vector3<f64>) {
        let threshold = self.world.crash_threshold;
        let in_contact = previous_position.y >= threshold || state.position.y >= threshold;
        if !in_contact {
            return;
        }

        if self.toggles.ground_collision {
            state.crashed = true;
        }
        if self.toggles.ground_clamp && (state.crashed || state.position.y > threshold) {
            state.position.y = threshold;
            // A landed drone keeps no sinking speed; crash speed is left for reporting
            if !state.crashed {
                state.velocity.y = state.velocity.y.min(0.0);
            }
        }
    }

    fn resolve_ceiling(&self, state: &mut DroneState, ticks: f64) {
        let ceiling = self.world.ceiling_y();
        if state.position.y >= ceiling {
            return;
        }

        state.velocity.y += (ceiling - state.position.y) * self.profile.ceiling_push_gain * ticks;
        let hard_limit = ceiling - self.profile.ceiling_hard_margin;
        if state.position.y < hard_limit {
            state.position.y = hard_limit;
        }
    }
}

/// Steps every player drone by one fixed timestep and reports ground crashes.
pub fn drone_physics_system(
    mut query: Query<(Entity, &mut DroneState, &ControlAxes), With<PlayerController>>,
    integrator: Res<FlightIntegrator>,
    clock: Res<SimulationClock>,
    mut crash_events: EventWriter<CrashEvent>,
) {
    let dt = clock.timestep;

    for (entity, mut state, controls) in query.iter_mut() {
        let was_crashed = state.crashed;
        integrator.advance(&mut state, *controls, dt);

        if state.crashed && !was_crashed {
            info!(
                "Drone {:?} hit the ground at {:.1} km/h",
                entity,
                state.speed_kmh()
            );
            crash_events.send(CrashEvent {
                entity,
                cause: CrashCause::Ground,
            });
        }
    }
}

use bevy::prelude::*;

use crate::components::{ControlAxes, ControlSource, DroneState, PlayerController};
use crate::resources::SimulationConfig;
use crate::systems::controller::condition_controls;

const STICK: f64 = 0.5;

/// Map held keys to control axes.
///
/// Space is full throttle, Q/E yaw, W/S pitch and A/D roll, each at half deflection.
pub fn keyboard_axes(keyboard: &ButtonInput<KeyCode>) -> ControlAxes {
    let axis = |negative: KeyCode, positive: KeyCode| {
        let mut value = 0.0;
        if keyboard.pressed(negative) {
            value -= STICK;
        }
        if keyboard.pressed(positive) {
            value += STICK;
        }
        value
    };

    ControlAxes::new(
        if keyboard.pressed(KeyCode::Space) { 1.0 } else { 0.0 },
        axis(KeyCode::KeyQ, KeyCode::KeyE),
        axis(KeyCode::KeyS, KeyCode::KeyW),
        axis(KeyCode::KeyA, KeyCode::KeyD),
    )
}

/// Writes keyboard axes onto the player drone when the keyboard is the active source.
pub fn keyboard_control_system(
    mut query: Query<(&mut ControlAxes, &DroneState, &PlayerController)>,
    keyboard: Res<ButtonInput<KeyCode>>,
    source: Res<ControlSource>,
    config: Res<SimulationConfig>,
) {
    if *source != ControlSource::Keyboard {
        return;
    }

    if let Ok((mut axes, state, controller)) = query.get_single_mut() {
        if !controller.active {
            return;
        }
        *axes = condition_controls(keyboard_axes(&keyboard), state.crashed, &config.toggles, &config.profile);
    }
}

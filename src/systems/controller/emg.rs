use bevy::prelude::*;

use crate::components::{ControlAxes, ControlSource, DroneState, PlayerController};
use crate::resources::{EmgReceiver, SimulationConfig};
use crate::systems::controller::condition_controls;

/// Reads the newest EMG sample once per tick and maps it onto the player drone.
///
/// Without a connected receiver the drone keeps neutral axes.
pub fn emg_control_system(
    mut query: Query<(&mut ControlAxes, &DroneState, &PlayerController)>,
    receiver: Option<ResMut<EmgReceiver>>,
    source: Res<ControlSource>,
    config: Res<SimulationConfig>,
) {
    if *source != ControlSource::Emg {
        return;
    }

    let Ok((mut axes, state, controller)) = query.get_single_mut() else {
        return;
    };
    if !controller.active {
        return;
    }

    let raw = match receiver {
        Some(mut receiver) => config.emg.map(&receiver.latest()),
        None => ControlAxes::neutral(),
    };
    *axes = condition_controls(raw, state.crashed, &config.toggles, &config.profile);
}

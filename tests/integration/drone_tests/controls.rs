use bevy::prelude::*;
use fpv_flyer::{
    components::{ControlAxes, ControlSource, DroneState, PlayerController},
    resources::emg_channel,
};
use std::thread;

use crate::common::{create_research_config, TestAppBuilder};

#[test]
fn test_keyboard_axes_reach_drone() {
    let mut app = TestAppBuilder::new().build();
    app.press(KeyCode::Space);
    app.press(KeyCode::KeyE);
    app.run_frame();

    let axes = app.query_single::<ControlAxes>().unwrap();
    assert_eq!(axes.throttle, 1.0);
    // Half stick after the deadzone stretch
    assert!(axes.yaw > 0.47 && axes.yaw < 0.48);
    assert_eq!(axes.pitch, 0.0);

    let state = app.query_single::<DroneState>().unwrap();
    assert!(state.rotation.y > 0.0);
}

#[test]
fn test_emg_drives_climb() {
    let (sender, receiver) = emg_channel();
    let mut app = TestAppBuilder::new()
        .with_config(create_research_config())
        .with_control_source(ControlSource::Emg)
        .build();
    app.app.insert_resource(receiver);

    // Strong throttle channel, everything else at rest
    let producer = thread::spawn(move || {
        for _ in 0..10 {
            sender.publish([90.0, 30.0, 30.0, 30.0]).unwrap();
        }
        sender
    });
    let sender = producer.join().unwrap();

    app.run_steps(60);
    let state = app.query_single::<DroneState>().unwrap();
    assert!(state.position.y < 200.0, "expected climb, y = {}", state.position.y);

    // The last sample keeps applying until a new one arrives
    let axes = *app.query_single::<ControlAxes>().unwrap();
    assert!(axes.throttle > 0.8);
    assert_eq!(axes.yaw, 0.0);
    drop(sender);
}

#[test]
fn test_emg_without_receiver_is_neutral() {
    let mut app = TestAppBuilder::new()
        .with_control_source(ControlSource::Emg)
        .build();
    app.press(KeyCode::Space);
    app.run_frame();

    assert_eq!(*app.query_single::<ControlAxes>().unwrap(), ControlAxes::neutral());
}

#[test]
fn test_external_source_keeps_axes() {
    let mut app = TestAppBuilder::new()
        .with_control_source(ControlSource::External)
        .build();
    if let Some(mut axes) = app.query_single_mut::<ControlAxes>() {
        *axes = ControlAxes::new(1.0, 0.0, 0.0, 0.0);
    }
    app.press(KeyCode::KeyQ);
    app.run_steps(30);

    let axes = app.query_single::<ControlAxes>().unwrap();
    assert_eq!(axes.throttle, 1.0);
    assert_eq!(axes.yaw, 0.0);
    assert!(app.query_single::<DroneState>().unwrap().position.y < 300.0);
}

#[test]
fn test_inactive_controller_ignores_keyboard() {
    let mut app = TestAppBuilder::new().build();
    if let Some(mut controller) = app.query_single_mut::<PlayerController>() {
        controller.active = false;
    }
    app.press(KeyCode::Space);
    app.run_frame();

    assert_eq!(*app.query_single::<ControlAxes>().unwrap(), ControlAxes::neutral());
}

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::RenderConfig;
use crate::utils::{deg_to_rad, try_normalize, BEHIND_CAMERA_EPSILON};

/// Pixel position of a projected point plus its camera-space depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    /// Distance along the view axis, used for sprite scaling and proximity checks.
    pub depth: f64,
}

impl ScreenPoint {
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        ((self.x as f64 - x).powi(2) + (self.y as f64 - y).powi(2)).sqrt()
    }
}

/// Camera axes derived from a pitch/yaw/roll rotation in degrees.
///
/// Right and up are re-orthogonalised against forward so a point on the view
/// axis always lands on the screen centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vector3<f64>,
    pub up: Vector3<f64>,
    pub right: Vector3<f64>,
}

impl CameraBasis {
    pub fn from_rotation(rotation: &Vector3<f64>) -> Self {
        let pitch = deg_to_rad(rotation.x);
        let yaw = deg_to_rad(rotation.y);
        let roll = deg_to_rad(rotation.z);

        let forward = Vector3::new(
            yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        );
        let up = Vector3::new(roll.sin(), roll.cos(), 0.0);
        // Screen right is +X when level and facing +Z
        let right = up.cross(&forward);

        match try_normalize(&right) {
            Some(right) => Self {
                forward,
                up: forward.cross(&right),
                right,
            },
            // Looking straight up or down with no roll
            None => Self { forward, up, right },
        }
    }

    /// Express a camera-relative offset in (right, up, forward) coordinates.
    pub fn to_camera(&self, relative: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            relative.dot(&self.right),
            relative.dot(&self.up),
            relative.dot(&self.forward),
        )
    }
}

/// Perspective projection onto a fixed-size viewport, plus the 2D helpers
/// the HUD uses.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraProjector {
    width: f64,
    height: f64,
    fov_deg: f64,
    focal_length: f64,
}

impl Default for CameraProjector {
    fn default() -> Self {
        Self::from_render(&RenderConfig::default())
    }
}

impl CameraProjector {
    pub fn new(width: u32, height: u32, fov_deg: f64) -> Self {
        let width = width as f64;
        Self {
            width,
            height: height as f64,
            fov_deg,
            focal_length: width / (2.0 * (deg_to_rad(fov_deg) / 2.0).tan()),
        }
    }

    pub fn from_render(render: &RenderConfig) -> Self {
        Self::new(render.screen_width, render.screen_height, render.fov)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn fov(&self) -> f64 {
        self.fov_deg
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Screen centre, where the crosshair sits.
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Project a world point seen from a camera at `camera_position` with `camera_rotation`.
    ///
    /// Returns `None` for points at or behind the near plane.
    pub fn project(
        &self,
        world_point: &Vector3<f64>,
        camera_position: &Vector3<f64>,
        camera_rotation: &Vector3<f64>,
    ) -> Option<ScreenPoint> {
        let basis = CameraBasis::from_rotation(camera_rotation);
        let camera = basis.to_camera(&(world_point - camera_position));

        if camera.z <= BEHIND_CAMERA_EPSILON {
            return None;
        }

        let (cx, cy) = self.center();
        let screen_x = cx + camera.x * self.focal_length / camera.z;
        let screen_y = cy - camera.y * self.focal_length / camera.z;

        Some(ScreenPoint {
            x: screen_x.round() as i32,
            y: screen_y.round() as i32,
            depth: camera.z,
        })
    }

    /// Fixed isometric view used by the overview map.
    pub fn project_isometric(&self, world_point: &Vector3<f64>) -> (i32, i32) {
        let (cx, cy) = self.center();
        let iso_x = (world_point.x - world_point.z * 0.5) * 0.8;
        let iso_y = (world_point.y + (world_point.x + world_point.z) * 0.2) * 0.6;
        ((cx + iso_x) as i32, (cy + iso_y) as i32)
    }

    /// Screen row of the artificial horizon for the given pitch [deg] and altitude.
    pub fn horizon_y(&self, pitch: f64, altitude: f64) -> i32 {
        let height = self.height as i32;
        let pitch_offset = (pitch * 5.0) as i32;
        let altitude_offset = (altitude / 100.0 * 150.0) as i32;
        let mut horizon = height / 2 + pitch_offset + altitude_offset;

        if altitude > 400.0 {
            horizon = horizon.max(height - 100);
        } else if altitude < 50.0 {
            horizon = horizon.min(height / 3);
        }

        horizon.min(height - 10).max(50)
    }

    /// Sprite scale for an object at `depth`; never drops below 0.1.
    pub fn distance_scale_factor(depth: f64, base_distance: f64) -> f64 {
        if depth <= 0.0 {
            return 0.0;
        }
        (base_distance / depth).max(0.1)
    }
}

/// Free-standing form of [`CameraProjector::project`] for callers without a projector.
pub fn project(
    world_point: &Vector3<f64>,
    camera_position: &Vector3<f64>,
    camera_rotation: &Vector3<f64>,
    screen_width: u32,
    screen_height: u32,
    fov_deg: f64,
) -> Option<ScreenPoint> {
    CameraProjector::new(screen_width, screen_height, fov_deg).project(
        world_point,
        camera_position,
        camera_rotation,
    )
}

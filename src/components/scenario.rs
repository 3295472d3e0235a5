use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box the aircraft must avoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Centre of the box
    pub position: Vector3<f64>,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Obstacle {
    pub fn new(position: Vector3<f64>, width: f64, height: f64, depth: f64) -> Self {
        Self {
            position,
            width,
            height,
            depth,
        }
    }

    pub fn half_extents(&self) -> Vector3<f64> {
        Vector3::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0)
    }

    /// Sphere radius used by the proximity test: the largest half-extent.
    pub fn bounding_radius(&self) -> f64 {
        self.width.max(self.height).max(self.depth) / 2.0
    }

    /// Box-vs-box overlap with a cube of side `size` centred at `point`.
    pub fn overlaps_box(&self, point: &Vector3<f64>, size: f64) -> bool {
        let delta = (point - self.position).abs();
        let reach = self.half_extents().add_scalar(size / 2.0);
        delta.x < reach.x && delta.y < reach.y && delta.z < reach.z
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TargetKind {
    /// Basic navigation point
    #[default]
    Waypoint,
    /// Scored research checkpoint
    Checkpoint,
    /// Position marker for altitude tasks
    Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub position: Vector3<f64>,
    pub radius: f64,
    pub kind: TargetKind,
    collected: bool,
}

impl Target {
    pub fn new(position: Vector3<f64>, radius: f64, kind: TargetKind) -> Self {
        Self {
            position,
            radius,
            kind,
            collected: false,
        }
    }

    pub fn waypoint(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self::new(Vector3::new(x, y, z), radius, TargetKind::Waypoint)
    }

    pub fn checkpoint(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self::new(Vector3::new(x, y, z), radius, TargetKind::Checkpoint)
    }

    pub fn marker(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self::new(Vector3::new(x, y, z), radius, TargetKind::Marker)
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Flip to collected. Returns false if it already was.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

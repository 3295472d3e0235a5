use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::{CrashCause, CrashEvent, DroneState, Obstacle, PlayerController, Target, TargetCollectedEvent},
    resources::{CameraProjector, FeatureToggles, MissionProgress, Scenario, ScreenPoint, SimulationConfig, WorldConfig},
    utils::{CROSSHAIR_TOLERANCE_PX, LOOSE_COLLECTION_DISTANCE},
};

/// Collision predicates over state snapshots. Nothing here mutates the drone;
/// callers decide how to react.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CollisionDetector {
    world: WorldConfig,
    projector: CameraProjector,
}

impl Default for CollisionDetector {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

/// What the collision pass found in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionOutcome {
    pub crash: Option<CrashCause>,
    /// Index of the target collected this tick.
    pub collected: Option<usize>,
}

impl CollisionDetector {
    pub fn new(world: WorldConfig, projector: CameraProjector) -> Self {
        Self { world, projector }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.world.clone(), CameraProjector::from_render(&config.render))
    }

    pub fn projector(&self) -> &CameraProjector {
        &self.projector
    }

    pub fn is_ground_collision(&self, y: f64) -> bool {
        y >= self.world.crash_threshold
    }

    pub fn is_ceiling_collision(&self, y: f64) -> bool {
        y <= self.world.ceiling_y()
    }

    /// Sphere-sphere overlap, strict.
    pub fn check_3d_collision(a: &Vector3<f64>, b: &Vector3<f64>, radius_a: f64, radius_b: f64) -> bool {
        (a - b).norm() < radius_a + radius_b
    }

    /// Both points on screen and within `threshold` pixels of each other.
    pub fn check_screen_space_collision(
        a: Option<&ScreenPoint>,
        b: Option<&ScreenPoint>,
        threshold: f64,
    ) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a.distance_to(b.x as f64, b.y as f64) < threshold,
            _ => false,
        }
    }

    /// True when a projected point sits strictly closer than `tolerance` pixels to the crosshair.
    pub fn check_crosshair_alignment(&self, point: Option<&ScreenPoint>, tolerance: f64) -> bool {
        let (cx, cy) = self.projector.center();
        point.is_some_and(|p| p.distance_to(cx, cy) < tolerance)
    }

    /// Index of the first obstacle the drone touches.
    ///
    /// A sphere of the obstacle's largest half-extent is tested first, then the
    /// box against the drone's own bounding cube.
    pub fn check_obstacle_collision(&self, state: &DroneState, obstacles: &[Obstacle]) -> Option<usize> {
        obstacles.iter().position(|obstacle| {
            Self::check_3d_collision(
                &state.position,
                &obstacle.position,
                state.radius(),
                obstacle.bounding_radius(),
            ) || obstacle.overlaps_box(&state.position, state.size)
        })
    }

    /// Collect at most one target this tick and return its index.
    ///
    /// Targets are scanned in stored order and collected ones are skipped. A target
    /// counts when the drone sphere touches it, or, when a camera rotation is given,
    /// when it sits under the crosshair and within the loose collection distance.
    pub fn check_target_collection(
        &self,
        state: &DroneState,
        targets: &mut [Target],
        camera_rotation: Option<&Vector3<f64>>,
    ) -> Option<usize> {
        let index = targets.iter().position(|target| {
            if target.is_collected() {
                return false;
            }
            if Self::check_3d_collision(&state.position, &target.position, state.radius(), target.radius) {
                return true;
            }
            camera_rotation.is_some_and(|rotation| {
                let projected = self.projector.project(&target.position, &state.position, rotation);
                self.check_crosshair_alignment(projected.as_ref(), CROSSHAIR_TOLERANCE_PX)
                    && (state.position - target.position).norm() < LOOSE_COLLECTION_DISTANCE
            })
        })?;

        targets[index].collect();
        Some(index)
    }

    /// Keep a position inside the horizontal world bounds; Y is left alone.
    pub fn clamp(&self, position: &Vector3<f64>) -> Vector3<f64> {
        self.world.clamp_horizontal(position)
    }

    /// Run the per-tick collision pass on a freshly integrated state.
    ///
    /// Obstacle and ground contact set `crashed`; a drone that is already down collects nothing.
    pub fn resolve(
        &self,
        state: &mut DroneState,
        scenario: &mut Scenario,
        toggles: &FeatureToggles,
    ) -> CollisionOutcome {
        let mut outcome = CollisionOutcome::default();
        if state.crashed {
            return outcome;
        }

        if toggles.obstacle_collision {
            if let Some(index) = self.check_obstacle_collision(state, &scenario.obstacles) {
                state.crashed = true;
                outcome.crash = Some(CrashCause::Obstacle(index));
                return outcome;
            }
        }

        if toggles.ground_collision && self.is_ground_collision(state.position.y) {
            state.crashed = true;
            outcome.crash = Some(CrashCause::Ground);
            return outcome;
        }

        let rotation = state.rotation;
        outcome.collected = self.check_target_collection(state, &mut scenario.targets, Some(&rotation));
        outcome
    }
}

pub fn collision_detection_system(
    mut query: Query<(Entity, &mut DroneState), With<PlayerController>>,
    detector: Res<CollisionDetector>,
    config: Res<SimulationConfig>,
    mut scenario: ResMut<Scenario>,
    mut progress: ResMut<MissionProgress>,
    mut crash_events: EventWriter<CrashEvent>,
    mut collected_events: EventWriter<TargetCollectedEvent>,
) {
    for (entity, mut state) in query.iter_mut() {
        let outcome = detector.resolve(&mut state, &mut scenario, &config.toggles);

        if let Some(cause) = outcome.crash {
            warn!("Drone {:?} crashed: {:?}", entity, cause);
            crash_events.send(CrashEvent { entity, cause });
        }

        if let Some(target) = outcome.collected {
            let score = progress.award_target();
            info!(
                "Target {} collected at {:.1} km/h, score {}",
                target,
                state.speed_kmh(),
                score
            );
            collected_events.send(TargetCollectedEvent {
                entity,
                target,
                score,
                speed_kmh: state.speed_kmh(),
            });
        }
    }
}

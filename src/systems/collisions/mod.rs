mod detection;

pub use detection::{collision_detection_system, CollisionDetector, CollisionOutcome};

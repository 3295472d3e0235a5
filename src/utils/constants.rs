pub const REFERENCE_TICK_RATE: f64 = 60.0; // Hz, all per-tick tuning values assume this rate
pub const MS_TO_KMH: f64 = 3.6;
pub const METERS_PER_KM: f64 = 1000.0;

pub const DRONE_SIZE: f64 = 25.0; // bounding size of the airframe [world units]
pub const FULL_BATTERY: f64 = 100.0; // %
pub const LOW_BATTERY_THRESHOLD: f64 = 20.0; // %

pub const BEHIND_CAMERA_EPSILON: f64 = 0.1; // minimum camera-space depth that still projects
pub const CROSSHAIR_TOLERANCE_PX: f64 = 50.0;
pub const LOOSE_COLLECTION_DISTANCE: f64 = 60.0;

pub const TARGET_SCORE: u32 = 10;
pub const RANGE_FAILURE_PERCENT: f64 = 95.0;

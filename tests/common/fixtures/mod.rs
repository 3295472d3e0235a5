mod drone;

// Re-export test fixtures
pub use config::*;
pub use drone::*;

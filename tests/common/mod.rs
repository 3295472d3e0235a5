mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_drone_state_valid, assert_position_eq};
pub use fixtures::*;
pub use test_app::{EventLog, TestApp, TestAppBuilder};

mod projection;

pub use projection::{project, CameraBasis, CameraProjector, ScreenPoint};

// src/lib.rs

// Eigene Module deklarieren
pub mod camera;
pub mod error;
pub mod sphere;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{RigError, RigResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        camera::{
            config::RigConfig,
            pose::{Pose, look_at},
            rig::{CameraPose, build_rig},
        },
        error::{RigError, RigResult},
        sphere::sampling::{PointRole, SpacingSpec, SpherePoint},
        types::*,
    };
}

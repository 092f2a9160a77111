// src/camera/mod.rs

// Deklaration der Untermodule für Kamera-spezifische Funktionalität
pub mod config;
pub mod pose;
pub mod rig;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Elemente
pub use self::config::RigConfig;
pub use self::pose::{Pose, look_at};
pub use self::rig::{CameraPose, build_rig};

// src/types.rs

// Re-export häufig verwendete externe Typen
pub use nalgebra::{Matrix3, Matrix4, Rotation3, Vector3};

// Einheitlicher Punkt-Typ für das gesamte Crate
pub type Point3D = Vector3<f32>;

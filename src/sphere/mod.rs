// src/sphere/mod.rs

// Deklaration der Untermodule für Kugel-spezifische Funktionalität
pub mod sampling;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Elemente
pub use self::sampling::{PointRole, SpacingSpec, SpherePoint};

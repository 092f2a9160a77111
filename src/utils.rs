// src/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Allgemeine Toleranz für Float-Vergleiche
    pub const EPSILON: f32 = 1e-6;
    /// Untergrenze für Radius und Punktabstand (verhindert Division durch Null)
    pub const MIN_DIMENSION: f32 = 1e-6;
    /// Unterhalb dieses Ring-Radius kollabiert ein Breitenkreis zu einem Punkt
    pub const RING_COLLAPSE_RADIUS: f32 = 1e-9;
    /// Länge, unterhalb derer ein Richtungsvektor als degeneriert gilt
    pub const PARALLEL_EPSILON: f32 = 1e-8;
    /// Zulässiger Bereich für den Breitengrad-Schritt in Radiant
    pub const MIN_LATITUDE_STEP: f32 = 1e-4;
    pub const MAX_LATITUDE_STEP: f32 = std::f32::consts::FRAC_PI_4;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f32) -> bool {
        a.abs() < EPSILON
    }
}

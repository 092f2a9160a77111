// src/camera/config.rs
use crate::error::{RigError, RigResult};
use crate::types::Point3D;
use crate::utils::constants;
use serde::{Deserialize, Serialize};

/// Konfiguration eines sphärischen Kamera-Rigs.
///
/// Wird als Wert übergeben; es gibt keinen globalen Zustand. Die Defaults
/// entsprechen einem Rig mit einem einzelnen Layer um den Ursprung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigConfig {
    /// Zielpunkt, auf den alle Kameras blicken (zugleich Kugelzentrum)
    pub target: Point3D,
    /// Grobe Oben-Richtung der Kameras
    pub up: Point3D,
    /// Radius der äußersten Kamera-Kugel
    pub radius: f32,
    /// Maximal erlaubter Abstand benachbarter Kameras auf einem Ring
    pub max_spacing: f32,
    /// Namenspräfix der erzeugten Kameras
    pub name_prefix: String,
    /// Skalierungsfaktoren für konzentrische Kugel-Layer
    pub layer_scales: Vec<f32>,
}

impl RigConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: Point3D) -> Self {
        self.target = target;
        self
    }

    pub fn with_up(mut self, up: Point3D) -> Self {
        self.up = up;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_max_spacing(mut self, max_spacing: f32) -> Self {
        self.max_spacing = max_spacing;
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn with_layer_scales(mut self, scales: Vec<f32>) -> Self {
        self.layer_scales = scales;
        self
    }

    pub fn validate(&self) -> RigResult<()> {
        if self.radius <= 0.0 {
            return Err(RigError::InvalidConfiguration {
                message: "Sphere radius must be greater than zero".to_string(),
            });
        }

        if self.max_spacing <= 0.0 {
            return Err(RigError::InvalidConfiguration {
                message: "Max spacing must be greater than zero".to_string(),
            });
        }

        if self.name_prefix.is_empty() {
            return Err(RigError::InvalidConfiguration {
                message: "Camera name prefix must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Wirksame Layer-Skalierungen: nicht-positive Werte werden verworfen,
    /// eine leere Liste fällt auf einen einzelnen Layer mit Skalierung 1.0
    /// zurück.
    pub fn effective_layer_scales(&self) -> Vec<f32> {
        let scales: Vec<f32> = self
            .layer_scales
            .iter()
            .copied()
            .filter(|scale| *scale > 0.0)
            .collect();

        if scales.is_empty() { vec![1.0] } else { scales }
    }

    /// Oben-Richtung als Einheitsvektor; (nahezu) Null-Länge fällt auf +Z
    /// zurück
    pub fn unit_up(&self) -> Point3D {
        if self.up.norm() < constants::PARALLEL_EPSILON {
            Point3D::z()
        } else {
            self.up.normalize()
        }
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            target: Point3D::zeros(),
            up: Point3D::z(),
            radius: 5.0,
            max_spacing: 0.6,
            name_prefix: "SphereCam_".to_string(),
            layer_scales: vec![1.0],
        }
    }
}

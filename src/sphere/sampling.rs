// src/sphere/sampling.rs
use crate::error::{RigError, RigResult};
use crate::types::Point3D;
use crate::utils::constants;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Rolle eines Punktes innerhalb einer abgetasteten Punktmenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointRole {
    /// Gewöhnlicher Ring-Punkt
    None,
    /// Nordpol bei (0, 0, +R)
    Top,
    /// Südpol bei (0, 0, -R)
    Bottom,
}

/// Ein Punkt auf der Kugeloberfläche im lokalen Koordinatensystem der Kugel
/// (Zentrum im Ursprung, Betrag der Position == Kugelradius)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpherePoint {
    pub position: Point3D,
    pub role: PointRole,
}

impl SpherePoint {
    pub fn new(position: Point3D, role: PointRole) -> Self {
        Self { position, role }
    }

    /// Prüft ob der Punkt einer der beiden Pol-Punkte ist
    pub fn is_pole(&self) -> bool {
        self.role != PointRole::None
    }
}

/// Kugelradius und maximal erlaubter Abstand benachbarter Punkte
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingSpec {
    pub sphere_radius: f32,
    pub max_spacing: f32,
}

impl SpacingSpec {
    pub fn new(sphere_radius: f32, max_spacing: f32) -> Self {
        Self {
            sphere_radius,
            max_spacing,
        }
    }

    pub fn validate(&self) -> RigResult<()> {
        if self.sphere_radius <= 0.0 {
            return Err(RigError::InvalidConfiguration {
                message: "Sphere radius must be greater than zero".to_string(),
            });
        }

        if self.max_spacing <= 0.0 {
            return Err(RigError::InvalidConfiguration {
                message: "Max spacing must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Radius, abgesichert gegen (nahezu) Null
    fn clamped_radius(&self) -> f32 {
        self.sphere_radius.max(constants::MIN_DIMENSION)
    }

    /// Punktabstand, abgesichert gegen (nahezu) Null
    fn clamped_spacing(&self) -> f32 {
        self.max_spacing.max(constants::MIN_DIMENSION)
    }

    /// Breitengrad-Schritt in Radiant, geklemmt auf einen gutmütigen Bereich
    fn latitude_step(&self) -> f32 {
        (self.clamped_spacing() / self.clamped_radius())
            .clamp(constants::MIN_LATITUDE_STEP, constants::MAX_LATITUDE_STEP)
    }

    /// Erzeugt eine deterministische, nahezu gleichmäßige Punktverteilung
    /// auf der Kugeloberfläche.
    ///
    /// Die beiden Pole werden immer zuerst ausgegeben (erst BOTTOM, dann
    /// TOP), unabhängig vom gewählten Abstand. Danach folgen Breitenkreise
    /// von Süd nach Nord; jeder Ring wird in aufsteigender Azimut-Reihenfolge
    /// durchlaufen. Die Punktanzahl pro Ring ist so gewählt, dass der
    /// Sehnenabstand benachbarter Ring-Punkte `max_spacing` nicht
    /// überschreitet.
    ///
    /// Die Funktion ist total: Eingaben unterhalb der numerischen
    /// Untergrenzen werden geklemmt statt abgelehnt.
    pub fn generate(&self) -> Vec<SpherePoint> {
        let radius = self.clamped_radius();
        let spacing = self.clamped_spacing();
        let dphi = self.latitude_step();

        let mut points = vec![
            SpherePoint::new(Point3D::new(0.0, 0.0, -radius), PointRole::Bottom),
            SpherePoint::new(Point3D::new(0.0, 0.0, radius), PointRole::Top),
        ];

        let mut phi = -FRAC_PI_2 + dphi;
        while phi < FRAC_PI_2 - dphi * 0.5 {
            let z = radius * phi.sin();
            let ring_radius = (radius * phi.cos()).max(0.0);

            // Ringe direkt an den Polen kollabieren zu einem Punkt und sind
            // durch die expliziten Pol-Punkte bereits abgedeckt.
            if ring_radius < constants::RING_COLLAPSE_RADIUS {
                phi += dphi;
                continue;
            }

            let circumference = TAU * ring_radius;
            let count = ((circumference / spacing).ceil() as usize).max(1);

            for i in 0..count {
                let theta = TAU * i as f32 / count as f32;
                points.push(SpherePoint::new(
                    Point3D::new(theta.cos() * ring_radius, theta.sin() * ring_radius, z),
                    PointRole::None,
                ));
            }

            phi += dphi;
        }

        points
    }
}

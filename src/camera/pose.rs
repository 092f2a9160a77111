// src/camera/pose.rs
use crate::error::{RigError, RigResult};
use crate::types::{Matrix3, Matrix4, Point3D, Rotation3};
use crate::utils::constants;
use serde::{Deserialize, Serialize};

/// Starre Transformation einer Kamera: Rotation plus Translation.
///
/// Die Spalten der Rotation sind `(right, up, back)`; die Kamera blickt
/// entlang ihrer negativen dritten Achse, `back` zeigt also vom Ziel weg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub rotation: Rotation3<f32>,
    pub translation: Point3D,
}

impl Pose {
    /// Rechts-Achse der Kamera (erste Rotationsspalte)
    pub fn right(&self) -> Point3D {
        self.rotation.matrix().column(0).clone_owned()
    }

    /// Oben-Achse der Kamera (zweite Rotationsspalte)
    pub fn up(&self) -> Point3D {
        self.rotation.matrix().column(1).clone_owned()
    }

    /// Rückwärts-Achse der Kamera (dritte Rotationsspalte, zeigt vom Ziel weg)
    pub fn back(&self) -> Point3D {
        self.rotation.matrix().column(2).clone_owned()
    }

    /// Blickrichtung der Kamera
    pub fn forward(&self) -> Point3D {
        -self.back()
    }

    /// Homogene 4x4-Matrix `[R | t; 0 0 0 1]`
    pub fn to_homogeneous(&self) -> Matrix4<f32> {
        let mut m = self.rotation.to_homogeneous();
        m.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.translation);
        m
    }

    /// Wendet die Transformation auf einen Punkt im Kamera-System an
    pub fn transform_point(&self, local: Point3D) -> Point3D {
        self.rotation * local + self.translation
    }
}

/// Deterministische Referenzachse, die garantiert nicht parallel zu
/// `direction` ist (für den Fallback bei degeneriertem Oben-Vektor)
fn reference_axis(direction: &Point3D) -> Point3D {
    if direction.x.abs() < 0.9 {
        Point3D::x()
    } else {
        Point3D::y()
    }
}

/// Erzeugt eine Kamera-Pose, die von `position` auf `target` blickt.
///
/// `up_hint` gibt die grobe Oben-Richtung vor. Ist sie (nahezu) parallel
/// zur Blickrichtung, wird stattdessen eine deterministisch gewählte, zur
/// Blickrichtung orthogonale Rechts-Achse konstruiert; der konkrete
/// Fallback-Vektor ist nicht Teil des Kontrakts, nur seine Orthogonalität.
///
/// Fallen `position` und `target` zusammen, ist die Blickrichtung
/// undefiniert und es wird `RigError::DegenerateDirection` zurückgegeben.
pub fn look_at(position: Point3D, target: Point3D, up_hint: Point3D) -> RigResult<Pose> {
    let view = target - position;
    if view.norm() < constants::PARALLEL_EPSILON {
        return Err(RigError::DegenerateDirection { position });
    }
    let forward = view.normalize();

    let mut right = forward.cross(&up_hint);
    if right.norm() < constants::PARALLEL_EPSILON {
        right = forward.cross(&reference_axis(&forward));
    }
    let right = right.normalize();
    let true_up = right.cross(&forward).normalize();

    let rotation =
        Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[right, true_up, -forward]));

    Ok(Pose {
        rotation,
        translation: position,
    })
}

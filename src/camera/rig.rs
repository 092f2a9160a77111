// src/camera/rig.rs
use crate::camera::config::RigConfig;
use crate::camera::pose::{Pose, look_at};
use crate::error::RigResult;
use crate::sphere::sampling::{PointRole, SpacingSpec};
use serde::{Deserialize, Serialize};

/// Eine benannte Kamera-Pose innerhalb eines Rigs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub name: String,
    /// Index des Kugel-Layers, aus dem die Kamera stammt
    pub layer: usize,
    pub role: PointRole,
    pub pose: Pose,
}

/// Name einer Kamera: `{prefix}L{layer:02}_{index:03}`, Pol-Kameras tragen
/// zusätzlich die Suffixe `_BOTTOM` bzw. `_TOP`
fn camera_name(prefix: &str, layer: usize, index: usize, role: PointRole) -> String {
    let base = format!("{prefix}L{layer:02}_{index:03}");
    match role {
        PointRole::Bottom => format!("{base}_BOTTOM"),
        PointRole::Top => format!("{base}_TOP"),
        PointRole::None => base,
    }
}

/// Baut das vollständige Kamera-Rig aus der Konfiguration auf.
///
/// Pro wirksamem Layer wird eine Kugel mit Radius `radius * scale` um das
/// Ziel abgetastet, jede Kamera blickt anschließend auf das Ziel. Der
/// Punkt-Index beginnt in jedem Layer wieder bei Null, die Reihenfolge der
/// Kameras folgt der Reihenfolge des Samplers.
pub fn build_rig(config: &RigConfig) -> RigResult<Vec<CameraPose>> {
    config.validate()?;

    let up = config.unit_up();
    let mut cameras = Vec::new();

    for (layer, scale) in config.effective_layer_scales().into_iter().enumerate() {
        let spec = SpacingSpec::new(config.radius * scale, config.max_spacing);

        for (index, point) in spec.generate().into_iter().enumerate() {
            let world = config.target + point.position;
            let pose = look_at(world, config.target, up)?;

            cameras.push(CameraPose {
                name: camera_name(&config.name_prefix, layer, index, point.role),
                layer,
                role: point.role,
                pose,
            });
        }
    }

    Ok(cameras)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point3D;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_layer_naming() {
        let config = RigConfig::new()
            .with_radius(1.0)
            .with_max_spacing(1.0)
            .with_name_prefix("Cam_");

        let cameras = build_rig(&config).unwrap();

        assert_eq!(cameras.len(), 19);
        assert_eq!(cameras[0].name, "Cam_L00_000_BOTTOM");
        assert_eq!(cameras[1].name, "Cam_L00_001_TOP");
        assert_eq!(cameras[2].name, "Cam_L00_002");
        assert_eq!(cameras[18].name, "Cam_L00_018");
    }

    #[test]
    fn test_layer_count_matches_sampler() {
        let config = RigConfig::new()
            .with_radius(2.0)
            .with_max_spacing(0.8)
            .with_layer_scales(vec![1.0, 0.5]);

        let cameras = build_rig(&config).unwrap();

        let outer_expected = SpacingSpec::new(2.0, 0.8).generate().len();
        let inner_expected = SpacingSpec::new(1.0, 0.8).generate().len();

        let outer = cameras.iter().filter(|c| c.layer == 0).count();
        let inner = cameras.iter().filter(|c| c.layer == 1).count();

        assert_eq!(outer, outer_expected);
        assert_eq!(inner, inner_expected);
        assert_eq!(cameras.len(), outer_expected + inner_expected);

        // Index beginnt pro Layer wieder bei Null
        assert!(cameras.iter().any(|c| c.name == "SphereCam_L01_000_BOTTOM"));
    }

    #[test]
    fn test_every_camera_looks_at_target() {
        let target = Point3D::new(1.0, 2.0, 3.0);
        let config = RigConfig::new()
            .with_target(target)
            .with_radius(4.0)
            .with_max_spacing(2.0);

        let cameras = build_rig(&config).unwrap();

        for camera in &cameras {
            let away = (camera.pose.translation - target).normalize();
            assert_relative_eq!(camera.pose.back().dot(&away), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_pole_cameras_sit_on_vertical_axis() {
        let target = Point3D::new(-2.0, 0.5, 1.0);
        let config = RigConfig::new().with_target(target).with_radius(3.0);

        let cameras = build_rig(&config).unwrap();

        let bottom = cameras.iter().find(|c| c.role == PointRole::Bottom).unwrap();
        let top = cameras.iter().find(|c| c.role == PointRole::Top).unwrap();

        assert_relative_eq!(
            (bottom.pose.translation - (target + Point3D::new(0.0, 0.0, -3.0))).norm(),
            0.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            (top.pose.translation - (target + Point3D::new(0.0, 0.0, 3.0))).norm(),
            0.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RigConfig::new().with_radius(-1.0);
        assert!(build_rig(&config).is_err());
    }
}

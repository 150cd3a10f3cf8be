//! Mouselook: the orientation collaborator for the camera pose.
//!
//! Locomotion never writes orientation; this is the only writer of
//! `yaw`/`pitch`/`look_dir`.

use scene_core::CameraPose;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouselookCfg {
    /// Degrees of rotation per mouse count.
    pub sensitivity_deg_per_count: f32,
    pub invert_y: bool,
    pub min_pitch_deg: f32,
    pub max_pitch_deg: f32,
}

impl Default for MouselookCfg {
    fn default() -> Self {
        Self {
            sensitivity_deg_per_count: 0.15,
            invert_y: false,
            min_pitch_deg: -80.0,
            max_pitch_deg: 80.0,
        }
    }
}

/// Apply a raw mouse delta (counts) to yaw/pitch and refresh `look_dir`.
pub fn apply_mouse_delta(cfg: &MouselookCfg, pose: &mut CameraPose, dx: f32, dy: f32) {
    let to_rad = cfg.sensitivity_deg_per_count.to_radians();
    let yaw = pose.yaw + dx * to_rad;
    let mut pitch = pose.pitch + (if cfg.invert_y { dy } else { -dy }) * to_rad;
    pitch = pitch.clamp(
        cfg.min_pitch_deg.to_radians(),
        cfg.max_pitch_deg.to_radians(),
    );
    pose.yaw = yaw;
    pose.pitch = pitch;
    pose.look_dir = look_dir_from(yaw, pitch);
}

/// Unit look direction for spherical yaw/pitch (yaw 0 faces +X).
#[must_use]
pub fn look_dir_from(yaw: f32, pitch: f32) -> glam::Vec3 {
    glam::Vec3::new(
        pitch.cos() * yaw.cos(),
        pitch.sin(),
        pitch.cos() * yaw.sin(),
    )
    .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_clamped() {
        let cfg = MouselookCfg {
            sensitivity_deg_per_count: 1.0,
            min_pitch_deg: -30.0,
            max_pitch_deg: 30.0,
            ..Default::default()
        };
        let mut pose = CameraPose::default();
        apply_mouse_delta(&cfg, &mut pose, 0.0, -1000.0);
        assert!(pose.pitch <= cfg.max_pitch_deg.to_radians() + 1e-6);
        apply_mouse_delta(&cfg, &mut pose, 0.0, 1000.0);
        assert!(pose.pitch >= cfg.min_pitch_deg.to_radians() - 1e-6);
    }

    #[test]
    fn invert_y_flips_pitch_sign() {
        let mut normal = CameraPose::default();
        let mut inverted = CameraPose::default();
        let mut cfg = MouselookCfg {
            sensitivity_deg_per_count: 0.5,
            ..Default::default()
        };
        apply_mouse_delta(&cfg, &mut normal, 0.0, 5.0);
        cfg.invert_y = true;
        apply_mouse_delta(&cfg, &mut inverted, 0.0, 5.0);
        assert!((normal.pitch + inverted.pitch).abs() < 1e-6);
        assert!(normal.pitch.abs() > 1e-6);
    }

    #[test]
    fn look_dir_stays_unit_length() {
        let cfg = MouselookCfg::default();
        let mut pose = CameraPose::default();
        apply_mouse_delta(&cfg, &mut pose, 123.0, -45.0);
        assert!((pose.look_dir.length() - 1.0).abs() < 1e-5);
    }
}

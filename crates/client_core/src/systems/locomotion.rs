//! First-person walk integration: camera-relative, ground-projected.

use crate::input::MoveAxes;
use glam::Vec3;
use scene_core::CameraPose;

/// Tuning for the walk integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocomotionCfg {
    /// Ground speed, meters per second.
    pub speed_mps: f32,
    /// Fixed viewer eye height above the floor, meters.
    pub eye_height_m: f32,
}

impl Default for LocomotionCfg {
    fn default() -> Self {
        Self {
            speed_mps: 4.0,
            eye_height_m: 1.5,
        }
    }
}

/// Advance the camera position by one frame of held-key movement.
///
/// The move vector is normalized before scaling by `speed * dt`, so
/// diagonal displacement equals cardinal displacement. Orientation is never
/// touched, and `eye.y` is clamped to the eye height on every call — with
/// or without movement input.
pub fn update(cfg: &LocomotionCfg, pose: &mut CameraPose, axes: MoveAxes, dt: f32) {
    if axes.is_zero() {
        pose.eye.y = cfg.eye_height_m;
        return;
    }
    // Ground-projected basis. Looking straight up or down leaves no
    // horizontal forward; normalize_or_zero keeps that contribution at
    // zero instead of producing NaNs.
    let fwd = Vec3::new(pose.look_dir.x, 0.0, pose.look_dir.z).normalize_or_zero();
    let right = fwd.cross(pose.up).normalize_or_zero();
    let v = (fwd * f32::from(axes.forward) + right * f32::from(axes.strafe)).normalize_or_zero();
    pose.eye += v * cfg.speed_mps * dt;
    pose.eye.y = cfg.eye_height_m;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_looking(dir: Vec3) -> CameraPose {
        CameraPose {
            eye: Vec3::new(0.0, 1.5, 0.0),
            look_dir: dir.normalize(),
            ..Default::default()
        }
    }

    #[test]
    fn idle_frame_clamps_eye_height_only() {
        let cfg = LocomotionCfg::default();
        let mut pose = pose_looking(Vec3::Z);
        pose.eye.y = 3.2; // external vertical displacement
        update(&cfg, &mut pose, MoveAxes::default(), 0.016);
        assert_eq!(pose.eye, Vec3::new(0.0, cfg.eye_height_m, 0.0));
    }

    #[test]
    fn forward_displacement_is_speed_times_dt() {
        let cfg = LocomotionCfg::default();
        let mut pose = pose_looking(Vec3::Z);
        let start = pose.eye;
        update(&cfg, &mut pose, MoveAxes { forward: 1, strafe: 0 }, 0.25);
        let moved = pose.eye - start;
        assert!((moved.length() - cfg.speed_mps * 0.25).abs() < 1e-4);
        assert!(moved.z > 0.0);
    }

    #[test]
    fn diagonal_speed_equals_cardinal_speed() {
        let cfg = LocomotionCfg::default();
        let dt = 0.016;
        let mut cardinal = pose_looking(Vec3::Z);
        update(&cfg, &mut cardinal, MoveAxes { forward: 1, strafe: 0 }, dt);
        let mut diagonal = pose_looking(Vec3::Z);
        update(&cfg, &mut diagonal, MoveAxes { forward: 1, strafe: 1 }, dt);
        let a = (cardinal.eye - Vec3::new(0.0, cfg.eye_height_m, 0.0)).length();
        let b = (diagonal.eye - Vec3::new(0.0, cfg.eye_height_m, 0.0)).length();
        assert!((a - b).abs() < 1e-5);
    }

    #[test]
    fn pitched_look_does_not_slow_walking() {
        let cfg = LocomotionCfg::default();
        let mut pose = pose_looking(Vec3::new(0.0, -0.8, 0.6));
        let start = pose.eye;
        update(&cfg, &mut pose, MoveAxes { forward: 1, strafe: 0 }, 0.1);
        let moved = pose.eye - start;
        // Full ground speed even though the camera pitches down.
        assert!((moved.length() - cfg.speed_mps * 0.1).abs() < 1e-4);
        assert!((moved.y).abs() < 1e-6);
    }

    #[test]
    fn straight_down_look_yields_no_motion() {
        let cfg = LocomotionCfg::default();
        let mut pose = pose_looking(Vec3::NEG_Y);
        update(&cfg, &mut pose, MoveAxes { forward: 1, strafe: 0 }, 0.1);
        assert_eq!(pose.eye, Vec3::new(0.0, cfg.eye_height_m, 0.0));
    }

    #[test]
    fn strafe_is_perpendicular_to_forward() {
        let cfg = LocomotionCfg::default();
        let mut pose = pose_looking(Vec3::Z);
        update(&cfg, &mut pose, MoveAxes { forward: 0, strafe: 1 }, 0.1);
        // Looking +Z with +Y up, screen-right is -X.
        assert!(pose.eye.x < 0.0);
        assert!(pose.eye.z.abs() < 1e-6);
    }
}

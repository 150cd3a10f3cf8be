//! Reticle targeting: per-frame center-ray acquisition and the aim marker.

use glam::{EulerRot, Quat, Vec3};
use scene_core::{CameraPose, Layer, NodeId, Scene, Transform};

/// Distance of the cosmetic aim marker in front of the eye, meters.
pub const MARKER_OFFSET_M: f32 = 1.5;

/// Nearest interactable currently under the reticle, or `None`.
///
/// The reticle sits at the viewport center, so the pick ray in world space
/// is exactly the camera forward ray. Recomputed every frame — camera
/// movement alone must invalidate the previous result, so nothing here is
/// cached or diffed.
#[must_use]
pub fn acquire(scene: &Scene, pose: &CameraPose) -> Option<NodeId> {
    let dir = pose.look_dir.normalize_or_zero();
    if dir == Vec3::ZERO {
        return None;
    }
    scene
        .raycast(pose.eye, dir, Layer::INTERACTABLE)
        .map(|hit| hit.node)
}

/// Aim-marker pose: fixed offset along the camera forward, orientation
/// matching the camera. Cosmetic feedback only — independent of hits.
#[must_use]
pub fn marker_pose(pose: &CameraPose) -> Transform {
    Transform {
        translation: pose.eye + pose.look_dir * MARKER_OFFSET_M,
        rotation: Quat::from_euler(EulerRot::YXZ, pose.yaw, pose.pitch, 0.0),
        scale: Vec3::ONE,
    }
}

//! Read-only controller façade consumed by the renderer.

use scene_core::{CameraPose, NodeId, Transform};

/// Per-frame outputs of the session: camera pose, current target, aim
/// marker, and the targeted object's prompt for the HUD.
#[derive(Default, Clone, Debug)]
pub struct ControllerState {
    pub camera: CameraPose,
    pub target: Option<NodeId>,
    pub marker: Transform,
    pub prompt: Option<String>,
}

impl ControllerState {
    #[inline]
    #[must_use]
    pub fn camera_pose(&self) -> CameraPose {
        self.camera
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn marker(&self) -> Transform {
        self.marker
    }

    #[inline]
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }
}

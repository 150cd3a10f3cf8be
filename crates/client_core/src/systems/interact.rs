//! Click-path interaction dispatch.
//!
//! A visual or collision mesh is usually a child of the larger logical
//! object that owns the behavior, so resolution walks the ownership chain
//! outward from the hit node instead of requiring the capability on the
//! exact leaf.

use scene_core::{NodeId, Scene};
use tracing::{debug, info};

/// First node from `hit` (inclusive) toward the root carrying an
/// interaction capability, or `None` when the whole chain is inert.
#[must_use]
pub fn resolve_owner(scene: &Scene, hit: NodeId) -> Option<NodeId> {
    let mut cur = Some(hit);
    while let Some(id) = cur {
        if scene.has_interaction(id) {
            return Some(id);
        }
        cur = scene.parent_of(id);
    }
    None
}

/// Dispatch one click against the current target.
///
/// No target, or a chain with no capability, is a silent no-op; the worst
/// outcome of a misconfigured scene is "interaction does nothing".
pub fn dispatch_click(scene: &mut Scene, target: Option<NodeId>) {
    let Some(hit) = target else { return };
    match resolve_owner(scene, hit) {
        Some(owner) => {
            info!(target: "interact", tag = scene.tag_of(owner), "click dispatch");
            scene.invoke_interaction(owner);
        }
        None => {
            debug!(target: "interact", tag = scene.tag_of(hit), "click on inert chain");
        }
    }
}

//! Component definitions shared by the client systems.

use glam::{Quat, Vec3};
use std::fmt;

/// Opaque scene node identifier (arena index). Stable for the life of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Layer bitmask used to filter raycast candidates.
///
/// A node is a candidate only when its layers intersect the query mask;
/// everything else is excluded before any distance comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layer(pub u32);

impl Layer {
    pub const NONE: Layer = Layer(0);
    /// Nodes eligible for reticle targeting.
    pub const INTERACTABLE: Layer = Layer(1 << 0);

    #[must_use]
    pub fn intersects(self, other: Layer) -> bool {
        self.0 & other.0 != 0
    }
}

/// Hit-test shape attached to a node, in node-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionShape {
    Sphere { center: Vec3, radius: f32 },
    Aabb { min: Vec3, max: Vec3 },
}

/// Local transform (translation + rotation + scale).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Read-only camera pose for renderer consumption.
///
/// Locomotion writes `eye` only; `look_dir`/`yaw`/`pitch` belong to the
/// mouselook collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look_dir: Vec3,
    pub up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            look_dir: Vec3::Z,
            up: Vec3::Y,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

/// Handler invoked with the owning node's tag when an interaction fires.
pub type InteractHandler = Box<dyn FnMut(&str)>;

/// Optional interaction capability carried by a node.
///
/// Objects without this capability are inert even when hit by the reticle
/// ray; dispatch walks the ownership chain looking for the first carrier.
pub struct Interaction {
    /// Short text the HUD may show while the object is targeted.
    pub prompt: String,
    pub handler: InteractHandler,
}

impl fmt::Debug for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

/// Relocation payload handed to the host's teleport capability.
///
/// Constructed at dispatch time and consumed immediately; never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleportRequest {
    /// Destination floor position, meters.
    pub position: Vec3,
    /// Facing after arrival, degrees; `None` keeps the current facing.
    pub yaw_deg: Option<f32>,
}

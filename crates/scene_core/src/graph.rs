//! Parent-linked node arena with layer-filtered raycasting.
//!
//! Ownership of children flows from the root downward; `parent` is a
//! non-owning back-reference used only to resolve the logical owner of a
//! visual/collision element.

use crate::components::{CollisionShape, Interaction, Layer, NodeId};
use crate::geom;
use glam::Vec3;

struct Node {
    tag: String,
    parent: Option<NodeId>,
    /// Translation relative to the parent (world when root).
    position: Vec3,
    layer: Layer,
    shape: Option<CollisionShape>,
    interaction: Option<Interaction>,
}

/// Result of a raycast against the interactable set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub node: NodeId,
    /// Entry distance along the ray, meters.
    pub t: f32,
}

/// Scene node arena.
#[derive(Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a node under `parent` (or at the root when `None`).
    ///
    /// Panics if `parent` is not a previously spawned node.
    pub fn spawn(&mut self, tag: impl Into<String>, parent: Option<NodeId>, position: Vec3) -> NodeId {
        if let Some(p) = parent {
            assert!((p.0 as usize) < self.nodes.len(), "spawn under unknown parent");
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            tag: tag.into(),
            parent,
            position,
            layer: Layer::NONE,
            shape: None,
            interaction: None,
        });
        id
    }

    pub fn set_layer(&mut self, id: NodeId, layer: Layer) {
        self.nodes[id.0 as usize].layer = layer;
    }

    pub fn set_shape(&mut self, id: NodeId, shape: CollisionShape) {
        self.nodes[id.0 as usize].shape = Some(shape);
    }

    pub fn set_interaction(&mut self, id: NodeId, interaction: Interaction) {
        self.nodes[id.0 as usize].interaction = Some(interaction);
    }

    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0 as usize].parent
    }

    #[must_use]
    pub fn tag_of(&self, id: NodeId) -> &str {
        &self.nodes[id.0 as usize].tag
    }

    #[must_use]
    pub fn has_interaction(&self, id: NodeId) -> bool {
        self.nodes[id.0 as usize].interaction.is_some()
    }

    /// Prompt text of the node's capability, if it carries one.
    #[must_use]
    pub fn prompt_of(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0 as usize]
            .interaction
            .as_ref()
            .map(|i| i.prompt.as_str())
    }

    /// Fire the node's interaction handler with the node's tag.
    ///
    /// A node without a capability is a silent no-op.
    pub fn invoke_interaction(&mut self, id: NodeId) {
        let tag = self.nodes[id.0 as usize].tag.clone();
        if let Some(interaction) = self.nodes[id.0 as usize].interaction.as_mut() {
            (interaction.handler)(&tag);
        }
    }

    /// World-space position accumulated along the parent chain.
    #[must_use]
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        let mut acc = Vec3::ZERO;
        let mut cur = Some(id);
        while let Some(n) = cur {
            let node = &self.nodes[n.0 as usize];
            acc += node.position;
            cur = node.parent;
        }
        acc
    }

    /// Nearest hit among nodes whose layers intersect `mask`.
    ///
    /// Nodes outside the mask are excluded before any distance comparison;
    /// an inert object closer along the ray never blocks a candidate. An
    /// empty candidate set yields `None`.
    #[must_use]
    pub fn raycast(&self, origin: Vec3, dir: Vec3, mask: Layer) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;
        for (idx, node) in self.nodes.iter().enumerate() {
            if !node.layer.intersects(mask) {
                continue;
            }
            let Some(shape) = node.shape else { continue };
            let id = NodeId(idx as u32);
            let base = self.world_position(id);
            let t = match shape {
                CollisionShape::Sphere { center, radius } => {
                    geom::ray_sphere_t(origin, dir, base + center, radius)
                }
                CollisionShape::Aabb { min, max } => {
                    geom::ray_aabb_t(origin, dir, base + min, base + max)
                }
            };
            if let Some(t) = t {
                if best.is_none_or(|b| t < b.t) {
                    best = Some(RayHit { node: id, t });
                }
            }
        }
        best
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

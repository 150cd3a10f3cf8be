//! Scene-graph vocabulary shared across the workspace.
//!
//! Nodes live in an arena with non-owning parent back-references; the
//! optional `Interaction` capability is the only behavior an object can
//! carry. Ray helpers here serve reticle targeting; there is no rendering
//! or physics in this crate.

pub mod components;
pub mod geom;
pub mod graph;

pub use components::{
    CameraPose, CollisionShape, Interaction, Layer, NodeId, TeleportRequest, Transform,
};
pub use graph::{RayHit, Scene};

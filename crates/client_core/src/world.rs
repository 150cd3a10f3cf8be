//! Zone instantiation: turn a manifest into scene nodes, trigger volumes,
//! and teleport wiring.

use crate::session::Session;
use crate::systems::sensors::SensorVolume;
use data_runtime::zone::{PortalSpec, PortalTrigger, ZoneManifest};
use glam::Vec3;
use scene_core::{CollisionShape, Interaction, Layer, NodeId, Scene, TeleportRequest};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Host-drained queue of teleport requests produced by either dispatch
/// path. Cloning shares the queue.
#[derive(Clone, Default)]
pub struct TeleportSink {
    inner: Rc<RefCell<Vec<TeleportRequest>>>,
}

impl TeleportSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, req: TeleportRequest) {
        self.inner.borrow_mut().push(req);
    }

    /// Take every pending request, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<TeleportRequest> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

fn vec3(a: [f32; 3]) -> Vec3 {
    Vec3::from_array(a)
}

fn request_for(portal: &PortalSpec) -> TeleportRequest {
    TeleportRequest {
        position: vec3(portal.destination),
        yaw_deg: portal.yaw_deg,
    }
}

/// Spawn the zone's portals under a fresh root node and bind their
/// triggers. Returns the root.
pub fn build_zone(
    scene: &mut Scene,
    session: &mut Session,
    manifest: &ZoneManifest,
    sink: &TeleportSink,
) -> NodeId {
    let root = scene.spawn(manifest.slug.clone(), None, Vec3::ZERO);
    for portal in &manifest.portals {
        let node = scene.spawn(portal.name.clone(), Some(root), vec3(portal.position));

        if matches!(portal.trigger, PortalTrigger::Sensor | PortalTrigger::Both) {
            let sink = sink.clone();
            let req = request_for(portal);
            session.sensors_mut().add(SensorVolume::new(
                portal.name.clone(),
                scene.world_position(node),
                portal.radius_m,
                portal.height_m,
                Box::new(move || sink.push(req)),
            ));
        }

        if matches!(portal.trigger, PortalTrigger::Click | PortalTrigger::Both) {
            // Clickable body: a sphere over the portal disc at mid height.
            scene.set_shape(
                node,
                CollisionShape::Sphere {
                    center: Vec3::new(0.0, portal.height_m * 0.5, 0.0),
                    radius: portal.radius_m,
                },
            );
            scene.set_layer(node, Layer::INTERACTABLE);
            let sink = sink.clone();
            let req = request_for(portal);
            scene.set_interaction(
                node,
                Interaction {
                    prompt: portal.label.clone(),
                    handler: Box::new(move |_tag| sink.push(req)),
                },
            );
        }
    }
    info!(
        target: "interact",
        zone = manifest.slug.as_str(),
        portals = manifest.portals.len(),
        "zone built"
    );
    root
}

/// Place the viewer at the zone's spawn pose.
pub fn apply_spawn(session: &mut Session, manifest: &ZoneManifest) {
    session.teleport(&TeleportRequest {
        position: vec3(manifest.spawn.position),
        yaw_deg: manifest.spawn.yaw_deg,
    });
}

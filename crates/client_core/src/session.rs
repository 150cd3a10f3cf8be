//! Session: composes the input sampler, walk integrator, target acquirer,
//! and interaction dispatcher behind one per-frame tick.
//!
//! Tick order
//! 1. sample axes, integrate locomotion (camera position out)
//! 2. dispatch clicks observed since the last tick against the target
//!    acquired on that tick (a click sees the acquirer state current at
//!    click time)
//! 3. edge-triggered sensor overlap pass at the new position
//! 4. fresh target acquisition and aim-marker pose — never memoized

use crate::events::{InputBus, InputEvent, ListenerGuard};
use crate::facade::controller::ControllerState;
use crate::input::KeySet;
use crate::systems::locomotion::{self, LocomotionCfg};
use crate::systems::mouselook::{self, MouselookCfg};
use crate::systems::sensors::SensorSet;
use crate::systems::{interact, targeting};
use data_runtime::configs::controls::ControlsCfg;
use glam::Vec3;
use scene_core::{CameraPose, NodeId, Scene, TeleportRequest};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Session tuning, usually derived from the controls config.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionCfg {
    pub locomotion: LocomotionCfg,
    pub mouselook: MouselookCfg,
}

impl SessionCfg {
    #[must_use]
    pub fn from_controls(c: &ControlsCfg) -> Self {
        Self {
            locomotion: LocomotionCfg {
                speed_mps: c.move_speed_mps,
                eye_height_m: c.eye_height_m,
            },
            mouselook: MouselookCfg {
                sensitivity_deg_per_count: c.sensitivity_deg_per_count,
                invert_y: c.invert_y,
                min_pitch_deg: c.min_pitch_deg,
                max_pitch_deg: c.max_pitch_deg,
            },
        }
    }
}

/// Input state shared with the bus listener.
#[derive(Default)]
struct SharedInput {
    keys: KeySet,
    clicks: u32,
}

/// One viewer's interaction/locomotion state.
///
/// Dropping the session releases its bus listener, so no handler fires
/// after teardown.
pub struct Session {
    cfg: SessionCfg,
    shared: Rc<RefCell<SharedInput>>,
    state: ControllerState,
    sensors: SensorSet,
    target: Option<NodeId>,
    listener: Option<ListenerGuard>,
}

impl Session {
    #[must_use]
    pub fn new(cfg: SessionCfg) -> Self {
        let state = ControllerState {
            camera: CameraPose {
                eye: Vec3::new(0.0, cfg.locomotion.eye_height_m, 0.0),
                ..Default::default()
            },
            ..Default::default()
        };
        Self {
            cfg,
            shared: Rc::new(RefCell::new(SharedInput::default())),
            state,
            sensors: SensorSet::new(),
            target: None,
            listener: None,
        }
    }

    /// Register key/click listeners on the host bus. Symmetric with
    /// [`Session::detach`]; drop performs the same release.
    pub fn attach(&mut self, bus: &InputBus) {
        let shared = Rc::clone(&self.shared);
        self.listener = Some(bus.bind(Box::new(move |ev| {
            let mut sh = shared.borrow_mut();
            match ev {
                InputEvent::KeyDown(code) => sh.keys.press(code),
                InputEvent::KeyUp(code) => sh.keys.release(code),
                InputEvent::Click => sh.clicks += 1,
            }
        })));
        info!(target: "controls", "session attached to input bus");
    }

    /// Deregister from the bus and drop any held input.
    pub fn detach(&mut self) {
        self.listener = None;
        let mut sh = self.shared.borrow_mut();
        sh.keys.clear();
        sh.clicks = 0;
    }

    /// One frame of the interaction/locomotion core.
    pub fn tick(&mut self, scene: &mut Scene, dt: f32) {
        let (axes, clicks) = {
            let mut sh = self.shared.borrow_mut();
            (sh.keys.axes(), std::mem::take(&mut sh.clicks))
        };
        locomotion::update(&self.cfg.locomotion, &mut self.state.camera, axes, dt);

        for _ in 0..clicks {
            interact::dispatch_click(scene, self.target);
        }

        let foot = self.state.camera.eye
            - Vec3::new(0.0, self.cfg.locomotion.eye_height_m, 0.0);
        self.sensors.update(foot);

        self.target = targeting::acquire(scene, &self.state.camera);
        self.state.target = self.target;
        self.state.marker = targeting::marker_pose(&self.state.camera);
        self.state.prompt = self
            .target
            .and_then(|hit| interact::resolve_owner(scene, hit))
            .and_then(|owner| scene.prompt_of(owner).map(str::to_owned));
    }

    /// The host teleport capability: relocate the viewer and optionally
    /// set the facing. Consumes the request immediately; nothing is kept.
    pub fn teleport(&mut self, req: &TeleportRequest) {
        let cam = &mut self.state.camera;
        cam.eye = req.position + Vec3::new(0.0, self.cfg.locomotion.eye_height_m, 0.0);
        if let Some(yaw_deg) = req.yaw_deg {
            cam.yaw = yaw_deg.to_radians();
            cam.look_dir = mouselook::look_dir_from(cam.yaw, cam.pitch);
        }
        info!(target: "interact", pos = ?req.position, "teleport");
    }

    /// Feed a mouse delta to the orientation collaborator.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        mouselook::apply_mouse_delta(&self.cfg.mouselook, &mut self.state.camera, dx, dy);
    }

    /// Read-only per-frame outputs for the renderer.
    #[must_use]
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    #[must_use]
    pub fn cfg(&self) -> SessionCfg {
        self.cfg
    }

    /// Trigger volumes of the active zone.
    pub fn sensors_mut(&mut self) -> &mut SensorSet {
        &mut self.sensors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_at_eye_height() {
        let s = Session::new(SessionCfg::default());
        let eye = s.state().camera_pose().eye;
        assert!((eye.y - s.cfg().locomotion.eye_height_m).abs() < 1e-6);
    }

    #[test]
    fn session_cfg_mirrors_controls() {
        let c = ControlsCfg::default();
        let cfg = SessionCfg::from_controls(&c);
        assert!((cfg.locomotion.speed_mps - c.move_speed_mps).abs() < 1e-6);
        assert!((cfg.mouselook.min_pitch_deg - c.min_pitch_deg).abs() < 1e-6);
        assert_eq!(cfg.mouselook.invert_y, c.invert_y);
    }

    #[test]
    fn teleport_sets_position_and_yaw() {
        let mut s = Session::new(SessionCfg::default());
        s.teleport(&TeleportRequest {
            position: Vec3::new(0.0, 0.0, 50.0),
            yaw_deg: Some(90.0),
        });
        let cam = s.state().camera_pose();
        assert!((cam.eye.z - 50.0).abs() < 1e-6);
        assert!((cam.eye.y - 1.5).abs() < 1e-6);
        // Yaw 90° faces +Z under the spherical convention.
        assert!((cam.look_dir.z - 1.0).abs() < 1e-5);
    }
}

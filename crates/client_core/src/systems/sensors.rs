//! Walk-through trigger volumes — the sensor path of the dispatcher.
//!
//! A volume is bound to its callback at construction; the volume itself is
//! the target, so no resolution happens. Entry fires the callback exactly
//! once, and leaving re-arms it.

use glam::Vec3;
use tracing::info;

/// Callback fired on each enter transition.
pub type EnterFn = Box<dyn FnMut()>;

/// Vertical trigger cylinder: a circle in XZ over a bounded band in Y.
///
/// Tested against the viewer's foot position, not the eye.
pub struct SensorVolume {
    name: String,
    center: Vec3,
    radius_m: f32,
    height_m: f32,
    inside: bool,
    on_enter: EnterFn,
}

impl SensorVolume {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        center: Vec3,
        radius_m: f32,
        height_m: f32,
        on_enter: EnterFn,
    ) -> Self {
        Self {
            name: name.into(),
            center,
            radius_m,
            height_m,
            inside: false,
            on_enter,
        }
    }

    fn contains(&self, p: Vec3) -> bool {
        let dx = p.x - self.center.x;
        let dz = p.z - self.center.z;
        dx * dx + dz * dz <= self.radius_m * self.radius_m
            && p.y >= self.center.y
            && p.y <= self.center.y + self.height_m
    }
}

/// All trigger volumes of the active zone.
#[derive(Default)]
pub struct SensorSet {
    volumes: Vec<SensorVolume>,
}

impl SensorSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, volume: SensorVolume) {
        self.volumes.push(volume);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Edge-triggered overlap pass for this frame's viewer foot position.
    pub fn update(&mut self, foot: Vec3) {
        for v in &mut self.volumes {
            let now_inside = v.contains(foot);
            if now_inside && !v.inside {
                info!(target: "interact", sensor = v.name.as_str(), "overlap enter");
                (v.on_enter)();
            }
            v.inside = now_inside;
        }
    }
}

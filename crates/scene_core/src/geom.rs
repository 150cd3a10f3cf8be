//! Ray intersection helpers for reticle targeting.
//!
//! Rays are origin + normalized direction; results are the entry parameter
//! `t` in meters along the ray, never negative.

use glam::Vec3;

/// Ray vs sphere. Returns the entry `t`, or `None` on a miss.
///
/// A ray starting inside the sphere reports `t = 0`.
#[must_use]
pub fn ray_sphere_t(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let m = origin - center;
    let b = m.dot(dir);
    let c = m.dot(m) - radius * radius;
    // Outside and pointing away.
    if c > 0.0 && b > 0.0 {
        return None;
    }
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    Some((-b - disc.sqrt()).max(0.0))
}

/// Ray vs AABB slab test. Returns the entry `t`, or `None` on a miss.
///
/// A ray starting inside the box reports `t = 0`.
#[must_use]
pub fn ray_aabb_t(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut tmin = 0.0f32;
    let mut tmax = f32::INFINITY;
    for i in 0..3 {
        let o = origin[i];
        let d = dir[i];
        if d.abs() < 1e-6 {
            if o < min[i] || o > max[i] {
                return None;
            }
        } else {
            let inv = 1.0 / d;
            let mut t0 = (min[i] - o) * inv;
            let mut t1 = (max[i] - o) * inv;
            if t0 > t1 {
                core::mem::swap(&mut t0, &mut t1);
            }
            tmin = tmin.max(t0);
            tmax = tmax.min(t1);
            if tmin > tmax {
                return None;
            }
        }
    }
    Some(tmin)
}

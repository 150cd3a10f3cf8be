use client_core::input::KeySet;
use client_core::systems::locomotion::{self, LocomotionCfg};
use glam::Vec3;
use scene_core::CameraPose;

fn pose() -> CameraPose {
    CameraPose {
        eye: Vec3::new(0.0, 1.5, 0.0),
        ..Default::default()
    }
}

#[test]
fn no_held_keys_means_no_horizontal_drift() {
    let cfg = LocomotionCfg::default();
    let keys = KeySet::default();
    let mut p = pose();
    p.eye.y = 0.3; // external vertical displacement
    for _ in 0..100 {
        locomotion::update(&cfg, &mut p, keys.axes(), 0.016);
    }
    assert_eq!(p.eye.x, 0.0);
    assert_eq!(p.eye.z, 0.0);
    assert!((p.eye.y - cfg.eye_height_m).abs() < 1e-6);
}

#[test]
fn single_axis_displacement_is_speed_times_dt() {
    let cfg = LocomotionCfg::default();
    let dt = 0.02;
    for code in ["KeyW", "KeyS", "KeyA", "KeyD"] {
        let mut keys = KeySet::default();
        keys.press(code);
        let mut p = pose();
        let start = p.eye;
        locomotion::update(&cfg, &mut p, keys.axes(), dt);
        let moved = (p.eye - start).length();
        assert!(
            (moved - cfg.speed_mps * dt).abs() < 1e-4,
            "{code}: moved {moved}"
        );
    }
}

#[test]
fn diagonal_displacement_matches_single_axis() {
    let cfg = LocomotionCfg::default();
    let dt = 0.016;
    let mut keys = KeySet::default();
    keys.press("KeyW");
    keys.press("KeyD");
    let mut p = pose();
    let start = p.eye;
    locomotion::update(&cfg, &mut p, keys.axes(), dt);
    let moved = (p.eye - start).length();
    assert!((moved - cfg.speed_mps * dt).abs() < 1e-5);
}

#[test]
fn arrow_aliases_move_like_primaries() {
    let cfg = LocomotionCfg::default();
    let dt = 0.1;
    let mut wasd = KeySet::default();
    wasd.press("KeyW");
    let mut arrows = KeySet::default();
    arrows.press("ArrowUp");
    let mut a = pose();
    let mut b = pose();
    locomotion::update(&cfg, &mut a, wasd.axes(), dt);
    locomotion::update(&cfg, &mut b, arrows.axes(), dt);
    assert_eq!(a.eye, b.eye);
}

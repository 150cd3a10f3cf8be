//! Controls tuning loaded from `data/config/controls.toml` with defaults,
//! clamping, and env overrides for quick iteration.

use crate::loader::data_root;
use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ControlsCfg {
    /// Ground movement speed, meters per second.
    pub move_speed_mps: f32,
    /// Fixed viewer eye height above the floor, meters.
    pub eye_height_m: f32,
    /// Mouselook sensitivity, degrees per mouse count.
    pub sensitivity_deg_per_count: f32,
    pub invert_y: bool,
    pub min_pitch_deg: f32,
    pub max_pitch_deg: f32,
}

impl Default for ControlsCfg {
    fn default() -> Self {
        Self {
            move_speed_mps: 4.0,
            eye_height_m: 1.5,
            sensitivity_deg_per_count: 0.15,
            invert_y: false,
            min_pitch_deg: -80.0,
            max_pitch_deg: 80.0,
        }
    }
}

fn clamp(mut cfg: ControlsCfg) -> ControlsCfg {
    if cfg.move_speed_mps <= 0.0 {
        cfg.move_speed_mps = ControlsCfg::default().move_speed_mps;
    }
    if cfg.eye_height_m < 0.1 {
        cfg.eye_height_m = 0.1;
    }
    if cfg.min_pitch_deg < -89.0 {
        cfg.min_pitch_deg = -89.0;
    }
    if cfg.max_pitch_deg > 89.0 {
        cfg.max_pitch_deg = 89.0;
    }
    cfg
}

/// Parse a controls TOML document; missing fields fall back to defaults.
pub fn from_toml_str(txt: &str) -> Result<ControlsCfg> {
    let cfg: ControlsCfg = toml::from_str(txt).context("parse controls TOML")?;
    Ok(clamp(cfg))
}

fn apply_env(mut cfg: ControlsCfg) -> ControlsCfg {
    if let Ok(s) = std::env::var("MOVE_SPEED_MPS") {
        if let Ok(v) = s.parse() {
            cfg.move_speed_mps = v;
        }
    }
    if let Ok(s) = std::env::var("EYE_HEIGHT_M") {
        if let Ok(v) = s.parse() {
            cfg.eye_height_m = v;
        }
    }
    if let Ok(s) = std::env::var("MOUSE_SENS_DEG") {
        if let Ok(v) = s.parse() {
            cfg.sensitivity_deg_per_count = v;
        }
    }
    if let Ok(s) = std::env::var("INVERT_Y") {
        if let Ok(v) = s.parse() {
            cfg.invert_y = v;
        }
    }
    cfg
}

/// Load the controls config from the default location, falling back to
/// defaults when the file is absent.
pub fn load_default() -> Result<ControlsCfg> {
    let path = data_root().join("config/controls.toml");
    let cfg = if path.is_file() {
        let txt = std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;
        from_toml_str(&txt)?
    } else {
        ControlsCfg::default()
    };
    Ok(clamp(apply_env(cfg)))
}

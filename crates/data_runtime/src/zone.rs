//! Zone authoring schema and loader.
//!
//! A zone manifest names a spawn pose and the teleport portals the
//! interaction core wires up. JSON lives under
//! `data/zones/<slug>/manifest.json`.
//!
//! Extending
//! - Add prop/decor records and per-zone control overrides when a zone
//!   needs them; keep per-frame concerns out of this schema.

use crate::loader::read_json;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which dispatcher path activates a portal.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PortalTrigger {
    /// Fires on walk-through overlap; no click required.
    #[default]
    Sensor,
    /// Fires on aim-and-click only.
    Click,
    /// Both paths bound.
    Both,
}

/// Where the viewer appears when the zone loads.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpawnSpec {
    /// Floor position, meters.
    pub position: [f32; 3],
    /// Initial facing, degrees; `None` keeps the default.
    #[serde(default)]
    pub yaw_deg: Option<f32>,
}

/// One teleport portal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PortalSpec {
    /// Unique name within the zone; becomes the scene node tag.
    pub name: String,
    /// Floor position of the portal, meters.
    pub position: [f32; 3],
    /// Sensor/click cylinder radius, meters.
    pub radius_m: f32,
    /// Sensor cylinder height above the floor, meters.
    pub height_m: f32,
    /// Destination floor position, meters.
    pub destination: [f32; 3],
    /// Facing after arrival, degrees.
    #[serde(default)]
    pub yaw_deg: Option<f32>,
    /// HUD text shown while the portal is targeted.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub trigger: PortalTrigger,
}

/// Authoring manifest for a zone.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ZoneManifest {
    pub slug: String,
    pub display_name: String,
    pub spawn: SpawnSpec,
    #[serde(default)]
    pub portals: Vec<PortalSpec>,
}

/// Validation failures for hand-authored manifests.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    #[error("portal `{0}` has non-positive radius")]
    NonPositiveRadius(String),
    #[error("portal `{0}` has non-positive height")]
    NonPositiveHeight(String),
    #[error("duplicate portal name `{0}`")]
    DuplicateName(String),
}

impl ZoneManifest {
    /// Check authoring invariants the schema cannot express.
    pub fn validate(&self) -> Result<(), ZoneError> {
        let mut seen = HashSet::new();
        for p in &self.portals {
            if p.radius_m <= 0.0 {
                return Err(ZoneError::NonPositiveRadius(p.name.clone()));
            }
            if p.height_m <= 0.0 {
                return Err(ZoneError::NonPositiveHeight(p.name.clone()));
            }
            if !seen.insert(p.name.as_str()) {
                return Err(ZoneError::DuplicateName(p.name.clone()));
            }
        }
        Ok(())
    }
}

/// Load and validate a zone manifest from `data/zones/<slug>/manifest.json`.
pub fn load_zone_manifest(slug: &str) -> Result<ZoneManifest> {
    let rel = format!("zones/{slug}/manifest.json");
    let txt = read_json(&rel)?;
    let manifest: ZoneManifest =
        serde_json::from_str(&txt).with_context(|| format!("parse zone manifest {rel}"))?;
    manifest.validate()?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portal(name: &str) -> PortalSpec {
        PortalSpec {
            name: name.to_string(),
            position: [0.0, 0.0, 0.0],
            radius_m: 1.2,
            height_m: 1.0,
            destination: [0.0, 0.0, 50.0],
            yaw_deg: None,
            label: String::new(),
            trigger: PortalTrigger::Sensor,
        }
    }

    fn manifest(portals: Vec<PortalSpec>) -> ZoneManifest {
        ZoneManifest {
            slug: "test".into(),
            display_name: "Test".into(),
            spawn: SpawnSpec { position: [0.0, 0.0, 5.0], yaw_deg: None },
            portals,
        }
    }

    #[test]
    fn valid_manifest_passes() {
        assert_eq!(manifest(vec![portal("a"), portal("b")]).validate(), Ok(()));
    }

    #[test]
    fn non_positive_radius_rejected() {
        let mut p = portal("a");
        p.radius_m = 0.0;
        assert_eq!(
            manifest(vec![p]).validate(),
            Err(ZoneError::NonPositiveRadius("a".into()))
        );
    }

    #[test]
    fn duplicate_names_rejected() {
        assert_eq!(
            manifest(vec![portal("a"), portal("a")]).validate(),
            Err(ZoneError::DuplicateName("a".into()))
        );
    }

    #[test]
    fn trigger_parses_snake_case() {
        let m: ZoneManifest = serde_json::from_str(
            r#"{
                "slug": "z",
                "display_name": "Z",
                "spawn": { "position": [0, 0, 0] },
                "portals": [{
                    "name": "p",
                    "position": [1, 0, 0],
                    "radius_m": 1.0,
                    "height_m": 1.0,
                    "destination": [2, 0, 0],
                    "trigger": "both"
                }]
            }"#,
        )
        .expect("manifest should parse");
        assert_eq!(m.portals[0].trigger, PortalTrigger::Both);
        assert_eq!(m.portals[0].yaw_deg, None);
    }

    #[test]
    fn unknown_trigger_is_a_parse_error() {
        let r: std::result::Result<PortalSpec, _> = serde_json::from_str(
            r#"{
                "name": "p",
                "position": [1, 0, 0],
                "radius_m": 1.0,
                "height_m": 1.0,
                "destination": [2, 0, 0],
                "trigger": "proximity"
            }"#,
        );
        assert!(r.is_err());
    }
}

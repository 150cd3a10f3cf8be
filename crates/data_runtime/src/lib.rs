//! data_runtime: data schemas and loaders.
//!
//! Keeps file formats and defaults out of the per-frame core so the host,
//! tools, and tests share one data API. Controls tuning is TOML under
//! `data/config/`; zone manifests are JSON under `data/zones/<slug>/`.

pub mod configs {
    pub mod controls;
}
pub mod loader;
pub mod zone;

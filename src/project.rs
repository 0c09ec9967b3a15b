// src/project.rs
//! Project manifest model
//!
//! The manifest (`project.json`) is kept as a raw [`serde_json::Value`] so
//! every field the transform does not touch survives a rewrite byte-for-byte
//! in meaning. This module holds the dialect model plus the small set of
//! shape helpers the converter and the inspector share.

use serde_json::Value;

/// One of the two supported runtime flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    PenguinMod,
    TurboWarp,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::PenguinMod => "PenguinMod",
            Dialect::TurboWarp => "TurboWarp",
        }
    }

    /// Platform URL the dialect's manifests carry in `meta.platform.url`.
    pub fn platform_url(&self) -> &'static str {
        match self {
            Dialect::PenguinMod => "https://penguinmod.com",
            Dialect::TurboWarp => "https://turbowarp.org",
        }
    }

    /// Best-effort detection from manifest metadata: `meta.platform.name`
    /// first, falling back to a substring match on `meta.agent`. Returns
    /// `None` for plain Scratch projects or stripped metadata.
    pub fn detect(manifest: &Value) -> Option<Dialect> {
        let meta = manifest.get("meta")?;

        if let Some(platform) = meta.get("platform").and_then(|p| p.get("name")).and_then(Value::as_str) {
            match platform {
                "PenguinMod" => return Some(Dialect::PenguinMod),
                "TurboWarp" => return Some(Dialect::TurboWarp),
                _ => {}
            }
        }

        let agent = meta.get("agent").and_then(Value::as_str)?;
        if agent.contains("PenguinMod") {
            Some(Dialect::PenguinMod)
        } else if agent.contains("TurboWarp") {
            Some(Dialect::TurboWarp)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name for a target: its `name` field, or `(stage)` when absent.
pub fn target_name(target: &Value) -> &str {
    target
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("(stage)")
}

/// The target list of a manifest, when present and well-formed.
pub fn targets(manifest: &Value) -> Option<&Vec<Value>> {
    manifest.get("targets").and_then(Value::as_array)
}

/// The extension id list of a manifest, when present and well-formed.
pub fn extensions(manifest: &Value) -> Option<&Vec<Value>> {
    manifest.get("extensions").and_then(Value::as_array)
}

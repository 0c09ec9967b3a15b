// src/convert/converter.rs
//! Dialect converter
//!
//! Rewrites a parsed manifest from one dialect's conventions to the other's.
//! The converter never mutates its input: it clones the manifest and returns
//! a new value together with a [`ConvertReport`], so a failed conversion
//! leaves nothing half-rewritten.
//!
//! Both strictness levels of the forward direction share this code path,
//! selected by [`ConvertOptions::full_reset`]:
//! - full reset: replace `meta` wholesale, drop PenguinMod-only top-level
//!   sections, rename/filter extensions, vaporize PenguinMod-only blocks
//! - rename-only: set `meta.agent` and rename/filter extensions, nothing else
//!
//! The reverse direction only relabels identity fields; removed content is
//! not reconstructable.

use crate::convert::report::ConvertReport;
use crate::convert::tables::ConvertTables;
use crate::convert::ConvertError;
use crate::project::{self, Dialect};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PmToTw,
    TwToPm,
}

impl Direction {
    pub fn source(&self) -> Dialect {
        match self {
            Direction::PmToTw => Dialect::PenguinMod,
            Direction::TwToPm => Dialect::TurboWarp,
        }
    }

    pub fn destination(&self) -> Dialect {
        match self {
            Direction::PmToTw => Dialect::TurboWarp,
            Direction::TwToPm => Dialect::PenguinMod,
        }
    }

    /// Filename prefix for converted archives.
    pub fn output_prefix(&self) -> &'static str {
        match self {
            Direction::PmToTw => "TurboWarp_",
            Direction::TwToPm => "PenguinMod_",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::PmToTw => f.write_str("pm-to-tw"),
            Direction::TwToPm => f.write_str("tw-to-pm"),
        }
    }
}

/// Options for a single conversion.
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    pub direction: Direction,
    /// `false` selects the rename-only strictness level.
    pub full_reset: bool,
}

impl ConvertOptions {
    /// Full-strictness conversion in the given direction.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            full_reset: true,
        }
    }

    /// Rename-only conversion in the given direction.
    pub fn rename_only(direction: Direction) -> Self {
        Self {
            direction,
            full_reset: false,
        }
    }
}

/// Converts manifests between the PenguinMod and TurboWarp dialects.
pub struct DialectConverter {
    tables: ConvertTables,
    options: ConvertOptions,
}

impl DialectConverter {
    /// Create a converter with the compiled-in tables.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_tables(options, ConvertTables::default())
    }

    /// Create a converter with caller-supplied tables.
    pub fn with_tables(options: ConvertOptions, tables: ConvertTables) -> Self {
        Self { tables, options }
    }

    /// Convert a manifest, returning the rewritten value and a report.
    ///
    /// The input is left untouched. Any shape violation aborts the whole
    /// conversion; there is no partial output.
    pub fn convert(&self, manifest: &Value) -> Result<(Value, ConvertReport), ConvertError> {
        let mut root = manifest
            .as_object()
            .cloned()
            .ok_or_else(|| malformed("manifest root is not an object"))?;
        let mut report = ConvertReport::default();

        match self.options.direction {
            Direction::PmToTw => self.convert_pm_to_tw(&mut root, &mut report)?,
            Direction::TwToPm => self.convert_tw_to_pm(&mut root, &mut report)?,
        }

        Ok((Value::Object(root), report))
    }

    fn convert_pm_to_tw(
        &self,
        root: &mut Map<String, Value>,
        report: &mut ConvertReport,
    ) -> Result<(), ConvertError> {
        if self.options.full_reset {
            // Unconditional overwrite, not a merge: everything previously in
            // meta is dropped.
            root.insert("meta".to_string(), turbowarp_meta());

            for key in ["runtimeOptions", "customRuntime", "penguinmod"] {
                if root.remove(key).is_some() {
                    debug!("dropped PenguinMod section: {}", key);
                }
            }
        } else {
            set_meta_agent(root, Dialect::TurboWarp.name())?;
        }

        self.rewrite_extensions(root, report)?;

        if self.options.full_reset {
            self.vaporize_blocks(root, report)?;
        }

        Ok(())
    }

    fn convert_tw_to_pm(
        &self,
        root: &mut Map<String, Value>,
        report: &mut ConvertReport,
    ) -> Result<(), ConvertError> {
        let meta = set_meta_agent(root, Dialect::PenguinMod.name())?;
        if self.options.full_reset {
            meta.insert(
                "platform".to_string(),
                json!({
                    "name": Dialect::PenguinMod.name(),
                    "url": Dialect::PenguinMod.platform_url(),
                }),
            );
        }

        // No filtering in this direction: TurboWarp-only content passes
        // through unchanged and unwarned.
        self.rewrite_extensions(root, report)?;
        Ok(())
    }

    /// Rename extension ids through the direction's table, then (forward
    /// direction only) drop PenguinMod-only ids, warning per drop. A missing
    /// `extensions` field is tolerated; a non-list one is not.
    fn rewrite_extensions(
        &self,
        root: &mut Map<String, Value>,
        report: &mut ConvertReport,
    ) -> Result<(), ConvertError> {
        let Some(value) = root.get_mut("extensions") else {
            return Ok(());
        };
        let list = value
            .as_array()
            .ok_or_else(|| malformed("extensions is not a list"))?;

        let mut rewritten = Vec::with_capacity(list.len());
        for entry in list {
            let id = entry
                .as_str()
                .ok_or_else(|| malformed("extensions contains a non-string id"))?;
            let renamed = match self.options.direction {
                Direction::PmToTw => self.tables.rename_pm_to_tw(id),
                Direction::TwToPm => self.tables.rename_tw_to_pm(id),
            }
            .unwrap_or(id);

            if self.options.direction == Direction::PmToTw
                && self.tables.is_pm_extension(renamed, self.options.full_reset)
            {
                warn!("removing unsupported extension: {}", renamed);
                report.warn_removed_extension(renamed);
                continue;
            }

            rewritten.push(Value::String(renamed.to_string()));
        }

        *value = Value::Array(rewritten);
        Ok(())
    }

    /// Delete every block whose opcode marks it PenguinMod-only, recording
    /// each removal. A target without a `blocks` mapping is malformed.
    fn vaporize_blocks(
        &self,
        root: &mut Map<String, Value>,
        report: &mut ConvertReport,
    ) -> Result<(), ConvertError> {
        let targets = root
            .get_mut("targets")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| malformed("targets is missing or not a list"))?;

        for target in targets.iter_mut() {
            let name = project::target_name(target).to_string();
            let blocks = target
                .get_mut("blocks")
                .and_then(Value::as_object_mut)
                .ok_or_else(|| malformed(format!("target '{}' has no blocks mapping", name)))?;

            let doomed: Vec<(String, String)> = blocks
                .iter()
                .filter_map(|(id, block)| {
                    // Missing/null/empty opcodes never match
                    let opcode = block.get("opcode").and_then(Value::as_str)?;
                    self.tables
                        .is_pm_opcode(opcode)
                        .then(|| (id.clone(), opcode.to_string()))
                })
                .collect();

            for (id, opcode) in doomed {
                blocks.remove(&id);
                warn!("removed block {} ({}) from '{}'", id, opcode, name);
                report.record_removed_block(&name, &opcode);
            }
        }

        Ok(())
    }
}

/// The fixed meta object a full-reset conversion stamps onto the manifest.
fn turbowarp_meta() -> Value {
    json!({
        "semver": "3.0.0",
        "vm": "0.2.0-prerelease.2023",
        "agent": Dialect::TurboWarp.name(),
        "platform": {
            "name": Dialect::TurboWarp.name(),
            "url": Dialect::TurboWarp.platform_url(),
        },
    })
}

/// Set `meta.agent`, failing when `meta` is absent or not an object.
fn set_meta_agent<'a>(
    root: &'a mut Map<String, Value>,
    agent: &str,
) -> Result<&'a mut Map<String, Value>, ConvertError> {
    let meta = root
        .get_mut("meta")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| malformed("meta is missing or not an object"))?;
    meta.insert("agent".to_string(), Value::String(agent.to_string()));
    Ok(meta)
}

fn malformed(msg: impl Into<String>) -> ConvertError {
    ConvertError::MalformedManifest(msg.into())
}

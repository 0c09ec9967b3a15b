// src/commands/inspect.rs

//! Inspect command
//!
//! Read-only look at a project archive: detected dialect, meta fields,
//! extension list and per-target block counts, with PenguinMod-only content
//! called out. Nothing is converted or written.

use anyhow::{Context, Result};
use sbshift::{project, ConvertTables, Dialect, ProjectArchive, MANIFEST_NAME};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Inspection summary of a project archive.
#[derive(Debug, Serialize)]
pub struct InspectSummary {
    pub dialect: Option<String>,
    pub agent: Option<String>,
    pub semver: Option<String>,
    pub vm: Option<String>,
    pub extensions: Vec<ExtensionInfo>,
    pub targets: Vec<TargetSummary>,
}

#[derive(Debug, Serialize)]
pub struct ExtensionInfo {
    pub id: String,
    pub penguinmod_only: bool,
}

#[derive(Debug, Serialize)]
pub struct TargetSummary {
    pub name: String,
    pub blocks: usize,
    pub penguinmod_blocks: usize,
}

pub fn cmd_inspect(file: &Path, json: bool) -> Result<()> {
    let reader =
        File::open(file).with_context(|| format!("failed to open {}", file.display()))?;
    let archive = ProjectArchive::open(reader)
        .with_context(|| format!("failed to read project archive: {}", file.display()))?;
    let bytes = archive
        .entry(MANIFEST_NAME)
        .ok_or_else(|| anyhow::anyhow!("project.json not found"))?;
    let manifest: Value =
        serde_json::from_slice(bytes).context("project.json is not valid JSON")?;

    let summary = summarize(&manifest);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Project: {}", file.display());
    println!(
        "  Dialect: {}",
        summary.dialect.as_deref().unwrap_or("unknown")
    );
    if let Some(agent) = &summary.agent {
        println!("  Agent: {}", agent);
    }
    if let Some(semver) = &summary.semver {
        println!("  Semver: {}", semver);
    }
    if let Some(vm) = &summary.vm {
        println!("  VM: {}", vm);
    }

    println!("  Extensions: {}", summary.extensions.len());
    for ext in &summary.extensions {
        if ext.penguinmod_only {
            println!("  - {} (PenguinMod-only)", ext.id);
        } else {
            println!("  - {}", ext.id);
        }
    }

    println!("  Targets: {}", summary.targets.len());
    for target in &summary.targets {
        println!(
            "  - {}: {} block(s), {} PenguinMod-only",
            target.name, target.blocks, target.penguinmod_blocks
        );
    }

    Ok(())
}

fn summarize(manifest: &Value) -> InspectSummary {
    let tables = ConvertTables::default();
    let meta = manifest.get("meta");
    let meta_str = |key: &str| {
        meta.and_then(|m| m.get(key))
            .and_then(Value::as_str)
            .map(String::from)
    };

    let extensions = project::extensions(manifest)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(|id| ExtensionInfo {
                    id: id.to_string(),
                    penguinmod_only: tables.is_pm_extension(id, true),
                })
                .collect()
        })
        .unwrap_or_default();

    let targets = project::targets(manifest)
        .map(|list| {
            list.iter()
                .map(|target| {
                    let blocks = target.get("blocks").and_then(Value::as_object);
                    let total = blocks.map_or(0, |b| b.len());
                    let penguinmod = blocks.map_or(0, |b| {
                        b.values()
                            .filter(|block| {
                                block
                                    .get("opcode")
                                    .and_then(Value::as_str)
                                    .is_some_and(|op| tables.is_pm_opcode(op))
                            })
                            .count()
                    });
                    TargetSummary {
                        name: project::target_name(target).to_string(),
                        blocks: total,
                        penguinmod_blocks: penguinmod,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    InspectSummary {
        dialect: Dialect::detect(manifest).map(|d| d.name().to_string()),
        agent: meta_str("agent"),
        semver: meta_str("semver"),
        vm: meta_str("vm"),
        extensions,
        targets,
    }
}

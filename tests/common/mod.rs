// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use serde_json::{json, Value};
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::ZipWriter;

/// Build project archive bytes from a manifest plus asset entries.
pub fn build_project_archive(manifest: &Value, assets: &[(&str, &[u8])]) -> Vec<u8> {
    let manifest_bytes = serde_json::to_vec_pretty(manifest).unwrap();
    let mut entries: Vec<(&str, &[u8])> = vec![("project.json", manifest_bytes.as_slice())];
    entries.extend_from_slice(assets);
    build_zip(&entries)
}

/// Build archive bytes from raw named entries (no manifest added).
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut buffer);
        for (name, data) in entries {
            zip.start_file(*name, FileOptions::default()).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap();
    }
    buffer.into_inner()
}

/// A representative PenguinMod project: custom meta fields, PenguinMod-only
/// top-level sections, mixed extensions, and PenguinMod-only blocks on both
/// the stage and a sprite.
pub fn penguinmod_manifest() -> Value {
    json!({
        "meta": {
            "semver": "3.0.0",
            "vm": "0.2.0",
            "agent": "PenguinMod",
            "custom": "x",
            "platform": {"name": "PenguinMod", "url": "https://penguinmod.com"}
        },
        "runtimeOptions": {"maxClones": 300},
        "customRuntime": true,
        "penguinmod": {"pinned": ["Sprite1"]},
        "extensions": ["pen", "penguinmod.textPlus", "penguinmod.camera", "pm.lasers"],
        "targets": [
            {
                "isStage": true,
                "blocks": {
                    "stage_ok": {"opcode": "event_whenflagclicked"},
                    "stage_pm": {"opcode": "pm_spawnclone"}
                }
            },
            {
                "name": "Sprite1",
                "blocks": {
                    "b1": {"opcode": "motion_movesteps"},
                    "b2": {"opcode": "penguinmod_foo"}
                }
            }
        ]
    })
}

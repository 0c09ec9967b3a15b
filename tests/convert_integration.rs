// tests/convert_integration.rs
//! Integration tests for dialect conversion
//!
//! These tests validate the end-to-end conversion path through the public
//! API: archive in, archive out, with the manifest rewritten and all other
//! entries carried over unchanged.

use sbshift::{
    convert_archive, ConvertError, ConvertOptions, Direction, ProjectArchive, MANIFEST_NAME,
};
use serde_json::{json, Value};
use std::io::Cursor;

mod common;
use common::{build_project_archive, build_zip, penguinmod_manifest};

fn open(bytes: Vec<u8>) -> ProjectArchive {
    ProjectArchive::open(Cursor::new(bytes)).unwrap()
}

fn manifest_of(archive: &ProjectArchive) -> Value {
    serde_json::from_slice(archive.entry(MANIFEST_NAME).unwrap()).unwrap()
}

#[test]
fn test_full_pm_to_tw_conversion_through_file_round_trip() {
    let bytes = build_project_archive(
        &penguinmod_manifest(),
        &[("costume.svg", b"<svg/>"), ("sound.wav", b"RIFF")],
    );
    let archive = open(bytes);

    let (converted, report) =
        convert_archive(&archive, ConvertOptions::new(Direction::PmToTw)).unwrap();

    // Write to disk and reopen, as the CLI does
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("TurboWarp_project.pmp");
    converted
        .serialize(std::fs::File::create(&out_path).unwrap())
        .unwrap();
    let reopened = ProjectArchive::open(std::fs::File::open(&out_path).unwrap()).unwrap();

    let manifest = manifest_of(&reopened);

    // Meta replaced with the fixed TurboWarp literal; custom field gone
    assert_eq!(
        manifest["meta"],
        json!({
            "semver": "3.0.0",
            "vm": "0.2.0-prerelease.2023",
            "agent": "TurboWarp",
            "platform": {"name": "TurboWarp", "url": "https://turbowarp.org"}
        })
    );

    // PenguinMod-only top-level sections removed
    assert!(manifest.get("runtimeOptions").is_none());
    assert!(manifest.get("customRuntime").is_none());
    assert!(manifest.get("penguinmod").is_none());

    // Extensions renamed then filtered, order preserved
    assert_eq!(manifest["extensions"], json!(["pen", "text"]));
    assert_eq!(
        report.warnings,
        vec![
            "Removed extension: penguinmod.camera",
            "Removed extension: pm.lasers",
        ]
    );

    // PenguinMod-only blocks vaporized from stage and sprite
    assert!(manifest["targets"][0]["blocks"].get("stage_pm").is_none());
    assert!(manifest["targets"][0]["blocks"].get("stage_ok").is_some());
    assert!(manifest["targets"][1]["blocks"].get("b2").is_none());
    assert_eq!(
        manifest["targets"][1]["blocks"]["b1"],
        json!({"opcode": "motion_movesteps"})
    );
    assert_eq!(report.removed_blocks.len(), 2);
    assert_eq!(report.removed_blocks[0].sprite, "(stage)");
    assert_eq!(report.removed_blocks[0].opcode, "pm_spawnclone");
    assert_eq!(report.removed_blocks[1].sprite, "Sprite1");
    assert_eq!(report.removed_blocks[1].opcode, "penguinmod_foo");

    // Assets carried over untouched, order preserved
    assert_eq!(reopened.entry("costume.svg"), Some(b"<svg/>".as_slice()));
    assert_eq!(reopened.entry("sound.wav"), Some(b"RIFF".as_slice()));
    let names: Vec<&str> = reopened.entry_names().collect();
    assert_eq!(names, vec![MANIFEST_NAME, "costume.svg", "sound.wav"]);
}

#[test]
fn test_conversion_is_deterministic() {
    let bytes = build_project_archive(&penguinmod_manifest(), &[]);
    let archive = open(bytes);

    let (first, _) = convert_archive(&archive, ConvertOptions::new(Direction::PmToTw)).unwrap();
    let (second, _) = convert_archive(&archive, ConvertOptions::new(Direction::PmToTw)).unwrap();

    assert_eq!(first.entry(MANIFEST_NAME), second.entry(MANIFEST_NAME));
}

#[test]
fn test_missing_manifest_produces_single_diagnostic_and_no_output() {
    let bytes = build_zip(&[("asset.png", b"png")]);
    let archive = open(bytes);

    for direction in [Direction::PmToTw, Direction::TwToPm] {
        let err = convert_archive(&archive, ConvertOptions::new(direction)).unwrap_err();
        assert!(matches!(err, ConvertError::ManifestMissing));
        assert_eq!(err.to_string(), "project.json not found");
    }
}

#[test]
fn test_corrupt_container_is_rejected() {
    let result = ProjectArchive::open(Cursor::new(b"not a zip at all".to_vec()));
    assert!(result.is_err());
}

#[test]
fn test_round_trip_never_resurrects_vaporized_content() {
    let bytes = build_project_archive(&penguinmod_manifest(), &[]);
    let archive = open(bytes);

    let (as_tw, _) = convert_archive(&archive, ConvertOptions::new(Direction::PmToTw)).unwrap();
    let (back_to_pm, report) =
        convert_archive(&as_tw, ConvertOptions::new(Direction::TwToPm)).unwrap();

    let manifest = manifest_of(&back_to_pm);

    // Identity fields relabeled
    assert_eq!(manifest["meta"]["agent"], "PenguinMod");
    assert_eq!(
        manifest["meta"]["platform"],
        json!({"name": "PenguinMod", "url": "https://penguinmod.com"})
    );

    // Vaporized blocks and extensions stay gone
    assert!(manifest["targets"][0]["blocks"].get("stage_pm").is_none());
    assert!(manifest["targets"][1]["blocks"].get("b2").is_none());
    let extensions = manifest["extensions"].as_array().unwrap();
    assert!(!extensions.iter().any(|e| e == "penguinmod.camera"));
    assert!(!extensions.iter().any(|e| e == "pm.lasers"));

    // Reverse direction warns about nothing
    assert!(report.is_clean());
}

#[test]
fn test_reverse_conversion_relabels_and_renames() {
    let manifest = json!({
        "meta": {"agent": "TurboWarp", "semver": "3.0.0"},
        "extensions": ["tw.bitwise"],
        "targets": [{"name": "Sprite1", "blocks": {}}]
    });
    let archive = open(build_project_archive(&manifest, &[]));

    let (converted, _) =
        convert_archive(&archive, ConvertOptions::new(Direction::TwToPm)).unwrap();
    let out = manifest_of(&converted);

    assert_eq!(out["meta"]["agent"], "PenguinMod");
    assert_eq!(
        out["meta"]["platform"],
        json!({"name": "PenguinMod", "url": "https://penguinmod.com"})
    );
    assert_eq!(out["extensions"], json!(["penguinmod.bitwise"]));
}

#[test]
fn test_simple_mode_only_renames_and_relabels() {
    let archive = open(build_project_archive(&penguinmod_manifest(), &[]));

    let (converted, report) =
        convert_archive(&archive, ConvertOptions::rename_only(Direction::PmToTw)).unwrap();
    let manifest = manifest_of(&converted);

    // Agent set, the rest of meta kept
    assert_eq!(manifest["meta"]["agent"], "TurboWarp");
    assert_eq!(manifest["meta"]["custom"], "x");

    // PenguinMod sections and blocks survive the lenient level
    assert!(manifest.get("runtimeOptions").is_some());
    assert!(manifest["targets"][1]["blocks"].get("b2").is_some());

    // pm.-prefixed ids survive; only penguinmod. ids are filtered
    assert_eq!(manifest["extensions"], json!(["pen", "text", "pm.lasers"]));
    assert_eq!(report.warnings, vec!["Removed extension: penguinmod.camera"]);
    assert!(report.removed_blocks.is_empty());
}

#[test]
fn test_malformed_target_aborts_without_output() {
    let manifest = json!({
        "meta": {"agent": "PenguinMod"},
        "targets": [{"name": "Broken"}]
    });
    let archive = open(build_project_archive(&manifest, &[]));

    let err = convert_archive(&archive, ConvertOptions::new(Direction::PmToTw)).unwrap_err();
    assert!(matches!(err, ConvertError::MalformedManifest(_)));
}

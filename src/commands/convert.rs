// src/commands/convert.rs

//! Convert command

use anyhow::{Context, Result};
use sbshift::{convert_archive, ConvertOptions, ConvertReport, Direction, ProjectArchive};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// Convert a project archive to the other dialect and write the result
/// next to the input (or to `output`).
///
/// # Arguments
/// * `file` - Path to the input archive
/// * `direction` - Conversion direction
/// * `output` - Optional output path (None = prefixed input name)
/// * `simple` - Rename-only strictness level
/// * `dry_run` - Convert and report without writing anything
pub fn cmd_convert(
    file: &Path,
    direction: Direction,
    output: Option<PathBuf>,
    simple: bool,
    dry_run: bool,
) -> Result<()> {
    info!("loading project: {}", file.display());
    let reader =
        File::open(file).with_context(|| format!("failed to open {}", file.display()))?;
    let archive = ProjectArchive::open(reader)
        .with_context(|| format!("failed to read project archive: {}", file.display()))?;

    let options = if simple {
        ConvertOptions::rename_only(direction)
    } else {
        ConvertOptions::new(direction)
    };

    let (converted, report) = convert_archive(&archive, options)
        .with_context(|| format!("failed to convert {}", file.display()))?;

    if dry_run {
        println!(
            "Dry run: would convert {} to {}",
            file.display(),
            direction.destination()
        );
        print_report(&report, &options);
        return Ok(());
    }

    let output_path = output.unwrap_or_else(|| default_output_path(file, direction));
    info!("repacking project: {}", output_path.display());
    let writer = File::create(&output_path)
        .with_context(|| format!("failed to create output file: {}", output_path.display()))?;
    converted
        .serialize(writer)
        .with_context(|| format!("failed to write archive: {}", output_path.display()))?;

    println!(
        "Converted to {}: {}",
        direction.destination(),
        output_path.display()
    );
    print_report(&report, &options);

    Ok(())
}

fn print_report(report: &ConvertReport, options: &ConvertOptions) {
    if !report.warnings.is_empty() {
        println!("\n{} warning(s):", report.warnings.len());
        for warning in &report.warnings {
            println!("- {}", warning);
        }
    }

    // Block removal only happens on a full-reset forward conversion; the
    // report is silent about it everywhere else.
    if options.direction == Direction::PmToTw && options.full_reset {
        if report.removed_blocks.is_empty() {
            println!("No PenguinMod-only blocks found");
        } else {
            println!(
                "Removed {} PenguinMod-only block(s):",
                report.removed_blocks.len()
            );
            for block in &report.removed_blocks {
                println!("- {}: {}", block.sprite, block.opcode);
            }
        }
    }
}

/// Default output path: the input's directory with the dialect prefix on the
/// file name (`TurboWarp_project.pmp`, `PenguinMod_project.sb3`).
fn default_output_path(input: &Path, direction: Direction) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", direction.output_prefix(), name))
}

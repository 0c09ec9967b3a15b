// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: input project archive
fn file_arg() -> Arg {
    Arg::new("file")
        .required(true)
        .value_name("FILE")
        .help("Path to the project archive (.pmp / .sb3)")
}

fn build_cli() -> Command {
    Command::new("sbshift")
        .version(env!("CARGO_PKG_VERSION"))
        .author("sbshift Contributors")
        .about("Convert Scratch-derived project archives between PenguinMod and TurboWarp")
        .subcommand_required(false)
        .subcommand(
            Command::new("convert")
                .about("Convert a project archive to the other dialect")
                .arg(file_arg())
                .arg(
                    Arg::new("mode")
                        .short('m')
                        .long("mode")
                        .required(true)
                        .value_name("MODE")
                        .value_parser(["pm-to-tw", "tw-to-pm"])
                        .help("Conversion direction"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .help("Output path (default: TurboWarp_/PenguinMod_ prefix on the input name)"),
                )
                .arg(
                    Arg::new("simple")
                        .long("simple")
                        .action(clap::ArgAction::SetTrue)
                        .help("Rename-only conversion: skip meta reset and block removal"),
                )
                .arg(
                    Arg::new("dry_run")
                        .long("dry-run")
                        .action(clap::ArgAction::SetTrue)
                        .help("Convert and report without writing the output archive"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show dialect, metadata, extensions and block counts of a project archive")
                .arg(file_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(clap::ArgAction::SetTrue)
                        .help("Emit the summary as JSON"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(Arg::new("shell").required(true).help("Shell to generate completions for")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("sbshift.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }

    println!("cargo:warning=Man page generated at {}", man_path.display());
}

//! Build script for abls-cli.
//!
//! This script generates the man page at build time using clap_mangen and
//! stamps the build date and commit used by the version banner.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use chrono::DateTime;
use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Value stamped when a build property cannot be determined.
const UNKNOWN: &str = "none";

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/list.rs.
fn build_cli() -> Command {
    Command::new("abls")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print inputs as absolute filesystem paths")
        .long_about(
            "Print each input as an absolute path, one per line. Inputs are read from \
             standard input (when piped) and from arguments. A single directory is listed \
             instead of printed; no input lists the current directory.",
        )
        .disable_version_flag(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dirs")
                .short('d')
                .long("dirs")
                .help("Show only directories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("files")
                .short('f')
                .long("files")
                .help("Show only files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Show hidden entries")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version information and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("paths")
                .value_name("FILES")
                .help("Paths to print; a single directory is listed instead")
                .num_args(0..),
        )
}

/// Build date: `ABLS_BUILD_DATE`, else `SOURCE_DATE_EPOCH`, else unknown.
fn build_date() -> String {
    if let Ok(date) = env::var("ABLS_BUILD_DATE") {
        return date;
    }

    env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|epoch| epoch.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map_or_else(
            || UNKNOWN.to_string(),
            |dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        )
}

/// Build commit: `ABLS_BUILD_COMMIT`, else `git rev-parse`, else unknown.
fn build_commit() -> String {
    if let Ok(commit) = env::var("ABLS_BUILD_COMMIT") {
        return commit;
    }

    process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("abls.1"), buffer).unwrap();

    // Stamp the version banner
    println!("cargo:rustc-env=ABLS_BUILD_DATE={}", build_date());
    println!("cargo:rustc-env=ABLS_BUILD_COMMIT={}", build_commit());

    println!("cargo:rerun-if-env-changed=ABLS_BUILD_DATE");
    println!("cargo:rerun-if-env-changed=ABLS_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

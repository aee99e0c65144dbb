//! CLI entry point for permguard.
//!
//! This binary is intentionally thin: it parses arguments, resolves the
//! working directory, and prints the text report. All verification logic
//! lives in the `permguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use permguard_app::{render_text_report, run_check, verdict_exit_code};

/// Takes no arguments: the verifier always scans the directory it is run in.
#[derive(Parser, Debug)]
#[command(
    name = "permguard",
    version,
    about = "Verify GitHub Actions workflow permissions in the current repository"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("permguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let repo_root = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|dir| anyhow::anyhow!("working directory is not valid UTF-8: {}", dir.display()))?;

    let report = run_check(&repo_root)?;
    print!("{}", render_text_report(&report));

    Ok(verdict_exit_code(report.verdict))
}

//! pattern-diff: compare the key patterns of two snapshots
//!
//! Usage:
//!   pattern-diff <keys_a> <keys_b>     # print patterns only in A (-) or only in B (+)
//!   pattern-diff <keys_a> <keys_b> -q  # quiet: exit 0 if same, 1 if different
//!
//! Each file holds one key per line. Use in ops scripts to notice when a cache
//! or metric namespace changes shape between two dumps.

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use pattern_engine::{extract_generalized_patterns, fingerprint};

#[derive(Parser)]
#[command(name = "pattern-diff")]
#[command(about = "Compare the generalized key patterns of two key snapshots", long_about = None)]
struct Cli {
    /// Baseline key snapshot, one key per line
    keys_a: PathBuf,

    /// New key snapshot, one key per line
    keys_b: PathBuf,

    /// Quiet: only exit code (0=same, 1=different)
    #[arg(short, long)]
    quiet: bool,
}

fn load_patterns(path: &Path) -> Result<BTreeSet<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(extract_generalized_patterns(contents.lines()))
}

fn compare(a: &BTreeSet<String>, b: &BTreeSet<String>) -> (Vec<String>, Vec<String>) {
    let only_a = a.difference(b).cloned().collect();
    let only_b = b.difference(a).cloned().collect();
    (only_a, only_b)
}

fn run(cli: &Cli) -> Result<bool> {
    let patterns_a = load_patterns(&cli.keys_a)?;
    let patterns_b = load_patterns(&cli.keys_b)?;

    if cli.quiet {
        return Ok(fingerprint::compute(&patterns_a) != fingerprint::compute(&patterns_b));
    }

    let (only_a, only_b) = compare(&patterns_a, &patterns_b);
    if only_a.is_empty() && only_b.is_empty() {
        println!("No differences.");
        return Ok(false);
    }
    for p in &only_a {
        println!("- {}", p);
    }
    for p in &only_b {
        println!("+ {}", p);
    }
    Ok(true)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 2 } else { 0 });
        }
    };

    match run(&cli) {
        Ok(has_diff) => process::exit(if has_diff { 1 } else { 0 }),
        Err(e) => {
            eprintln!("pattern-diff: {:#}", e);
            process::exit(2);
        }
    }
}

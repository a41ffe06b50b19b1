//! Binary entrypoint: read keys from stdin, write generalized patterns to stdout.
//!
//! Input is one JSON object `{"keys": [...]}` or, with `--input lines`, one key
//! per line. Output is one JSON object, or one pattern per line with
//! `--output text`. Failures produce an ErrorOutput object and exit code 1.
//! Logs go to stderr.

use clap::Parser;
use std::io::{self, Read, Write};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use pattern_engine::config::{InputFormat, OutputFormat};
use pattern_engine::types::ErrorOutput;
use pattern_engine::{extract_report, EngineError, Input, Output, RunConfig};

#[derive(Parser)]
#[command(name = "pattern-engine")]
#[command(about = "Generalize dot-delimited keys into regex patterns", long_about = None)]
struct Cli {
  /// How keys are read from stdin
  #[arg(long, value_enum, default_value_t = InputFormat::Json, env = "PATTERN_ENGINE_INPUT")]
  input: InputFormat,

  /// How patterns are written to stdout
  #[arg(long, value_enum, default_value_t = OutputFormat::Json, env = "PATTERN_ENGINE_OUTPUT")]
  output: OutputFormat,

  /// Include per-group decisions in JSON output
  #[arg(long)]
  explain: bool,

  /// Verbose logging on stderr
  #[arg(short, long)]
  verbose: bool,
}

impl From<&Cli> for RunConfig {
  fn from(cli: &Cli) -> Self {
    RunConfig {
      input: cli.input,
      output: cli.output,
      explain: cli.explain,
    }
  }
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let config = RunConfig::from(&cli);
  if let Err(e) = run_binary(&config) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = serde_json::to_writer(&mut out, &ErrorOutput::new(e.to_string()));
    let _ = writeln!(out);
    let _ = writeln!(io::stderr(), "pattern-engine error: {}", e);
    std::process::exit(1);
  }
}

fn init_tracing(verbose: bool) {
  let default = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
  let filter = EnvFilter::builder()
    .with_default_directive(default.into())
    .from_env_lossy();
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn run_binary(config: &RunConfig) -> Result<(), EngineError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let keys = read_keys(&raw, config.input)?;
  debug!(keys = keys.len(), "read input");
  let report = extract_report(&keys);

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  match config.output {
    OutputFormat::Json => {
      serde_json::to_writer(&mut out, &Output::from_report(report, config.explain))?;
      writeln!(out)?;
    }
    OutputFormat::Text => {
      for pattern in &report.patterns {
        writeln!(out, "{}", pattern)?;
      }
    }
  }
  out.flush()?;
  Ok(())
}

fn read_keys(raw: &str, format: InputFormat) -> Result<Vec<String>, EngineError> {
  match format {
    InputFormat::Json => {
      if raw.trim().is_empty() {
        return Err(EngineError::input("expected a JSON object, got empty stdin"));
      }
      let input: Input = serde_json::from_str(raw)?;
      Ok(input.keys)
    }
    InputFormat::Lines => Ok(raw.lines().map(str::to_string).collect()),
  }
}

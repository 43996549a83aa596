//! iocfang command line entry point.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use iocfang::logging::{init_tracing, init_tracing_json};
use iocfang::{Direction, FangConfig, FangError};

/// Defang or refang network indicators in text
#[derive(Parser)]
#[command(name = "iocfang")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Rewrite direction
    #[arg(value_enum)]
    mode: Mode,

    /// Read input from this file instead of stdin
    #[arg(value_name = "FILE", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Input text given inline
    #[arg(short, long)]
    text: Option<String>,

    /// Emit the full JSON report instead of the rewritten text
    #[arg(long)]
    json: bool,

    /// JSON budget config file
    #[arg(short = 'C', long = "config", env = "IOCFANG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the maximum input size in bytes
    #[arg(long, value_name = "BYTES")]
    max_input_bytes: Option<usize>,

    /// Log as JSON on stderr
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Defang,
    Refang,
}

impl From<Mode> for Direction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Defang => Direction::Defang,
            Mode::Refang => Direction::Refang,
        }
    }
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.input {
        return std::fs::read_to_string(path)
            .map_err(FangError::from)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(FangError::from)
        .context("reading stdin")?;
    Ok(buf)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut cfg = match &cli.config {
        Some(path) => {
            FangConfig::load(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => FangConfig::default(),
    };
    if let Some(max) = cli.max_input_bytes {
        cfg.max_input_bytes = max;
    }

    let text = read_input(cli)?;
    if text.is_empty() {
        return Err(iocfang::log_error!(FangError::InvalidInput(
            "No input text provided.".to_string()
        ))
        .into());
    }

    let report = iocfang::transform_with(&text, cli.mode.into(), &cfg)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.output);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if cli.log_json {
        init_tracing_json();
    } else {
        init_tracing();
    }

    if let Err(e) = run(&cli) {
        eprintln!("iocfang: {:#}", e);
        std::process::exit(1);
    }
}

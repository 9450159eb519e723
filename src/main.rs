//! bmi-engine: evaluate one BMI request.
//!
//! Reads a JSON request from stdin (or `--input <path>`), writes the JSON
//! report to stdout.
//!
//! ```bash
//! echo '{"mode": "basic", "weight_kg": 70, "height_cm": 175}' | bmi-engine
//! ```
//!
//! Invalid input prints `{"error": ..., "details": [...]}` and exits with
//! status 1; a request the growth reference cannot serve exits with 3.

use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bmi_engine::adapters::growth_reference;
use bmi_engine::adapters::sanitize::SanitizingMakeWriter;
use bmi_engine::config::{Config, LogMode};
use bmi_engine::{AssessmentService, BmiError, Request};

const USAGE: &str = "Usage: bmi-engine [--input <path>]\n\nReads a JSON request from stdin (or <path>) and prints the JSON report.\nModes: basic, adult, child.";

fn main() -> Result<()> {
    let input_path = parse_args();
    let config = Config::from_env()?;

    let (writer, _guard) = match config.log_mode {
        LogMode::File => {
            if let Some(parent) = config.log_file.parent() {
                // Best-effort: a missing directory shows up as the open error below.
                let _ = std::fs::create_dir_all(parent);
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.log_file)
                .with_context(|| format!("opening log file {}", config.log_file.display()))?;
            tracing_appender::non_blocking(file)
        }
        LogMode::Stderr => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(SanitizingMakeWriter::with_limit(writer, config.sanitize_max_bytes)),
        )
        .init();

    let service = AssessmentService::new(Arc::new(growth_reference(
        config.growth_reference.as_deref(),
    )?));
    tracing::info!("Using growth reference '{}'", service.reference().name);

    let raw = match &input_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };

    let request: Request = serde_json::from_str(&raw).context("parsing request JSON")?;

    match service.handle(&request) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(err @ (BmiError::Validation(_) | BmiError::NotComputable)) => {
            let (details, code) = match &err {
                BmiError::Validation(errors) => (errors.clone(), 1),
                _ => (Vec::new(), 3),
            };
            tracing::warn!("Request rejected (exit {}, {} failed rule(s))", code, details.len());
            let body = serde_json::json!({ "error": err.to_string(), "details": details });
            println!("{}", serde_json::to_string_pretty(&body)?);
            drop(_guard);
            std::process::exit(code);
        }
        Err(err) => Err(err.into()),
    }
}

fn parse_args() -> Option<std::path::PathBuf> {
    let mut args = std::env::args().skip(1);
    let mut input = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let p = args.next().unwrap_or_default();
                if p.is_empty() {
                    eprintln!("{USAGE}");
                    std::process::exit(2);
                }
                input = Some(std::path::PathBuf::from(p));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown arg: {arg}\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    input
}

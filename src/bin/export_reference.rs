//! Growth reference export utility.
//!
//! Writes the built-in CDC BMI-for-age tables as JSON, in the format
//! `BMI_GROWTH_REFERENCE` accepts. The output is a starting point for a
//! denser (monthly) replacement reference.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin export_reference -- [--out <path>] [--force]
//! ```
//!
//! Without `--out` the JSON goes to stdout.

use bmi_engine::adapters::{cdc, json};

const USAGE: &str = "Usage: export_reference [--out <path>] [--force]";

fn main() {
    let mut args = std::env::args().skip(1);
    let mut out_path: Option<std::path::PathBuf> = None;
    let mut force = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                let p = args.next().unwrap_or_default();
                if p.is_empty() {
                    eprintln!("{USAGE}");
                    std::process::exit(2);
                }
                out_path = Some(std::path::PathBuf::from(p));
            }
            "--force" => force = true,
            "-h" | "--help" => {
                println!(
                    "{USAGE}\n\nPrints the built-in growth reference as JSON, or writes it to <path>. Refuses to overwrite an existing file unless --force is given."
                );
                return;
            }
            _ => {
                eprintln!("Unknown arg: {arg}\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let reference = cdc::reference();
    let body = match json::to_json(reference) {
        Ok(body) => body,
        Err(e) => {
            eprintln!("Failed to serialize growth reference: {e}");
            std::process::exit(1);
        }
    };

    let Some(out_path) = out_path else {
        println!("{body}");
        return;
    };

    if out_path.exists() && !force {
        eprintln!(
            "Refusing to overwrite existing file: {} (use --force)",
            out_path.display()
        );
        std::process::exit(1);
    }

    if let Err(e) = std::fs::write(&out_path, format!("{body}\n")) {
        eprintln!("Failed to write {}: {e}", out_path.display());
        std::process::exit(1);
    }

    println!(
        "Wrote growth reference '{}' to {}",
        reference.name,
        out_path.display()
    );
}

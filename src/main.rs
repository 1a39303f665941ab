//! treetally - source tree size and composition estimator.
//!
//! Reads `treetally.json` from the working directory (scanning `.` with
//! defaults when there is none), walks the configured root, and prints
//! the indented tree followed by the totals summary.

use std::fs;

use color_eyre::eyre::{Context, Report, Result};

use treetally_core::ProjectConfig;
use treetally_report::{print_summary, print_tree};
use treetally_scan::TreeScanner;

const CONFIG_FILE: &str = "treetally.json";

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treetally_scan=info".parse().unwrap()),
        )
        .init();

    let config = load_config()?;

    eprintln!("Scanning {}...", config.path.display());

    let scanner = TreeScanner::for_config(&config);
    let tree = scanner.scan(&config).context("Scan failed")?;

    print_tree(&tree.root);
    println!();
    print_summary(&tree);

    eprintln!();
    eprintln!("Scanned in {:.2}s", tree.scan_duration.as_secs_f64());

    Ok(())
}

/// Load `treetally.json` from the working directory; a missing file
/// means default settings, any other failure is fatal.
fn load_config() -> Result<ProjectConfig> {
    match fs::read_to_string(CONFIG_FILE) {
        Ok(raw) => {
            let config: ProjectConfig = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid {CONFIG_FILE}"))?;
            config
                .validate()
                .map_err(|message| Report::msg(format!("Invalid {CONFIG_FILE}: {message}")))?;
            tracing::debug!(name = %config.name, path = %config.path.display(), "loaded config");
            Ok(config)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no {CONFIG_FILE}, using defaults");
            Ok(ProjectConfig::default())
        }
        Err(err) => Err(err).with_context(|| format!("Failed to read {CONFIG_FILE}")),
    }
}

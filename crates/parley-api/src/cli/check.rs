//! `parley check` -- report whether the server could start.

use std::path::Path;

use serde::Serialize;

use parley_infra::credentials::{ASSEMBLYAI_API_KEY, ApiKeys, GEMINI_API_KEY, MURF_API_KEY};
use parley_types::config::ParleyConfig;
use parley_types::error::ConfigError;

#[derive(Debug, Serialize)]
struct KeyStatus {
    name: &'static str,
    present: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    config_path: String,
    config_file_found: bool,
    listen: String,
    static_dir: String,
    model: String,
    keys: Vec<KeyStatus>,
    ready: bool,
}

impl CheckReport {
    fn new(config_path: &Path, config: &ParleyConfig, missing: &[String]) -> Self {
        let keys: Vec<KeyStatus> = [ASSEMBLYAI_API_KEY, GEMINI_API_KEY, MURF_API_KEY]
            .into_iter()
            .map(|name| KeyStatus {
                name,
                present: !missing.iter().any(|m| m == name),
            })
            .collect();

        Self {
            config_path: config_path.display().to_string(),
            config_file_found: config_path.exists(),
            listen: format!("{}:{}", config.server.host, config.server.port),
            static_dir: config.storage.static_dir.clone(),
            model: config.generation.model.clone(),
            ready: missing.is_empty(),
            keys,
        }
    }
}

/// Print the readiness report. Fails when any API key is missing.
pub fn run_check(config_path: &Path, config: &ParleyConfig, json: bool) -> anyhow::Result<()> {
    let missing = match ApiKeys::from_env() {
        Ok(_) => Vec::new(),
        Err(ConfigError::MissingApiKeys(names)) => names,
        Err(e) => return Err(e.into()),
    };
    let report = CheckReport::new(config_path, config, &missing);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.ready {
        return Err(ConfigError::MissingApiKeys(missing).into());
    }
    Ok(())
}

fn print_report(report: &CheckReport) {
    let check_mark = |ok: bool| {
        if ok {
            format!("{}", console::style("✓").green())
        } else {
            format!("{}", console::style("✗").red())
        }
    };

    println!();
    println!("  {} Parley configuration check", console::style("🔍").bold());
    println!();

    let source = if report.config_file_found {
        report.config_path.clone()
    } else {
        format!("{} (not found, using defaults)", report.config_path)
    };
    println!("  {} {}", console::style("Config:").dim(), source);
    println!("  {} {}", console::style("Listen:").dim(), report.listen);
    println!("  {} {}", console::style("Static:").dim(), report.static_dir);
    println!("  {} {}", console::style("Model:").dim(), report.model);
    println!();

    for key in &report.keys {
        println!("  {} {}", check_mark(key.present), key.name);
    }
    println!();
}

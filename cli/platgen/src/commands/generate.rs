//! `platgen generate` — render every configured output and write it.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::{debug, info};

use platgen_emit::{
    generate, EmitOutcome, EmitReport, Emitter, MemoryEmitter, RenderInputs, WritePolicy,
};

use crate::config::PlatgenConfig;
use crate::writer::FileEmitter;

/// Read the configured environment variable at generation time.
pub fn capture_env(config: &PlatgenConfig) -> Option<String> {
    let value = std::env::var(&config.support.env).ok();
    debug!(var = %config.support.env, ?value, "captured environment value");
    value
}

/// Render inputs drawn from `config`.
pub fn render_inputs<'a>(config: &'a PlatgenConfig, env_value: Option<&'a str>) -> RenderInputs<'a> {
    RenderInputs::new(&config.tools, &config.support.platforms)
        .with_layout(config.support.layout.clone())
        .with_env_value(env_value)
        .with_generator(&config.generator)
}

/// Render and emit every output of `config`, relative to `base_dir`.
pub fn emit_all(
    config: &PlatgenConfig,
    base_dir: &Path,
    env_value: Option<&str>,
    emitter: &mut dyn Emitter,
    policy: WritePolicy,
) -> Result<Vec<EmitReport>> {
    let outputs = config.resolved_outputs(base_dir);
    let inputs = render_inputs(config, env_value);
    let reports = generate(&outputs, &inputs, emitter, policy).context("emitting generated files")?;
    Ok(reports)
}

/// Entry point for `platgen generate`.
pub fn run(
    config: &PlatgenConfig,
    base_dir: &Path,
    force: bool,
    dry_run: bool,
    format: Option<&str>,
) -> Result<()> {
    if config.outputs.is_empty() {
        bail!("no [[output]] entries configured");
    }
    let format = format.unwrap_or("text");
    if !matches!(format, "text" | "json") {
        bail!("unknown format: '{format}'. Use text or json");
    }

    let env_value = capture_env(config);
    let policy = if force {
        WritePolicy::Always
    } else {
        WritePolicy::SkipIfUnchanged
    };

    let reports = if dry_run {
        let mut emitter = MemoryEmitter::new();
        for output in config.resolved_outputs(base_dir) {
            if let Ok(existing) = std::fs::read_to_string(&output.path) {
                emitter.seed(output.path, existing);
            }
        }
        emit_all(config, base_dir, env_value.as_deref(), &mut emitter, policy)?
    } else {
        emit_all(config, base_dir, env_value.as_deref(), &mut FileEmitter, policy)?
    };

    let written = reports
        .iter()
        .filter(|r| r.outcome == EmitOutcome::Written)
        .count();
    info!(written, total = reports.len(), dry_run, "generation finished");

    if format == "json" {
        println!("{}", reports_json(&reports, dry_run)?);
        return Ok(());
    }

    let verb = if dry_run { "would write" } else { "wrote" };
    for report in &reports {
        let status = match report.outcome {
            EmitOutcome::Written => verb,
            EmitOutcome::Unchanged => "unchanged",
        };
        println!("  {status:<12} {:<22} {}", report.target.name(), report.path.display());
    }
    println!();
    println!(
        "{} of {} file(s) {verb}",
        written,
        reports.len()
    );
    Ok(())
}

/// Machine-readable form of a generation run.
fn reports_json(reports: &[EmitReport], dry_run: bool) -> Result<String> {
    let data = json!({
        "dry_run": dry_run,
        "outputs": reports,
    });
    Ok(serde_json::to_string_pretty(&data)?)
}

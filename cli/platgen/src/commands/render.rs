//! `platgen render` — print one generated file to stdout.

use anyhow::{bail, Result};

use platgen_emit::{render, Target};

use crate::commands::generate::{capture_env, render_inputs};
use crate::config::PlatgenConfig;

/// Render `target_name` from `config` without writing anything.
pub fn run(config: &PlatgenConfig, target_name: &str) -> Result<()> {
    let text = render_target(config, target_name, capture_env(config).as_deref())?;
    print!("{text}");
    Ok(())
}

fn render_target(config: &PlatgenConfig, target_name: &str, env_value: Option<&str>) -> Result<String> {
    let Some(target) = Target::parse(target_name) else {
        let known: Vec<&str> = Target::all().iter().map(Target::name).collect();
        bail!(
            "unknown target: '{target_name}'. Available targets: {}",
            known.join(", ")
        );
    };
    Ok(render(target, &render_inputs(config, env_value)))
}

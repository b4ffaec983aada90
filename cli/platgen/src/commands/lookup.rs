//! `platgen lookup` — answer a decision directly from the configuration.
//!
//! Uses the same sorted table and wildcard fallback as the generated
//! functions, so the answer matches what the generated code returns.

use anyhow::{bail, Result};
use serde_json::json;

use platgen_core::{GeneratedTable, KeyArity, PlatformKey, Tool};

use crate::config::PlatgenConfig;

/// Answer of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub key: String,
    pub value: String,
    /// False when the wildcard fallback supplied the value.
    pub matched: bool,
}

/// Resolve `key` against `subject`: a tool name or `support`.
pub fn resolve(config: &PlatgenConfig, subject: &str, key: &str) -> Result<Answer> {
    let arity = if key.matches(platgen_core::SEPARATOR).count() == 2 {
        KeyArity::Toolchain
    } else {
        KeyArity::Platform
    };
    let key = PlatformKey::parse(key, arity)?;
    let composed = key.compose();

    if subject == "support" {
        if key.arity() != KeyArity::Platform {
            bail!("support flags are keyed by os/arch, got '{composed}'");
        }
        // The support maps never carry a wildcard entry, so an absent key
        // reads as false in the generated code regardless of `""`.
        let table = GeneratedTable::from_mapping(&config.support.platforms);
        let value = table.get(&composed).copied();
        return Ok(Answer {
            matched: value.is_some(),
            value: value.unwrap_or(false).to_string(),
            key: composed,
        });
    }

    let Some(tool) = Tool::parse(subject) else {
        bail!("unknown tool: '{subject}'. Expected one of cc, cxx, ld, asm, support");
    };
    let table = GeneratedTable::from_mapping(config.tools.mapping(tool));
    let matched = table.get(&composed).is_some();
    let value = table.resolve(&key).cloned().unwrap_or_default();
    Ok(Answer {
        key: composed,
        value,
        matched,
    })
}

/// Entry point for `platgen lookup`.
pub fn run(config: &PlatgenConfig, subject: &str, key: &str, format: Option<&str>) -> Result<()> {
    let answer = resolve(config, subject, key)?;
    match format.unwrap_or("text") {
        "json" => {
            let data = json!({
                "subject": subject,
                "key": answer.key,
                "value": answer.value,
                "matched": answer.matched,
            });
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        "text" => {
            let source = if answer.matched { "exact" } else { "default" };
            println!("{} ({source})", answer.value);
        }
        other => bail!("unknown format: '{other}'. Use text or json"),
    }
    Ok(())
}

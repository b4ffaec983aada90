//! `platgen init` — write a starter configuration.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{PlatgenConfig, CONFIG_FILE};

/// Create `platgen.toml` in `dir`, refusing to overwrite an existing one.
pub fn run(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    fs::write(&path, PlatgenConfig::template())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

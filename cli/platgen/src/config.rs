//! `platgen.toml` parsing and output resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use platgen_core::{DefaultMapping, ToolDefaults};
use platgen_emit::{Output, SupportLayout, Target, DEFAULT_GENERATOR};

/// File name searched for when no `--config` is given.
pub const CONFIG_FILE: &str = "platgen.toml";

/// The top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlatgenConfig {
    /// Name written into the do-not-edit header.
    #[serde(default = "default_generator")]
    pub generator: String,
    /// Per-platform tool defaults.
    #[serde(default)]
    pub tools: ToolDefaults,
    /// Platform support flags.
    #[serde(default)]
    pub support: SupportConfig,
    /// Files to generate.
    #[serde(default, rename = "output")]
    pub outputs: Vec<OutputConfig>,
}

fn default_generator() -> String {
    DEFAULT_GENERATOR.to_string()
}

/// Support matrix section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SupportConfig {
    /// Environment variable captured into the reduced matrix.
    #[serde(default = "default_env")]
    pub env: String,
    /// Support flag per `os/arch`.
    #[serde(default)]
    pub platforms: DefaultMapping<bool>,
    /// Declared names.
    #[serde(flatten)]
    pub layout: SupportLayout,
}

fn default_env() -> String {
    "CGO_ENABLED".to_string()
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            platforms: DefaultMapping::new(),
            layout: SupportLayout::default(),
        }
    }
}

/// One `[[output]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Destination, relative to the directory holding the config.
    pub path: PathBuf,
    /// What to render. Tool-default flavors are inferred from the path when omitted.
    #[serde(default)]
    pub target: Option<Target>,
}

impl OutputConfig {
    /// Resolve against `base_dir`, inferring the target if needed.
    pub fn resolve(&self, base_dir: &Path) -> Output {
        let target = self
            .target
            .unwrap_or_else(|| Target::infer_from_path(&self.path));
        Output::new(target, base_dir.join(&self.path))
    }
}

impl PlatgenConfig {
    /// Load a config from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Search upward from `start_dir` for `platgen.toml`, returning the config
    /// and the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a config from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing platgen.toml")
    }

    /// All outputs resolved against `base_dir`, in declaration order.
    pub fn resolved_outputs(&self, base_dir: &Path) -> Vec<Output> {
        self.outputs.iter().map(|o| o.resolve(base_dir)).collect()
    }

    /// Template written by `platgen init`.
    pub fn template() -> String {
        r#"generator = "go tool dist"

[tools]
pkg-config = "pkg-config"

[tools.cc]
"" = "gcc"
"darwin/amd64" = "clang"
"darwin/arm64" = "clang"

[tools.cxx]
"" = "g++"
"darwin/amd64" = "clang++"
"darwin/arm64" = "clang++"

[tools.ld]
"" = ""

[tools.asm]
"" = ""

[support]
env = "CGO_ENABLED"

[support.platforms]
"darwin/amd64" = true
"darwin/arm64" = true
"js/wasm" = false
"linux/amd64" = true
"linux/arm64" = true
"plan9/386" = false
"windows/amd64" = true

[[output]]
path = "src/cmd/go/internal/cfg/zdefaultcc.go"
target = "tool-defaults"

[[output]]
path = "src/cmd/cgo/zdefaultcc.go"
target = "command-tool-defaults"

[[output]]
path = "src/cmd/go/internal/cfg/zosarch.go"
target = "full-support"

[[output]]
path = "src/go/build/zcgo.go"
target = "reduced-support"
"#
        .to_string()
    }
}

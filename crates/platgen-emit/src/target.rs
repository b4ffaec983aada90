//! Generated-file destinations.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Path fragment that marks the library copy of the tool-default table.
pub const LIBRARY_DEFAULTS_MARKER: &str = "go/internal/cfg";

/// Which generated file to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Tool defaults with exported names, for the configuration package.
    ToolDefaults,
    /// The same tool defaults with unexported names, for a command's `main`.
    CommandToolDefaults,
    /// Every platform with its support flag.
    FullSupport,
    /// Supported platforms only, plus the captured environment value.
    ReducedSupport,
}

impl Target {
    /// Parse a target from its kebab-case name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tool-defaults" => Some(Target::ToolDefaults),
            "command-tool-defaults" => Some(Target::CommandToolDefaults),
            "full-support" => Some(Target::FullSupport),
            "reduced-support" => Some(Target::ReducedSupport),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Target::ToolDefaults => "tool-defaults",
            Target::CommandToolDefaults => "command-tool-defaults",
            Target::FullSupport => "full-support",
            Target::ReducedSupport => "reduced-support",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Target::ToolDefaults => "exported tool-default lookup functions (package cfg)",
            Target::CommandToolDefaults => "unexported tool-default lookup functions (package main)",
            Target::FullSupport => "boolean support flag for every platform",
            Target::ReducedSupport => "supported platforms plus captured environment value",
        }
    }

    pub fn all() -> &'static [Target] {
        &[
            Target::ToolDefaults,
            Target::CommandToolDefaults,
            Target::FullSupport,
            Target::ReducedSupport,
        ]
    }

    /// Choose a tool-defaults flavor from a destination path.
    ///
    /// Destinations under [`LIBRARY_DEFAULTS_MARKER`] get the exported table;
    /// everything else gets the command table. Prefer an explicit target.
    pub fn infer_from_path(path: &Path) -> Self {
        let normalized = path.to_string_lossy().replace('\\', "/");
        if normalized.contains(LIBRARY_DEFAULTS_MARKER) {
            Target::ToolDefaults
        } else {
            Target::CommandToolDefaults
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

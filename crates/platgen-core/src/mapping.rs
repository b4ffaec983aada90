//! Caller-supplied default mappings.
//!
//! Mappings are plain data. Nothing here validates them: duplicate keys are
//! impossible by construction, and a missing wildcard simply falls back to
//! the value type's empty rendering.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::key::WILDCARD;

/// Mapping from composed platform key to value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DefaultMapping<V> {
    entries: HashMap<String, V>,
}

impl<V> Default for DefaultMapping<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> DefaultMapping<V> {
    /// An empty mapping with no wildcard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a composed key, returning any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    /// Builder-style wildcard insertion.
    pub fn with_wildcard(mut self, value: V) -> Self {
        self.entries.insert(WILDCARD.to_string(), value);
        self
    }

    /// Builder-style entry insertion.
    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// The fallback value, if the wildcard key is present.
    pub fn wildcard(&self) -> Option<&V> {
        self.entries.get(WILDCARD)
    }

    /// Number of entries, wildcard included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order, wildcard included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for DefaultMapping<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A tool whose default command is chosen per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// C compiler.
    Cc,
    /// C++ compiler.
    Cxx,
    /// Linker.
    Ld,
    /// Assembler.
    Asm,
}

impl Tool {
    /// Parse a tool name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cc" => Some(Tool::Cc),
            "cxx" | "c++" => Some(Tool::Cxx),
            "ld" => Some(Tool::Ld),
            "asm" => Some(Tool::Asm),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Cc => "cc",
            Tool::Cxx => "cxx",
            Tool::Ld => "ld",
            Tool::Asm => "asm",
        }
    }

    /// All tools, in configuration order.
    pub fn all() -> &'static [Tool] {
        &[Tool::Cc, Tool::Cxx, Tool::Ld, Tool::Asm]
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-platform default tool commands plus the pkg-config command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolDefaults {
    /// Command used for pkg-config on every platform.
    #[serde(default)]
    pub pkg_config: String,
    #[serde(default)]
    pub cc: DefaultMapping<String>,
    #[serde(default)]
    pub cxx: DefaultMapping<String>,
    #[serde(default)]
    pub ld: DefaultMapping<String>,
    #[serde(default)]
    pub asm: DefaultMapping<String>,
}

impl ToolDefaults {
    /// The mapping holding defaults for `tool`.
    pub fn mapping(&self, tool: Tool) -> &DefaultMapping<String> {
        match tool {
            Tool::Cc => &self.cc,
            Tool::Cxx => &self.cxx,
            Tool::Ld => &self.ld,
            Tool::Asm => &self.asm,
        }
    }
}

//! Composite platform keys.
//!
//! A key is the ordered join of its dimensions (OS, architecture, and an
//! optional toolchain) with [`SEPARATOR`]. Dimension values never contain the
//! separator, so composition is total and order-sensitive.

use std::fmt;

use crate::error::{KeyError, Result};

/// Separator placed between key dimensions.
pub const SEPARATOR: &str = "/";

/// The reserved key that selects the fallback value.
pub const WILDCARD: &str = "";

/// Join ordered dimension values into a key.
pub fn compose(dimensions: &[&str]) -> String {
    dimensions.join(SEPARATOR)
}

/// Number and names of the dimensions a key is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyArity {
    /// `os/arch`
    Platform,
    /// `os/arch/toolchain`
    Toolchain,
}

impl KeyArity {
    /// Parameter names in key order, as they appear in generated signatures.
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            KeyArity::Platform => &["goos", "goarch"],
            KeyArity::Toolchain => &["goos", "goarch", "toolchain"],
        }
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.parameters().len()
    }
}

impl fmt::Display for KeyArity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parameters().join(SEPARATOR))
    }
}

/// An ordered tuple of platform dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlatformKey {
    os: String,
    arch: String,
    toolchain: Option<String>,
}

impl PlatformKey {
    /// A two-dimensional `os/arch` key.
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
            toolchain: None,
        }
    }

    /// Extend the key with a toolchain dimension.
    pub fn with_toolchain(mut self, toolchain: impl Into<String>) -> Self {
        self.toolchain = Some(toolchain.into());
        self
    }

    /// Decompose `text` into a key of the given arity.
    pub fn parse(text: &str, arity: KeyArity) -> Result<Self> {
        let parts: Vec<&str> = text.split(SEPARATOR).collect();
        if parts.len() != arity.dimensions() {
            return Err(KeyError::Arity {
                key: text.to_string(),
                expected: arity.dimensions(),
                found: parts.len(),
            });
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(KeyError::EmptyDimension {
                key: text.to_string(),
            });
        }
        let key = Self::new(parts[0], parts[1]);
        Ok(match parts.get(2) {
            Some(toolchain) => key.with_toolchain(*toolchain),
            None => key,
        })
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn toolchain(&self) -> Option<&str> {
        self.toolchain.as_deref()
    }

    /// Arity implied by whether a toolchain is present.
    pub fn arity(&self) -> KeyArity {
        if self.toolchain.is_some() {
            KeyArity::Toolchain
        } else {
            KeyArity::Platform
        }
    }

    /// Dimension values in key order.
    pub fn dimensions(&self) -> Vec<&str> {
        let mut dims = vec![self.os.as_str(), self.arch.as_str()];
        if let Some(tc) = &self.toolchain {
            dims.push(tc);
        }
        dims
    }

    /// The serialized key text.
    pub fn compose(&self) -> String {
        compose(&self.dimensions())
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compose())
    }
}

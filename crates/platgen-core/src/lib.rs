//! Platform keys, default mappings, and sorted lookup tables for platgen.
//!
//! A configuration value is looked up by a composite platform key such as
//! `linux/amd64` or `linux/amd64/gcc`. The empty key is the wildcard and
//! supplies the fallback for every platform not listed explicitly.
//!
//! - **Key:** ordered dimension composition and decomposition
//! - **Mapping:** the caller-owned, immutable key → value input
//! - **Table:** the sorted projection used for rendering and runtime lookup

pub mod error;
pub mod key;
pub mod mapping;
pub mod table;

pub use error::KeyError;
pub use key::{compose, KeyArity, PlatformKey, SEPARATOR, WILDCARD};
pub use mapping::{DefaultMapping, Tool, ToolDefaults};
pub use table::GeneratedTable;

//! Decision-function compilers.
//!
//! Both the two-dimensional (`goos, goarch`) and the toolchain-qualified
//! (`goos, goarch, toolchain`) variants share one code path; only the key
//! arity, and therefore the signature and switch expression, differ.
//!
//! ```text
//! func DefaultCC(goos, goarch string) string {
//!     switch goos+`/`+goarch {
//!     case "linux/amd64":
//!         return "clang"
//!     }
//!     return "gcc"
//! }
//! ```

use platgen_core::{DefaultMapping, GeneratedTable, KeyArity};

use crate::quote::quote;

/// Render an exact-match decision function over `mapping`.
///
/// Branches follow the sorted key order. The trailing return yields the
/// wildcard value, or the empty string when the mapping has none. Every key
/// other than the wildcard must have exactly `arity` dimensions.
pub fn render_decision_fn(
    name: &str,
    arity: KeyArity,
    mapping: &DefaultMapping<String>,
) -> String {
    let table = GeneratedTable::from_mapping(mapping);
    let params = arity.parameters();

    let mut buf = String::new();
    buf.push_str(&format!("func {name}({} string) string {{\n", params.join(", ")));
    buf.push_str(&format!("\tswitch {} {{\n", params.join("+`/`+")));
    for (key, value) in table.entries() {
        buf.push_str(&format!("\tcase {}:\n\t\treturn {}\n", quote(key), quote(value)));
    }
    buf.push_str("\t}\n");
    let fallback = table.fallback().map(String::as_str).unwrap_or("");
    buf.push_str(&format!("\treturn {}\n", quote(fallback)));
    buf.push_str("}\n");

    tracing::debug!(
        function = name,
        %arity,
        branches = table.len(),
        "rendered decision function"
    );
    buf
}

/// Two-parameter `(goos, goarch)` decision function.
pub fn default_fn(name: &str, mapping: &DefaultMapping<String>) -> String {
    render_decision_fn(name, KeyArity::Platform, mapping)
}

/// Three-parameter `(goos, goarch, toolchain)` decision function.
pub fn toolchain_fn(name: &str, mapping: &DefaultMapping<String>) -> String {
    render_decision_fn(name, KeyArity::Toolchain, mapping)
}

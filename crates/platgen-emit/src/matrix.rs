//! Boolean platform-support matrices.
//!
//! The full matrix lists every platform with its flag. The reduced matrix
//! keeps only enabled platforms and carries one string constant captured
//! from the environment at generation time. Both walk the same sorted table,
//! so the reduced entries appear in the same relative order as in the full
//! matrix.

use platgen_core::{DefaultMapping, GeneratedTable};
use serde::Deserialize;

use crate::quote::quote;
use crate::source::SourceFile;

/// Declared names used by the two matrix files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SupportLayout {
    /// Package of the full matrix file.
    pub full_package: String,
    /// Variable holding the full matrix.
    pub full_var: String,
    /// Package of the reduced matrix file.
    pub reduced_package: String,
    /// Constant holding the captured environment value.
    pub env_const: String,
    /// Variable holding the reduced matrix.
    pub reduced_var: String,
}

impl Default for SupportLayout {
    fn default() -> Self {
        Self {
            full_package: "cfg".into(),
            full_var: "OSArchSupportsCgo".into(),
            reduced_package: "build".into(),
            env_const: "defaultCGO_ENABLED".into(),
            reduced_var: "cgoEnabled".into(),
        }
    }
}

/// Render a `map[string]bool` literal from a sorted table.
pub fn map_literal(var: &str, table: &GeneratedTable<bool>) -> String {
    let mut buf = format!("var {var} = map[string]bool{{\n");
    for (key, value) in table.entries() {
        buf.push_str(&format!("\t{}: {value},\n", quote(key)));
    }
    buf.push_str("}\n");
    buf
}

/// The full matrix table: every non-wildcard platform.
pub fn full_table(support: &DefaultMapping<bool>) -> GeneratedTable<bool> {
    GeneratedTable::from_mapping(support)
}

/// The reduced matrix table: enabled platforms only.
pub fn reduced_table(support: &DefaultMapping<bool>) -> GeneratedTable<bool> {
    full_table(support).retain(|_, enabled| *enabled)
}

/// Render the full support matrix file.
pub fn render_full(
    support: &DefaultMapping<bool>,
    layout: &SupportLayout,
    generator: &str,
) -> String {
    let table = full_table(support);
    let mut file = SourceFile::new(&layout.full_package).with_generator(generator);
    file.push(&map_literal(&layout.full_var, &table));
    tracing::debug!(platforms = table.len(), "rendered full support matrix");
    file.finish()
}

/// Render the reduced support matrix file.
///
/// `env_value` is embedded verbatim; `None` renders as the empty string.
pub fn render_reduced(
    support: &DefaultMapping<bool>,
    env_value: Option<&str>,
    layout: &SupportLayout,
    generator: &str,
) -> String {
    let table = reduced_table(support);
    let mut file = SourceFile::new(&layout.reduced_package).with_generator(generator);
    file.string_const(&layout.env_const, env_value.unwrap_or(""))
        .blank_line()
        .push(&map_literal(&layout.reduced_var, &table));
    tracing::debug!(platforms = table.len(), "rendered reduced support matrix");
    file.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DEFAULT_GENERATOR;

    fn support() -> DefaultMapping<bool> {
        [("windows/386", false), ("linux/amd64", true)]
            .into_iter()
            .collect()
    }

    #[test]
    fn full_matrix_lists_every_platform() {
        assert_eq!(
            render_full(&support(), &SupportLayout::default(), DEFAULT_GENERATOR),
            "// Code generated by go tool dist; DO NOT EDIT.\n\n\
             package cfg\n\n\
             var OSArchSupportsCgo = map[string]bool{\n\
             \t\"linux/amd64\": true,\n\
             \t\"windows/386\": false,\n\
             }\n"
        );
    }

    #[test]
    fn reduced_matrix_keeps_enabled_platforms() {
        assert_eq!(
            render_reduced(
                &support(),
                Some("1"),
                &SupportLayout::default(),
                DEFAULT_GENERATOR
            ),
            "// Code generated by go tool dist; DO NOT EDIT.\n\n\
             package build\n\n\
             const defaultCGO_ENABLED = \"1\"\n\n\
             var cgoEnabled = map[string]bool{\n\
             \t\"linux/amd64\": true,\n\
             }\n"
        );
    }

    #[test]
    fn absent_env_value_is_empty_string() {
        let text = render_reduced(
            &support(),
            None,
            &SupportLayout::default(),
            DEFAULT_GENERATOR,
        );
        assert!(text.contains("const defaultCGO_ENABLED = \"\"\n"));
    }

    #[test]
    fn reduced_is_ordered_subset_of_full() {
        let m: DefaultMapping<bool> = [
            ("netbsd/arm", true),
            ("js/wasm", false),
            ("aix/ppc64", true),
            ("plan9/386", false),
            ("darwin/amd64", true),
        ]
        .into_iter()
        .collect();
        let full: Vec<String> = full_table(&m).keys().map(str::to_string).collect();
        let reduced: Vec<String> = reduced_table(&m).keys().map(str::to_string).collect();
        let expected: Vec<String> = full
            .iter()
            .filter(|k| m.get(k.as_str()) == Some(&true))
            .cloned()
            .collect();
        assert_eq!(reduced, expected);
        assert_eq!(reduced, vec!["aix/ppc64", "darwin/amd64", "netbsd/arm"]);
    }

    #[test]
    fn wildcard_never_rendered() {
        let m = DefaultMapping::new()
            .with_wildcard(true)
            .with("linux/amd64", true);
        let literal = map_literal("m", &full_table(&m));
        assert_eq!(literal, "var m = map[string]bool{\n\t\"linux/amd64\": true,\n}\n");
    }

    #[test]
    fn layout_overrides_names() {
        let layout = SupportLayout {
            full_package: "platforms".into(),
            full_var: "Supported".into(),
            ..SupportLayout::default()
        };
        let text = render_full(&support(), &layout, "platgen");
        assert!(text.contains("package platforms\n"));
        assert!(text.contains("var Supported = map[string]bool{\n"));
    }
}

//! Behavioral tests over the generated text.
//!
//! `call` evaluates a rendered decision function the way its consumer would:
//! join the arguments with `/`, take the first matching `case`, otherwise the
//! trailing `return`.

use platgen_core::{compose, DefaultMapping, ToolDefaults};
use platgen_emit::{
    default_fn, render, render_full, render_reduced, toolchain_fn, RenderInputs, SupportLayout,
    Target, DEFAULT_GENERATOR,
};

fn unquote(lit: &str) -> String {
    let inner = lit
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or_else(|| panic!("not a quoted literal: {lit}"));
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => panic!("dangling escape in {lit}"),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Evaluate function `name` from `source` with the given arguments.
fn call(source: &str, name: &str, args: &[&str]) -> String {
    let start = source
        .find(&format!("func {name}("))
        .unwrap_or_else(|| panic!("function {name} not found"));
    let body = &source[start..];
    let body = &body[..body.find("\n}\n").expect("unterminated function")];
    let key = compose(args);

    let mut lines = body.lines().skip(2);
    let mut fallback = None;
    while let Some(line) = lines.next() {
        if let Some(case) = line.strip_prefix("\tcase ") {
            let case = unquote(case.trim_end_matches(':'));
            let ret = lines.next().expect("case without return");
            let value = unquote(ret.trim_start().trim_start_matches("return "));
            if case == key {
                return value;
            }
        } else if let Some(ret) = line.strip_prefix("\treturn ") {
            fallback = Some(unquote(ret));
        }
    }
    fallback.expect("no trailing return")
}

/// Parse the entries of map literal `var` from `source`.
fn map_entries(source: &str, var: &str) -> Vec<(String, bool)> {
    let start = source
        .find(&format!("var {var} = map[string]bool{{\n"))
        .unwrap_or_else(|| panic!("map {var} not found"));
    source[start..]
        .lines()
        .skip(1)
        .take_while(|l| *l != "}")
        .map(|l| {
            let l = l.trim().trim_end_matches(',');
            let (k, v) = l.rsplit_once(": ").expect("malformed entry");
            (unquote(k), v == "true")
        })
        .collect()
}

#[test]
fn exact_match_and_wildcard_fallback() {
    let cc = DefaultMapping::new()
        .with_wildcard("gcc".to_string())
        .with("linux/amd64", "clang".to_string());
    let text = default_fn("DefaultCC", &cc);
    assert_eq!(call(&text, "DefaultCC", &["linux", "amd64"]), "clang");
    assert_eq!(call(&text, "DefaultCC", &["darwin", "arm64"]), "gcc");
}

#[test]
fn every_key_resolves_to_its_value() {
    let mapping: DefaultMapping<String> = [
        ("", "cc"),
        ("aix/ppc64", "xlc"),
        ("android/arm64", "aarch64-linux-android-clang"),
        ("darwin/amd64", "clang"),
        ("freebsd/386", "cc -m32"),
        ("windows/amd64", r"C:\mingw\bin\gcc.exe"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect();
    let text = default_fn("f", &mapping);
    for (key, value) in mapping.iter().filter(|(k, _)| !k.is_empty()) {
        let dims: Vec<&str> = key.split('/').collect();
        assert_eq!(&call(&text, "f", &dims), value, "key {key}");
    }
    assert_eq!(call(&text, "f", &["plan9", "arm"]), "cc");
}

#[test]
fn toolchain_dispatch_uses_three_dimensions() {
    let ld = DefaultMapping::new()
        .with_wildcard("ld".to_string())
        .with("linux/amd64/gccgo", "gold".to_string())
        .with("linux/amd64/gc", "lld".to_string());
    let text = toolchain_fn("DefaultToolchainLd", &ld);
    assert_eq!(call(&text, "DefaultToolchainLd", &["linux", "amd64", "gc"]), "lld");
    assert_eq!(call(&text, "DefaultToolchainLd", &["linux", "amd64", "gccgo"]), "gold");
    assert_eq!(call(&text, "DefaultToolchainLd", &["linux", "arm64", "gc"]), "ld");
}

#[test]
fn empty_mapping_always_returns_wildcard() {
    let m = DefaultMapping::new().with_wildcard(String::new());
    let text = default_fn("DefaultCXX", &m);
    for args in [["linux", "amd64"], ["windows", "386"], ["", ""]] {
        assert_eq!(call(&text, "DefaultCXX", &args), "");
    }
}

#[test]
fn whole_units_are_byte_identical_across_renders() {
    let tools = ToolDefaults {
        pkg_config: "pkg-config".into(),
        cc: (0..40)
            .map(|i| (format!("os{i}/arch{}", i % 7), format!("cc{i}")))
            .chain(std::iter::once((String::new(), "gcc".to_string())))
            .collect(),
        cxx: DefaultMapping::new(),
        ld: (0..10)
            .map(|i| (format!("os{i}/arch/tc{}", i % 3), format!("ld{i}")))
            .collect(),
        asm: DefaultMapping::new().with_wildcard("as".to_string()),
    };
    let support: DefaultMapping<bool> = (0..30).map(|i| (format!("os{i}/arch"), i % 2 == 0)).collect();
    let inputs = RenderInputs::new(&tools, &support).with_env_value(Some("1"));

    for target in Target::all() {
        assert_eq!(render(*target, &inputs), render(*target, &inputs), "{target}");
    }
}

#[test]
fn library_and_command_units_agree() {
    let tools = ToolDefaults {
        pkg_config: "pkgconf".into(),
        cc: DefaultMapping::new()
            .with_wildcard("gcc".to_string())
            .with("openbsd/amd64", "clang".to_string()),
        cxx: DefaultMapping::new()
            .with_wildcard("g++".to_string())
            .with("openbsd/amd64", "clang++".to_string()),
        ld: DefaultMapping::new().with("linux/riscv64/gc", "ld.bfd".to_string()),
        asm: DefaultMapping::new().with("linux/riscv64/gc", "as".to_string()),
    };
    let support = DefaultMapping::new();
    let inputs = RenderInputs::new(&tools, &support);
    let library = render(Target::ToolDefaults, &inputs);
    let command = render(Target::CommandToolDefaults, &inputs);

    for args in [["openbsd", "amd64"], ["linux", "arm"]] {
        assert_eq!(call(&library, "DefaultCC", &args), call(&command, "defaultCC", &args));
        assert_eq!(call(&library, "DefaultCXX", &args), call(&command, "defaultCXX", &args));
    }
    let tc = ["linux", "riscv64", "gc"];
    assert_eq!(call(&library, "DefaultToolchainLd", &tc), "ld.bfd");
    assert_eq!(call(&command, "defaultToolchainLd", &tc), "ld.bfd");
    assert_eq!(call(&command, "defaultToolchainAsm", &tc), "as");
    assert_eq!(call(&library, "DefaultLn", &["openbsd", "amd64"]), "");
    assert_eq!(call(&command, "defaultLd", &["openbsd", "amd64"]), "clang");
}

#[test]
fn support_matrices_from_shared_mapping() {
    let support: DefaultMapping<bool> = [("linux/amd64", true), ("windows/386", false)]
        .into_iter()
        .collect();
    let layout = SupportLayout::default();

    let full = render_full(&support, &layout, DEFAULT_GENERATOR);
    assert_eq!(
        map_entries(&full, "OSArchSupportsCgo"),
        vec![("linux/amd64".to_string(), true), ("windows/386".to_string(), false)]
    );

    let reduced = render_reduced(&support, Some("1"), &layout, DEFAULT_GENERATOR);
    assert_eq!(
        map_entries(&reduced, "cgoEnabled"),
        vec![("linux/amd64".to_string(), true)]
    );
}

#[test]
fn reduced_matrix_is_filter_of_full_matrix() {
    let support: DefaultMapping<bool> = (0..50)
        .map(|i| (format!("os{:02}/arch{}", (i * 37) % 50, i % 4), i % 3 != 0))
        .collect();
    let layout = SupportLayout::default();
    let full = map_entries(&render_full(&support, &layout, DEFAULT_GENERATOR), &layout.full_var);
    let reduced = map_entries(
        &render_reduced(&support, None, &layout, DEFAULT_GENERATOR),
        &layout.reduced_var,
    );

    let expected: Vec<(String, bool)> = full.iter().filter(|(_, v)| *v).cloned().collect();
    assert_eq!(reduced, expected);
    assert!(full.windows(2).all(|w| w[0].0 < w[1].0));
}

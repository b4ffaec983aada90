//! Assembly of complete generated files.
//!
//! A unit is one file: header, package clause, constants, then declarations.
//! [`render`] dispatches on the explicit [`Target`]; nothing here inspects the
//! destination path.

use platgen_core::{DefaultMapping, KeyArity, Tool, ToolDefaults};

use crate::decision::render_decision_fn;
use crate::matrix::{render_full, render_reduced, SupportLayout};
use crate::source::{SourceFile, DEFAULT_GENERATOR};
use crate::target::Target;

/// Everything a render needs. The mappings are borrowed and read-only.
#[derive(Debug, Clone)]
pub struct RenderInputs<'a> {
    pub tools: &'a ToolDefaults,
    pub support: &'a DefaultMapping<bool>,
    pub layout: SupportLayout,
    /// Environment value captured by the caller for the reduced matrix.
    pub env_value: Option<&'a str>,
    /// Name written into the do-not-edit header.
    pub generator: &'a str,
}

impl<'a> RenderInputs<'a> {
    /// Inputs with the default layout and generator name.
    pub fn new(tools: &'a ToolDefaults, support: &'a DefaultMapping<bool>) -> Self {
        Self {
            tools,
            support,
            layout: SupportLayout::default(),
            env_value: None,
            generator: DEFAULT_GENERATOR,
        }
    }

    pub fn with_env_value(mut self, value: Option<&'a str>) -> Self {
        self.env_value = value;
        self
    }

    pub fn with_layout(mut self, layout: SupportLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_generator(mut self, generator: &'a str) -> Self {
        self.generator = generator;
        self
    }
}

/// One generated lookup function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolFn {
    pub name: &'static str,
    pub arity: KeyArity,
    pub tool: Tool,
}

const fn tool_fn(name: &'static str, arity: KeyArity, tool: Tool) -> ToolFn {
    ToolFn { name, arity, tool }
}

const LIBRARY_FNS: &[ToolFn] = &[
    tool_fn("DefaultCC", KeyArity::Platform, Tool::Cc),
    tool_fn("DefaultLn", KeyArity::Platform, Tool::Ld),
    tool_fn("DefaultCXX", KeyArity::Platform, Tool::Cxx),
    tool_fn("DefaultToolchainLd", KeyArity::Toolchain, Tool::Ld),
    tool_fn("DefaultToolchainAsm", KeyArity::Toolchain, Tool::Asm),
    tool_fn("DefaultToolchainCC", KeyArity::Toolchain, Tool::Cc),
    tool_fn("DefaultToolchainCXX", KeyArity::Toolchain, Tool::Cxx),
];

// `defaultLd` reads the C compiler table, not the linker table.
const COMMAND_FNS: &[ToolFn] = &[
    tool_fn("defaultCC", KeyArity::Platform, Tool::Cc),
    tool_fn("defaultLd", KeyArity::Platform, Tool::Cc),
    tool_fn("defaultCXX", KeyArity::Platform, Tool::Cxx),
    tool_fn("defaultToolchainLd", KeyArity::Toolchain, Tool::Ld),
    tool_fn("defaultToolchainAsm", KeyArity::Toolchain, Tool::Asm),
    tool_fn("defaultToolchainCC", KeyArity::Toolchain, Tool::Cc),
    tool_fn("defaultToolchainCXX", KeyArity::Toolchain, Tool::Cxx),
];

/// Declared names for a tool-defaults target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDeclarations {
    pub package: &'static str,
    pub pkg_config_const: &'static str,
    pub functions: &'static [ToolFn],
}

/// Declarations for `target`, or `None` for the support matrices.
pub fn tool_declarations(target: Target) -> Option<ToolDeclarations> {
    match target {
        Target::ToolDefaults => Some(ToolDeclarations {
            package: "cfg",
            pkg_config_const: "DefaultPkgConfig",
            functions: LIBRARY_FNS,
        }),
        Target::CommandToolDefaults => Some(ToolDeclarations {
            package: "main",
            pkg_config_const: "defaultPkgConfig",
            functions: COMMAND_FNS,
        }),
        Target::FullSupport | Target::ReducedSupport => None,
    }
}

fn render_tool_defaults(decls: &ToolDeclarations, inputs: &RenderInputs<'_>) -> String {
    let mut file = SourceFile::new(decls.package).with_generator(inputs.generator);
    file.raw_const(decls.pkg_config_const, &inputs.tools.pkg_config);
    for f in decls.functions {
        file.push(&render_decision_fn(
            f.name,
            f.arity,
            inputs.tools.mapping(f.tool),
        ));
    }
    file.finish()
}

/// Render the complete file for `target`.
pub fn render(target: Target, inputs: &RenderInputs<'_>) -> String {
    let text = match tool_declarations(target) {
        Some(decls) => render_tool_defaults(&decls, inputs),
        None if target == Target::FullSupport => {
            render_full(inputs.support, &inputs.layout, inputs.generator)
        }
        None => render_reduced(
            inputs.support,
            inputs.env_value,
            &inputs.layout,
            inputs.generator,
        ),
    };
    tracing::debug!(%target, bytes = text.len(), "rendered unit");
    text
}

//! Generated-file framing: header comment, package clause, and constants.

use crate::quote::{quote, raw};

/// Generator name written into the header when none is configured.
pub const DEFAULT_GENERATOR: &str = "go tool dist";

/// Accumulates the body of one generated file.
///
/// [`SourceFile::finish`] prefixes the body with the do-not-edit header and the
/// package clause, each followed by a blank line.
#[derive(Debug, Clone)]
pub struct SourceFile {
    generator: String,
    package: String,
    body: String,
}

impl SourceFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            generator: DEFAULT_GENERATOR.to_string(),
            package: package.into(),
            body: String::new(),
        }
    }

    /// Override the generator named in the header.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// `const name = `value``
    pub fn raw_const(&mut self, name: &str, value: &str) -> &mut Self {
        self.body
            .push_str(&format!("const {name} = {}\n", raw(value)));
        self
    }

    /// `const name = "value"`
    pub fn string_const(&mut self, name: &str, value: &str) -> &mut Self {
        self.body
            .push_str(&format!("const {name} = {}\n", quote(value)));
        self
    }

    pub fn blank_line(&mut self) -> &mut Self {
        self.body.push('\n');
        self
    }

    /// Append an already rendered declaration.
    pub fn push(&mut self, chunk: &str) -> &mut Self {
        self.body.push_str(chunk);
        self
    }

    /// The complete file text.
    pub fn finish(self) -> String {
        format!(
            "{}\n\npackage {}\n\n{}",
            header_line(&self.generator),
            self.package,
            self.body
        )
    }
}

/// The do-not-edit marker line for `generator`.
pub fn header_line(generator: &str) -> String {
    format!("// Code generated by {generator}; DO NOT EDIT.")
}

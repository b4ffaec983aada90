//! Deterministic rendering of platform decision functions and support tables.
//!
//! Every renderer is a pure function of borrowed, immutable inputs. Keys are
//! always walked in sorted order, so rendering the same mapping twice yields
//! byte-identical text. Writing is delegated to an [`Emitter`].

pub mod decision;
pub mod emitter;
pub mod error;
pub mod matrix;
pub mod quote;
pub mod source;
pub mod target;
pub mod unit;

pub use decision::{default_fn, render_decision_fn, toolchain_fn};
pub use emitter::{generate, EmitOutcome, EmitReport, Emitter, MemoryEmitter, Output, WritePolicy};
pub use error::EmitError;
pub use matrix::{render_full, render_reduced, SupportLayout};
pub use source::{SourceFile, DEFAULT_GENERATOR};
pub use target::Target;
pub use unit::{render, RenderInputs};

//! Lingo - translation bundle compiler
//!
//! Lingo is a CLI tool and library that compiles a directory of per-locale
//! translation source files (JSON or YAML) into one JavaScript module per
//! locale. Each locale is deep-merged over the default locale so untranslated
//! keys fall back to the default message, missing key paths are reported as
//! warnings, and an incremental fingerprint cache skips rebuilds when no
//! source file changed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `compiler`: Core build pipeline (gather, audit, merge, emit)
//! - `error`: Error types for the pipeline
//! - `reporter`: Diagnostic and summary printing

pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod reporter;

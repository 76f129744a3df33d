//! clfmt core library.
//!
//! This crate exposes programmatic APIs for batch-formatting a C++ source
//! tree by driving an external clang-format binary across a worker pool.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution, plus the
//!   advisory style-config probe.
//! - `locate`: Recursive source file discovery under the configured roots.
//! - `format`: Availability probe, per-file worker, parallel dispatcher.
//! - `output`: Human/JSON printers and the run summary.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod format;
pub mod locate;
pub mod output;
pub mod utils;

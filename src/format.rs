//! Formatter invocation: availability probe, per-file worker, and the
//! parallel dispatcher.
//!
//! The worker never lets an error escape its boundary. Every invocation is
//! classified into exactly one `Outcome`, so a single broken file cannot
//! abort the batch; the reporter decides what the run as a whole means.

use pathdiff::diff_paths;
use rayon::prelude::*;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Classified result of one formatter invocation.
pub enum Outcome {
    Success,
    /// The binary ran and reported an error (non-zero exit).
    FormatError(String),
    /// The binary vanished between the availability probe and this task.
    BinaryMissing,
    /// Spawn failed for a reason other than a missing binary.
    UnexpectedError(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Error text for failed outcomes; empty for success.
    pub fn message(&self, binary: &str) -> String {
        match self {
            Outcome::Success => String::new(),
            Outcome::FormatError(msg) => msg.clone(),
            Outcome::BinaryMissing => format!("{} not found in PATH", binary),
            Outcome::UnexpectedError(msg) => msg.clone(),
        }
    }
}

#[derive(Debug, Clone)]
/// Per-file outcome with a display path relative to the repository root.
pub struct FormatOutcome {
    pub file: String,
    pub outcome: Outcome,
}

/// Probe that the formatter binary is invocable.
///
/// Returns the first line of `<binary> --version` output on success. Any
/// failure here is fatal upstream: no file is touched when the binary is
/// unavailable.
pub fn probe_binary(binary: &str) -> Result<String, String> {
    match Command::new(binary).arg("--version").output() {
        Ok(out) if out.status.success() => {
            let banner = String::from_utf8_lossy(&out.stdout);
            Ok(banner.lines().next().unwrap_or("").trim().to_string())
        }
        Ok(out) => Err(format!(
            "'{} --version' exited with status {}",
            binary,
            out.status.code().map_or_else(
                || "unknown".to_string(),
                |c| c.to_string()
            )
        )),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(format!("{} not found in PATH", binary))
        }
        Err(e) => Err(format!("failed to invoke {}: {}", binary, e)),
    }
}

/// Format (or, in check mode, dry-run) a single file and classify the result.
pub fn format_file(binary: &str, style: &str, check: bool, path: &Path) -> Outcome {
    let mut cmd = Command::new(binary);
    cmd.arg(format!("--style={}", style));
    if check {
        cmd.arg("--dry-run").arg("-Werror");
    } else {
        cmd.arg("-i");
    }
    cmd.arg(path);

    match cmd.output() {
        Ok(out) if out.status.success() => Outcome::Success,
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            let msg = if !stderr.is_empty() {
                format!("Error: {}", stderr)
            } else {
                match out.status.code() {
                    Some(code) => format!("Return code: {}", code),
                    None => "terminated by signal".to_string(),
                }
            };
            Outcome::FormatError(msg)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Outcome::BinaryMissing,
        Err(e) => Outcome::UnexpectedError(e.to_string()),
    }
}

/// Run the formatter over `files` on a worker pool.
///
/// Pool size is `jobs` when given, otherwise rayon's default (logical CPU
/// count). Outcomes correspond to `files` index-for-index regardless of the
/// real completion order; tasks share no mutable state, each external
/// invocation mutates only its own target file.
pub fn run_format(
    files: &[PathBuf],
    repo_root: &Path,
    binary: &str,
    style: &str,
    check: bool,
    jobs: Option<usize>,
) -> Vec<FormatOutcome> {
    let map = || {
        files
            .par_iter()
            .map(|path| FormatOutcome {
                file: display_path(path, repo_root),
                outcome: format_file(binary, style, check, path),
            })
            .collect::<Vec<_>>()
    };

    // num_threads(0) lets rayon size the pool to the logical CPU count
    match rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()
    {
        Ok(pool) => pool.install(map),
        Err(_) => map(),
    }
}

/// Effective worker count for display: an explicit `jobs` wins, otherwise
/// the logical CPU count rayon would use.
pub fn worker_count(jobs: Option<usize>) -> usize {
    match jobs {
        Some(n) if n > 0 => n,
        _ => std::thread::available_parallelism().map_or(1, |n| n.get()),
    }
}

fn display_path(path: &Path, repo_root: &Path) -> String {
    diff_paths(path, repo_root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

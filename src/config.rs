//! Configuration discovery and effective settings resolution.
//!
//! clfmt reads `clfmt.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `roots`: `include`, `src`
//! - `extensions`: `hpp`, `cpp`
//! - `binary`: `clang-format`
//! - `style`: `file`
//! - `output`: `human`
//! - `format.check`: false
//! - `format.jobs`: logical CPU count
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOTS: [&str; 2] = ["include", "src"];
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["hpp", "cpp"];
pub const DEFAULT_BINARY: &str = "clang-format";
pub const DEFAULT_STYLE: &str = "file";

#[derive(Debug, Default, Deserialize, Clone)]
/// Formatting-related configuration section under `[format]`.
pub struct FormatCfg {
    pub check: Option<bool>,
    pub jobs: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `clfmt.toml|yaml`.
pub struct ClfmtConfig {
    pub roots: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub binary: Option<String>,
    pub style: Option<String>,
    pub output: Option<String>,
    pub format: Option<FormatCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub roots: Vec<String>,
    pub extensions: Vec<String>,
    pub binary: String,
    pub style: String,
    pub output: String,
    pub check: bool,
    pub jobs: Option<usize>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `clfmt.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("clfmt.toml").exists()
            || cur.join("clfmt.yaml").exists()
            || cur.join("clfmt.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ClfmtConfig` from `clfmt.toml` or `clfmt.yaml|yml` if present.
///
/// `Ok(None)` means no config file exists; a present but unreadable or
/// invalid file is an `Err` so misconfiguration is never silently ignored.
pub fn load_config(root: &Path) -> Result<Option<ClfmtConfig>, String> {
    let toml_path = root.join("clfmt.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path)
            .map_err(|e| format!("cannot read {}: {}", toml_path.to_string_lossy(), e))?;
        let cfg: ClfmtConfig = toml::from_str(&s)
            .map_err(|e| format!("{} is not valid TOML: {}", toml_path.to_string_lossy(), e))?;
        return Ok(Some(cfg));
    }
    for yml in ["clfmt.yaml", "clfmt.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p)
                .map_err(|e| format!("cannot read {}: {}", p.to_string_lossy(), e))?;
            let cfg: ClfmtConfig = serde_yaml::from_str(&s)
                .map_err(|e| format!("{} is not valid YAML: {}", p.to_string_lossy(), e))?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
#[allow(clippy::too_many_arguments)]
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_roots: &[String],
    cli_extensions: &[String],
    cli_binary: Option<&str>,
    cli_style: Option<&str>,
    cli_output: Option<&str>,
    cli_check: Option<bool>,
    cli_jobs: Option<usize>,
) -> Result<Effective, String> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root)?.unwrap_or_default();

    let roots = if !cli_roots.is_empty() {
        cli_roots.to_vec()
    } else {
        cfg.roots
            .unwrap_or_else(|| DEFAULT_ROOTS.iter().map(|s| s.to_string()).collect())
    };

    let extensions = if !cli_extensions.is_empty() {
        cli_extensions.to_vec()
    } else {
        cfg.extensions
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect())
    };

    let binary = cli_binary
        .map(|s| s.to_string())
        .or(cfg.binary)
        .unwrap_or_else(|| DEFAULT_BINARY.to_string());

    let style = cli_style
        .map(|s| s.to_string())
        .or(cfg.style)
        .unwrap_or_else(|| DEFAULT_STYLE.to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let check = cli_check
        .or_else(|| cfg.format.as_ref().and_then(|f| f.check))
        .unwrap_or(false);

    let jobs = cli_jobs.or_else(|| cfg.format.as_ref().and_then(|f| f.jobs));

    Ok(Effective {
        repo_root,
        roots,
        extensions,
        binary,
        style,
        output,
        check,
        jobs,
    })
}

/// Walk upward from `start` (inclusive) looking for a clang-format style
/// config file. Purely advisory: the caller prints where it was found, or
/// a note that the formatter's default style will apply.
pub fn find_style_config(start: &Path) -> Option<PathBuf> {
    let mut cur = Some(start);
    while let Some(dir) = cur {
        for name in [".clang-format", "_clang-format"] {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        cur = dir.parent();
    }
    None
}

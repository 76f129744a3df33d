//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "clfmt",
    version,
    about = "Parallel clang-format batch driver",
    long_about = "clfmt — a tiny, fast CLI to run clang-format in place across a C++ source tree.\n\nConfiguration precedence: CLI > clfmt.toml > defaults.",
    after_help = "Examples:\n  clfmt\n  clfmt --check\n  clfmt --root lib --root tools --ext h --ext cc\n  clfmt --output json --jobs 4"
)]
/// Top-level CLI options. A bare invocation formats `include/` and `src/`
/// in place using the nearest `.clang-format`.
pub struct Cli {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Dry run: exit non-zero if any file would be reformatted")]
    pub check: bool,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Formatter binary to invoke (default: clang-format)")]
    pub binary: Option<String>,
    #[arg(long, help = "Style source passed as --style=<s> (default: file)")]
    pub style: Option<String>,
    #[arg(long, help = "Worker pool size (default: logical CPU count)")]
    pub jobs: Option<usize>,
    #[arg(long = "root", help = "Directory to scan; repeatable (default: include, src)")]
    pub roots: Vec<String>,
    #[arg(long = "ext", help = "File extension to match; repeatable (default: hpp, cpp)")]
    pub exts: Vec<String>,
}

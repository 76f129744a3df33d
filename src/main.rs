//! clfmt CLI binary entry point.
//! Probes the formatter, locates sources, runs the batch, prints results.

mod cli;
mod config;
mod format;
mod locate;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let eff = match config::resolve_effective(
        cli.repo_root.as_deref(),
        &cli.roots,
        &cli.exts,
        cli.binary.as_deref(),
        cli.style.as_deref(),
        cli.output.as_deref(),
        if cli.check { Some(true) } else { None },
        cli.jobs,
    ) {
        Ok(eff) => eff,
        Err(msg) => {
            eprintln!("{} {}", utils::error_prefix(), msg);
            std::process::exit(2);
        }
    };
    let human = eff.output != "json";

    // Hard precondition gate: the formatter must be invocable before any
    // file is touched.
    match format::probe_binary(&eff.binary) {
        Ok(banner) => {
            if human && !banner.is_empty() {
                eprintln!("{} {}", utils::info_prefix(), banner);
            }
        }
        Err(msg) => {
            eprintln!("{} {}", utils::error_prefix(), msg);
            eprintln!(
                "{} {}",
                utils::note_prefix(),
                format!("Install {} or ensure it is in your PATH.", eff.binary)
            );
            std::process::exit(1);
        }
    }

    // Style config discovery is advisory only; it never changes behavior.
    match config::find_style_config(&eff.repo_root) {
        Some(path) => {
            if human {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("Found style config at: {}", path.to_string_lossy())
                );
            }
        }
        None => {
            if human {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    format!(
                        "No .clang-format found; {} will use its default style.",
                        eff.binary
                    )
                );
            }
        }
    }

    let (files, warnings) = locate::find_sources(&eff.repo_root, &eff.roots, &eff.extensions);
    for w in &warnings {
        eprintln!("{} {}", utils::warn_prefix(), w);
    }

    if files.is_empty() {
        if human {
            println!(
                "Nothing to do: no matching source files under [{}].",
                eff.roots.join(", ")
            );
        } else {
            output::print_run(&[], &eff.output, eff.check, &eff.binary);
        }
        return;
    }

    if human {
        eprintln!(
            "{} {}",
            utils::info_prefix(),
            format!(
                "Formatting {} files on {} worker threads",
                files.len(),
                format::worker_count(eff.jobs)
            )
        );
    }

    let outcomes = format::run_format(
        &files,
        &eff.repo_root,
        &eff.binary,
        &eff.style,
        eff.check,
        eff.jobs,
    );
    output::print_run(&outcomes, &eff.output, eff.check, &eff.binary);
    if outcomes.iter().any(|o| !o.outcome.is_success()) {
        std::process::exit(1);
    }
}

//! Output rendering for the formatting run.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file fields and a top-level summary.

use crate::format::FormatOutcome;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

#[derive(Debug, PartialEq, Eq)]
/// Aggregated counts over a run's outcomes.
pub struct RunSummary {
    pub formatted: usize,
    pub failed: usize,
    pub total: usize,
}

/// Partition outcomes into the counts the summary line and exit status use.
pub fn summarize(outcomes: &[FormatOutcome]) -> RunSummary {
    let formatted = outcomes.iter().filter(|o| o.outcome.is_success()).count();
    RunSummary {
        formatted,
        failed: outcomes.len() - formatted,
        total: outcomes.len(),
    }
}

/// Print per-file status lines and the summary in the requested format.
pub fn print_run(outcomes: &[FormatOutcome], output: &str, check: bool, binary: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_run_json(outcomes, check, binary)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let ok_label = if check { "clean:" } else { "formatted:" };
            for o in outcomes {
                if o.outcome.is_success() {
                    if color {
                        println!("{} {}", format!("✔ {}", ok_label).green(), o.file);
                    } else {
                        println!("✔ {} {}", ok_label, o.file);
                    }
                } else {
                    let msg = o.outcome.message(binary);
                    if color {
                        println!(
                            "{} {} — {}",
                            "✖ failed:".red().bold(),
                            o.file.clone().bold(),
                            msg
                        );
                    } else {
                        println!("✖ failed: {} — {}", o.file, msg);
                    }
                }
            }
            let s = summarize(outcomes);
            let summary = format!(
                "— Summary — formatted={} failed={} total={}",
                s.formatted, s.failed, s.total
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose the run JSON object (pure) for testing/snapshot purposes.
pub fn compose_run_json(outcomes: &[FormatOutcome], check: bool, binary: &str) -> JsonVal {
    let items: Vec<_> = outcomes
        .iter()
        .map(|o| {
            json!({
                "file": o.file,
                "ok": o.outcome.is_success(),
                "error": if o.outcome.is_success() { JsonVal::Null } else { json!(o.outcome.message(binary)) },
            })
        })
        .collect();
    let s = summarize(outcomes);
    json!({
        "results": items,
        "summary": {
            "formatted": s.formatted,
            "failed": s.failed,
            "total": s.total,
            "check": check,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Outcome;

    fn outcome(file: &str, outcome: Outcome) -> FormatOutcome {
        FormatOutcome {
            file: file.into(),
            outcome,
        }
    }

    #[test]
    fn test_summarize_partitions_outcomes() {
        let outcomes = vec![
            outcome("include/a.hpp", Outcome::Success),
            outcome("src/b.cpp", Outcome::Success),
            outcome("src/c.cpp", Outcome::FormatError("Error: syntax error".into())),
        ];
        assert_eq!(
            summarize(&outcomes),
            RunSummary {
                formatted: 2,
                failed: 1,
                total: 3
            }
        );
    }

    #[test]
    fn test_compose_run_json_shape() {
        let outcomes = vec![
            outcome("include/a.hpp", Outcome::Success),
            outcome("src/c.cpp", Outcome::FormatError("Error: syntax error".into())),
        ];
        let out = compose_run_json(&outcomes, false, "clang-format");
        assert_eq!(out["summary"]["formatted"], 1);
        assert_eq!(out["summary"]["failed"], 1);
        assert_eq!(out["summary"]["total"], 2);
        assert_eq!(out["summary"]["check"], false);
        assert_eq!(out["results"][0]["ok"], true);
        assert!(out["results"][0]["error"].is_null());
        assert_eq!(out["results"][1]["file"], "src/c.cpp");
        assert_eq!(out["results"][1]["error"], "Error: syntax error");
    }

    #[test]
    fn test_compose_run_json_binary_missing_message() {
        let outcomes = vec![outcome("src/a.cpp", Outcome::BinaryMissing)];
        let out = compose_run_json(&outcomes, true, "clang-format-17");
        assert_eq!(out["summary"]["check"], true);
        assert_eq!(out["results"][0]["error"], "clang-format-17 not found in PATH");
    }

    #[test]
    fn test_empty_run_summarizes_to_zero() {
        let out = compose_run_json(&[], false, "clang-format");
        assert_eq!(out["summary"]["total"], 0);
        assert_eq!(out["results"].as_array().unwrap().len(), 0);
    }
}

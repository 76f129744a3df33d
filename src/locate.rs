//! Source file discovery under the configured root directories.

use glob::glob;
use std::path::{Path, PathBuf};

/// Recursively collect files matching `extensions` under each of `roots`.
///
/// A missing root is skipped with a warning string rather than failing the
/// run. The result is sorted lexicographically and deduplicated, so outcome
/// lists downstream have a stable, reproducible order. An empty result is
/// valid; the caller decides what to print.
pub fn find_sources(
    repo_root: &Path,
    roots: &[String],
    extensions: &[String],
) -> (Vec<PathBuf>, Vec<String>) {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for dir in roots {
        let base = repo_root.join(dir);
        if !base.is_dir() {
            warnings.push(format!("Directory '{}' does not exist, skipping", dir));
            continue;
        }
        for ext in extensions {
            let pattern = base.join(format!("**/*.{}", ext));
            match glob(&pattern.to_string_lossy()) {
                Ok(paths) => {
                    for entry in paths.flatten() {
                        if entry.is_file() {
                            files.push(entry);
                        }
                    }
                }
                Err(_) => {
                    warnings.push(format!("Invalid glob pattern for extension '{}'", ext));
                }
            }
        }
    }

    files.sort();
    files.dedup();
    (files, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "int x;\n").unwrap();
    }

    fn roots(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_finds_nested_files_sorted() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("src/z.cpp"));
        touch(&root.join("src/nested/deeper/a.cpp"));
        touch(&root.join("include/util/b.hpp"));
        // Non-matching extensions are ignored
        touch(&root.join("src/notes.txt"));
        touch(&root.join("include/legacy.h"));

        let (files, warnings) =
            find_sources(root, &roots(&["include", "src"]), &roots(&["hpp", "cpp"]));
        assert!(warnings.is_empty());
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            rel,
            vec!["include/util/b.hpp", "src/nested/deeper/a.cpp", "src/z.cpp"]
        );
    }

    #[test]
    fn test_missing_root_warns_and_continues() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("src/a.cpp"));

        let (files, warnings) =
            find_sources(root, &roots(&["include", "src"]), &roots(&["hpp", "cpp"]));
        assert_eq!(files.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("include"));
    }

    #[test]
    fn test_all_roots_missing_yields_empty_list() {
        let dir = tempdir().unwrap();

        let (files, warnings) = find_sources(
            dir.path(),
            &roots(&["include", "src"]),
            &roots(&["hpp", "cpp"]),
        );
        assert!(files.is_empty());
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_top_level_files_match_recursive_pattern() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("include/a.hpp"));

        let (files, _) = find_sources(root, &roots(&["include"]), &roots(&["hpp"]));
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("include/a.hpp"));
    }
}

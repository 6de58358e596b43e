//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to existing files, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")))
            .context("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();
    log::info!("Resolved {} input file(s)", files.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_glob_and_dedup() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("b.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let pattern = format!("{}/*.json", dir.path().display());
        let exact = dir.path().join("a.json").display().to_string();
        let files = resolve_patterns(&[pattern, exact]).unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("a.json"), dir.path().join("b.json")]
        );
    }

    #[test]
    fn test_no_match() {
        let error = resolve_patterns(&["/nonexistent/*.json".to_string()]).unwrap_err();
        assert!(error.to_string().contains("No files found"));
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let error = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}

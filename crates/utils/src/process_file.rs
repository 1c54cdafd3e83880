use std::path::Path;

use anyhow::{Context, Result};
use sdkversions_core::{ConcretePattern, FileReport, Mode, PatternMatch, process_content};
use tokio::fs::{read_to_string, write};

/// Update or validate one file against all of its patterns.
///
/// Update mode always writes the content back, changed or not. Validate mode never
/// writes and reports every pattern that found no exact match.
///
/// # Errors
/// Returns error if the file cannot be read or written, or a pattern fails to compile.
pub async fn process_file(
    path: &Path,
    patterns: &[ConcretePattern],
    mode: Mode,
) -> Result<FileReport> {
    let content = read_to_string(path)
        .await
        .context(format!("Failed to read file - {}", path.display()))?;

    let outcome = process_content(&content, patterns, mode)?;
    let matches = outcome
        .matched
        .iter()
        .map(|(line, pattern)| PatternMatch {
            line: *line,
            pattern: (*pattern).clone(),
        })
        .collect::<Vec<_>>();

    let unmatched = match mode {
        Mode::Update => {
            write(path, &outcome.content)
                .await
                .context(format!("Failed to write file - {}", path.display()))?;
            Vec::new()
        }
        Mode::Validate => outcome
            .unmatched(patterns)
            .into_iter()
            .cloned()
            .collect(),
    };

    Ok(FileReport::new(path.to_path_buf(), mode, matches, unmatched))
}

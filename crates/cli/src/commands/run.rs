use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sdkversions_core::{ConcretePattern, FileReport, Mode, PatternMatch, RunReport};
use sdkversions_utils::{log_debug, process_file, split_list};

use crate::{
    catalog::get_catalog,
    context::CommandContext,
    error::RunError,
    options::FormatOptions,
    resolve::{parse_dependencies, resolve_dependency_patterns, resolve_own_version_patterns},
};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Version to update or validate for the extension. Example: 3.0.2
    #[arg(short, long)]
    pub version: String,

    /// Comma-separated `path[:pattern_type]` list, absolute or relative to the repository root
    #[arg(short, long)]
    pub paths: String,

    /// Comma-separated `name version[@path1;path2]` list. Example: "AEPCore 3.1.1, AEPEdge 3.2.1"
    #[arg(short, long)]
    pub dependencies: Option<String>,

    /// Update the versions instead of validating them
    #[arg(short, long, default_value = "false")]
    pub update: bool,

    /// Extension name, required by name-based templates. Example: "AEPCore"
    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

impl RunArgs {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        Mode::from_update_flag(self.update)
    }
}

/// `Updating version to X` / `Validating version is X`
#[must_use]
pub fn format_run_header(mode: Mode, version: &str) -> String {
    let preposition = if mode.is_update() { "to" } else { "is" };
    format!("{} version {preposition} {version}", mode.verb())
}

#[must_use]
pub fn format_file_header(report: &FileReport) -> String {
    format!(
        "---- {} versions in '{}' ----",
        report.mode().verb(),
        report.file_name()
    )
}

#[must_use]
pub fn format_match(file_name: &str, mode: Mode, pattern_match: &PatternMatch) -> String {
    let pattern = &pattern_match.pattern;
    match mode {
        Mode::Update => format!(
            "{} '{}' to '{}' in '{file_name}' - pattern: `{}`",
            "Updated".cyan(),
            pattern.description(),
            pattern.expected_version(),
            pattern.regex_source(),
        ),
        Mode::Validate => format!(
            "{} '{}' with pattern `{}` matches '{}' in '{file_name}'",
            "PASS".green().bold(),
            pattern.description(),
            pattern.regex_source(),
            pattern.expected_version(),
        ),
    }
}

#[must_use]
pub fn format_unmatched(file_name: &str, pattern: &ConcretePattern) -> String {
    format!(
        "{} '{}' with pattern `{}` and version {} with version pattern `{}` did not match any content in '{file_name}'",
        "FAIL".red().bold(),
        pattern.description(),
        pattern.anchor(),
        pattern.expected_version(),
        pattern.grammar(),
    )
}

fn print_file_report(report: &FileReport) {
    let file_name = report.file_name();
    println!("{}", format_file_header(report));
    println!("  * File path: {}", report.path().display());
    for pattern_match in report.matches() {
        println!("{}", format_match(&file_name, report.mode(), pattern_match));
    }
    for pattern in report.unmatched() {
        println!("{}", format_unmatched(&file_name, pattern));
    }
    println!();
}

/// Resolve every file's patterns, then update or validate the files in order.
///
/// # Errors
/// Returns error on a fatal resolution or I/O failure, or [`RunError::VersionMismatch`]
/// when validation fails.
pub async fn handle_run(args: &RunArgs, context: &CommandContext) -> Result<RunReport> {
    let mode = args.mode();
    let is_stdout = args.format.is_stdout();
    if is_stdout {
        println!("{}", format_run_header(mode, &args.version));
    }

    let root = context.repo_root_path();
    let paths = split_list(&args.paths, ',');
    let parsed = parse_dependencies(args.dependencies.as_deref().unwrap_or_default())?;
    // JSON mode keeps stdout a single document
    if is_stdout {
        parsed.log_skipped();
    }
    let catalog = get_catalog();

    let mut pattern_map = resolve_own_version_patterns(
        root,
        &paths,
        &args.version,
        args.name.as_deref(),
        &catalog,
    )
    .await?;
    pattern_map.merge(
        resolve_dependency_patterns(root, &paths, &parsed.dependencies, &catalog).await?,
    );

    if is_stdout {
        log_debug(
            "Resolved patterns",
            &format!(
                "{} pattern(s) across {} file(s)",
                pattern_map.pattern_count(),
                pattern_map.len()
            ),
        );
    }

    let mut report = RunReport::new(mode, args.version.clone());
    for (path, patterns) in pattern_map.iter() {
        let file_report = process_file(path, patterns, mode).await?;
        if is_stdout {
            print_file_report(&file_report);
        }
        report.push(file_report);
    }

    match args.format {
        FormatOptions::Stdout => {
            if !mode.is_update() && report.is_success() {
                println!("All versions are correct!");
            }
        }
        FormatOptions::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if report.is_success() {
        Ok(report)
    } else {
        Err(RunError::VersionMismatch.into())
    }
}

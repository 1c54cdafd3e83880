use anyhow::Result;
use clap::Parser;

use crate::{
    commands::{RunArgs, handle_run},
    context::CommandContext,
};
mod catalog;
pub mod commands;
pub mod context;
mod error;
pub mod options;
pub mod resolve;

pub use catalog::get_catalog;
pub use error::{RunError, error_message, error_title};

pub const DIVIDER_STRING: &str =
    "================================================================================";

#[derive(Parser, Debug)]
#[command(
    name = "sdkversions",
    author,
    about = "Update or validate version strings across an SDK repository",
    help_template = "{name}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help
            print!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let is_stdout = cli.run.format.is_stdout();
    if is_stdout {
        println!("{DIVIDER_STRING}");
    }
    let context = CommandContext::new()?;
    handle_run(&cli.run, &context).await?;
    if is_stdout {
        println!("{DIVIDER_STRING}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FormatOptions;

    #[test]
    fn test_divider_width() {
        assert_eq!(DIVIDER_STRING.len(), 80);
        assert!(DIVIDER_STRING.chars().all(|c| c == '='));
    }

    #[test]
    fn test_cli_parsing_validate() {
        let cli = Cli::parse_from([
            "sdkversions",
            "-v",
            "3.0.2",
            "-p",
            "AEPCore.podspec, Package.swift:swift_spm",
        ]);
        assert_eq!(cli.run.version, "3.0.2");
        assert_eq!(cli.run.paths, "AEPCore.podspec, Package.swift:swift_spm");
        assert!(!cli.run.update);
        assert!(cli.run.dependencies.is_none());
        assert!(cli.run.name.is_none());
        assert_eq!(cli.run.format, FormatOptions::Stdout);
    }

    #[test]
    fn test_cli_parsing_update_with_options() {
        let cli = Cli::parse_from([
            "sdkversions",
            "--version",
            "3.0.2",
            "--paths",
            "code/gradle.properties:properties_multi_module",
            "--dependencies",
            "AEPCore 3.1.1, AEPEdge 3.2.1@code/gradle.properties",
            "--update",
            "--name",
            "AEPCore",
            "--format",
            "json",
        ]);
        assert!(cli.run.update);
        assert_eq!(
            cli.run.dependencies.as_deref(),
            Some("AEPCore 3.1.1, AEPEdge 3.2.1@code/gradle.properties")
        );
        assert_eq!(cli.run.name.as_deref(), Some("AEPCore"));
        assert_eq!(cli.run.format, FormatOptions::Json);
    }

    #[test]
    fn test_cli_parsing_requires_version_and_paths() {
        assert!(Cli::try_parse_from(["sdkversions", "-p", "a.swift"]).is_err());
        assert!(Cli::try_parse_from(["sdkversions", "-v", "1.0.0"]).is_err());
    }

    #[tokio::test]
    async fn test_main_help_is_not_an_error() {
        let args = vec!["sdkversions".to_string(), "--help".to_string()];
        assert!(main(&args).await.is_ok());
    }

    #[tokio::test]
    async fn test_main_invalid_arguments() {
        let args = vec!["sdkversions".to_string(), "--bogus".to_string()];
        let err = main(&args).await.unwrap_err();
        assert_eq!(error_title(&err), "Invalid arguments");
    }
}

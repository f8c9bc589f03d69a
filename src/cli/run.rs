use std::path::PathBuf;
use std::{env, fs};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::{BuildArgs, CheckArgs, CommonArgs};
use crate::compiler::{BuildOptions, BuildOutcome, TranslationCompiler};
use crate::config;
use crate::reporter;

pub fn run_build(args: BuildArgs) -> Result<u8> {
    let options = build_options(&args.common)?;

    let mut compiler = TranslationCompiler::new(options);
    match compiler.build()? {
        BuildOutcome::NotConfigured => {
            // Explicit configuration gate, not an error: with no default
            // locale the whole preprocessing step is a no-op.
            if args.common.verbose {
                println!("No default locale configured; nothing to build.");
            }
            Ok(0)
        }
        BuildOutcome::Unchanged => {
            reporter::print_unchanged(args.common.verbose);
            Ok(0)
        }
        BuildOutcome::MissingDefaultLocale { warnings } => {
            reporter::print_warnings(&warnings);
            Ok(0)
        }
        BuildOutcome::Built(report) => {
            reporter::print_warnings(&report.warnings);
            reporter::print_build_summary(&report, args.common.verbose);
            Ok(0)
        }
    }
}

pub fn run_check(args: CheckArgs) -> Result<u8> {
    let options = build_options(&args.common)?;
    let compiler = TranslationCompiler::new(options);

    match compiler.check()? {
        BuildOutcome::NotConfigured => {
            println!(
                "{} no default locale configured (set {} or pass {})",
                "warning:".bold().yellow(),
                "defaultLocale".cyan(),
                "--default-locale".cyan()
            );
            Ok(1)
        }
        BuildOutcome::MissingDefaultLocale { warnings } => {
            reporter::print_warnings(&warnings);
            Ok(1)
        }
        BuildOutcome::Built(report) => {
            reporter::print_warnings(&report.warnings);
            reporter::print_check_summary(&report);
            Ok(0)
        }
        // check never consults the cache manifest
        BuildOutcome::Unchanged => Ok(0),
    }
}

pub fn run_init() -> Result<u8> {
    let path = PathBuf::from(config::CONFIG_FILE_NAME);

    if path.exists() {
        println!(
            "{} {} already exists",
            "warning:".bold().yellow(),
            config::CONFIG_FILE_NAME
        );
        return Ok(1);
    }

    fs::write(&path, config::default_config_json()?)
        .with_context(|| format!("Failed to write {}", config::CONFIG_FILE_NAME))?;

    println!(
        "{} {}",
        reporter::SUCCESS_MARK.green(),
        format!("Created {}", config::CONFIG_FILE_NAME).green()
    );
    Ok(0)
}

/// Resolves effective options: CLI flags override the config file, which
/// falls back to built-in defaults.
fn build_options(common: &CommonArgs) -> Result<BuildOptions> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = config::load_config(&cwd)?.config;

    Ok(BuildOptions {
        translations_root: common
            .translations_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.translations_root)),
        default_locale: common.default_locale.clone().or(config.default_locale),
        dest_dir: common
            .dest_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.dest_dir)),
        output_path: common
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_path)),
    })
}

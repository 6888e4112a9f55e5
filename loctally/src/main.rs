//! # loctally
//!
//! Interactive command-line counter for code lines per language.
//!
//! ## Overview
//!
//! loctally wraps loctallylib: it scans the current working directory,
//! prunes `node_modules` and dot-prefixed entries, and reports how many
//! files matched the chosen language along with their summed code lines.
//! The language comes from a flag, or from an interactive picker when no
//! flag is given.
//!
//! ## Usage
//!
//! ```bash
//! # Pick the language interactively
//! loctally
//!
//! # Count one category directly
//! loctally --typescript
//! loctally --python
//!
//! # Count every file
//! loctally --all
//! ```
//!
//! Flag names match case-insensitively (`--TypeScript` works) and the
//! first `--` argument decides the run; arguments without the prefix are
//! ignored. An unrecognized flag prints an error and exits non-zero.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use loctallylib::{scan_root, Language};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let language = match parse_flags(&args) {
        Ok(Some(language)) => language,
        Ok(None) => match pick_language() {
            Ok(language) => language,
            Err(err) => return fail(&err),
        },
        Err(flag) => {
            eprintln!("{}", style(format!("Unknown flag: {flag}")).red());
            return ExitCode::FAILURE;
        }
    };
    match count_and_report(language) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

/// Resolve the language from argv.
///
/// The first `--` argument decides: a known name (matched after
/// lowercasing) selects its category, an unknown one is returned as the
/// error, and later flags are never inspected. Arguments without the
/// `--` prefix are skipped.
fn parse_flags(args: &[String]) -> Result<Option<Language>, String> {
    for arg in args {
        if let Some(name) = arg.strip_prefix("--") {
            return match Language::from_flag_key(&name.to_lowercase()) {
                Some(language) => Ok(Some(language)),
                None => Err(arg.clone()),
            };
        }
    }
    Ok(None)
}

/// Show the welcome banner and prompt for a category, `All` preselected.
fn pick_language() -> Result<Language> {
    println!("{}", style("Welcome to Count-Lines!").cyan().bold());
    println!(
        "{}",
        style("Let's count your lines of code interactively.\n")
            .black()
            .bright()
    );
    let labels: Vec<&str> = Language::CATEGORIES.iter().map(|l| l.label()).collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a language to count (or All):")
        .items(&labels)
        .default(0)
        .interact()
        .context("language selection failed")?;
    Ok(Language::CATEGORIES[picked])
}

/// Scan the current working directory and print the result block.
fn count_and_report(language: Language) -> Result<()> {
    println!(
        "{}",
        style(format!("\nCounting {language} files...")).magenta()
    );
    let root = env::current_dir().context("cannot resolve current directory")?;
    let summary = scan_root(&root, language)?;
    println!("{}", style("\nResults:").blue());
    println!(
        "{}",
        style(format!("• Files scanned: {}", summary.files_scanned)).green()
    );
    println!(
        "{}",
        style(format!("• Total lines of code: {}\n", summary.total_lines)).yellow()
    );
    Ok(())
}

fn fail(err: &anyhow::Error) -> ExitCode {
    eprintln!("{} {err:#}", style("Error:").red());
    ExitCode::FAILURE
}

//! Rule-based feedback for agent instruction prompts.
//!
//! Scores a prompt on correctness, clarity, engagement and delivery, lists
//! actionable suggestions, and applies mechanical fixes in place.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use feedback::apply::apply_suggestions;
use feedback::check::{CheckOptions, run_check};
use feedback::core::rules::RULES;
use feedback::exit_codes;
use feedback::io::config::{DEFAULT_CONFIG_FILE, FeedbackConfig, ReportFormat, load_config};
use feedback::io::source::{read_prompt, write_prompt};
use feedback::logging;

#[derive(Parser)]
#[command(
    name = "prompt-feedback",
    version,
    about = "Rule-based quality feedback for agent instruction prompts"
)]
struct Cli {
    /// Config file (defaults to `.prompt-feedback.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a prompt and list suggestions.
    Analyze {
        /// Prompt file; reads stdin when omitted or `-`.
        path: Option<PathBuf>,
        /// Treat the file as an agent definition (JSON) and analyze its prompt.
        #[arg(long)]
        agent: bool,
        /// Report format (overrides config).
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
        /// Exit with code 2 when the overall score is below this value.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_score: Option<u8>,
    },
    /// Apply suggestions by id, re-analyzing between each.
    Apply {
        /// Prompt file to edit.
        path: PathBuf,
        /// Suggestion id to apply; repeat to apply several in order.
        #[arg(long = "id", required = true)]
        ids: Vec<String>,
        /// Write the result back to the file instead of printing it.
        #[arg(long)]
        write: bool,
    },
    /// List the rule pipeline in evaluation order.
    Rules,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = load_cli_config(cli.config.as_deref())?;
    match cli.command {
        Command::Analyze {
            path,
            agent,
            format,
            min_score,
        } => cmd_analyze(
            &CheckOptions {
                path,
                agent,
                format,
                min_score,
            },
            &config,
        ),
        Command::Apply { path, ids, write } => cmd_apply(&path, &ids, write, &config),
        Command::Rules => cmd_rules(),
    }
}

fn load_cli_config(explicit: Option<&Path>) -> Result<FeedbackConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            load_config(path)
        }
        None => load_config(Path::new(DEFAULT_CONFIG_FILE)),
    }
}

fn cmd_analyze(options: &CheckOptions, config: &FeedbackConfig) -> Result<i32> {
    let output = run_check(options, config)?;
    println!("{}", output.report);
    if output.passed {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::BELOW_THRESHOLD)
    }
}

fn cmd_apply(path: &Path, ids: &[String], write: bool, config: &FeedbackConfig) -> Result<i32> {
    let text = read_prompt(Some(path))?;
    let applied = apply_suggestions(&text, ids, config)?;
    for (id, status) in &applied.outcomes {
        debug!(id = %id, status = ?status, "apply outcome");
    }
    if write {
        write_prompt(path, &applied.text)?;
    } else {
        print!("{}", applied.text);
    }
    Ok(exit_codes::OK)
}

fn cmd_rules() -> Result<i32> {
    for rule in RULES {
        println!(
            "{}\t{}\t-{}",
            rule.id,
            rule.category.as_str(),
            rule.category.penalty()
        );
    }
    Ok(exit_codes::OK)
}

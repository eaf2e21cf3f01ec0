//! CLI harness for the path-parameter matcher.
//!
//! Loads a matcher configuration, builds the matcher, and matches one or
//! more request paths against it, printing the outcome and any captured
//! path parameters.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pathparams_matcher::config::loader::load_config;
use pathparams_matcher::observability::logging::init_logging;
use pathparams_matcher::{PathParamsMatcher, Replacer, RequestVars};

#[derive(Parser)]
#[command(name = "pathparams-matcher")]
#[command(about = "Match request paths against placeholder patterns", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "matcher.toml")]
    config: PathBuf,

    /// Request paths to match, e.g. /api/v1/resource/42
    #[arg(required = true)]
    paths: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load {}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&format!(
        "pathparams_matcher={}",
        config.observability.log_level
    ));

    // validate_config already ran inside load_config, so tokenizing
    // cannot fail here; an empty line yields a matcher with no patterns.
    let tokens = config.matcher.parse_tokens().unwrap_or_default();
    let matcher = PathParamsMatcher::from_tokens(tokens);

    tracing::info!(patterns = matcher.patterns().len(), "Matcher ready");

    for path in &cli.paths {
        let mut vars = RequestVars::new();
        let replacer = Replacer::new();

        if matcher.match_path(path, &mut vars, &replacer) {
            println!("{}: match", path);
            let mut captures: Vec<(&str, &str)> = vars.iter().collect();
            captures.sort();
            for (key, value) in captures {
                println!("  {} = {}", key, value);
            }
        } else {
            println!("{}: no match", path);
        }
    }

    ExitCode::SUCCESS
}

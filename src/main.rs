//! shadow-utils - command line access to the session helpers.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shadow_agent_utils::helpers::{
    format_age, tokenizer_for_model, ChatDirective, NameGenerator, Vocabulary,
};
use shadow_agent_utils::logging::{self, LogConfig, LogFormat};

/// Session naming, age formatting and transcript conversion helpers.
#[derive(Parser, Debug)]
#[command(name = "shadow-utils")]
#[command(about = "Helpers for agent session names, ages and chat transcripts")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Write logs to a daily rolling file in this directory instead of stderr
    #[arg(long = "log-dir", value_name = "DIR", global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a generated session name
    Name {
        /// JSON file with "actions", "adjectives" and "nouns" word lists
        #[arg(long, value_name = "FILE")]
        vocabulary: Option<PathBuf>,
    },
    /// Print whether NAME looks like a generated session name
    Check {
        name: String,

        /// JSON vocabulary to check against
        #[arg(long, value_name = "FILE")]
        vocabulary: Option<PathBuf>,
    },
    /// Print how long ago a Unix timestamp was
    Age {
        #[arg(allow_hyphen_values = true)]
        epoch: i64,
    },
    /// Convert a transcript (FILE or stdin) into a `.. chat::` block
    Directive {
        file: Option<PathBuf>,

        /// Fail when there is no message or no `User:` turn
        #[arg(long)]
        strict: bool,
    },
    /// Print the tokenizer encoding used for MODEL
    Tokenizer { model: String },
}

fn name_generator(vocabulary: Option<PathBuf>) -> Result<NameGenerator> {
    Ok(match vocabulary {
        Some(path) => NameGenerator::with_vocabulary(
            Vocabulary::from_file(&path)
                .with_context(|| format!("loading vocabulary from {}", path.display()))?,
        ),
        None => NameGenerator::new(),
    })
}

fn read_transcript(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading transcript {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading transcript from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::new()
        .with_verbose(cli.verbose)
        .with_format(cli.log_format);
    if let Some(dir) = cli.log_dir {
        log_config = log_config.with_log_dir(dir);
    }
    let _guard = logging::init_logging(&log_config)?;

    tracing::debug!("Running {:?}", cli.command);

    match cli.command {
        Command::Name { vocabulary } => {
            println!("{}", name_generator(vocabulary)?.generate());
        }
        Command::Check { name, vocabulary } => {
            println!("{}", name_generator(vocabulary)?.is_generated(&name));
        }
        Command::Age { epoch } => {
            println!("{}", format_age(epoch));
        }
        Command::Directive { file, strict } => {
            let text = read_transcript(file)?;
            let transformed = ChatDirective::new().with_strict(strict).transform(&text)?;
            println!("{}", transformed);
        }
        Command::Tokenizer { model } => {
            let choice = tokenizer_for_model(&model);
            if choice.exact {
                println!("{}", choice.encoding);
            } else {
                println!("{} (estimate)", choice.encoding);
            }
        }
    }

    Ok(())
}

//! examforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "examforge", version, about = "Build, take, and score exams")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an exam interactively, then optionally take it (default)
    Create {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the authored exam to this TOML file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Write the score report of a final exam to this JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Load an exam file and take it
    Take {
        /// Path to a .toml exam file
        #[arg(long)]
        exam_file: PathBuf,

        /// Skip the "take the exam?" prompt
        #[arg(long, short)]
        yes: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the score report of a final exam to this JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate exam files
    Validate {
        /// Path to an exam file or directory
        #[arg(long)]
        exam_file: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example exam file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::create::execute(None, None, None),
        Some(Commands::Create {
            config,
            save,
            output,
        }) => commands::create::execute(config, save, output),
        Some(Commands::Take {
            exam_file,
            yes,
            config,
            output,
        }) => commands::take::execute(exam_file, yes, config, output),
        Some(Commands::Validate { exam_file, config }) => {
            commands::validate::execute(exam_file, config)
        }
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use cotemplate::output::OutputMode;

/// cotemplate - Commit templates with co-author trailers
#[derive(Parser, Debug)]
#[command(
    name = "cotemplate",
    version,
    about = "Commit templates with co-author trailers",
    long_about = "Read a commit message template and report its co-author.\n\n\
                  A template may credit a collaborator with a trailer line:\n\
                  Co-Authored-By: Name <email>"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the identity named by the template's Co-Authored-By trailer
    CoAuthor {
        /// Template file ("-" for stdin; defaults to the configured template)
        file: Option<PathBuf>,
    },

    /// Print the template verbatim
    Show {
        /// Template file ("-" for stdin; defaults to the configured template)
        file: Option<PathBuf>,
    },

    /// Show or change the default template
    Config {
        /// Set the default template file
        #[arg(short, long, conflicts_with = "clear")]
        template: Option<PathBuf>,

        /// Forget the default template
        #[arg(long)]
        clear: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::CoAuthor { file }) => commands::co_author(file.as_deref(), output_mode),
        Some(Command::Show { file }) => commands::show(file.as_deref()),
        Some(Command::Config { template, clear }) => {
            commands::config(template, clear, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": cotemplate::VERSION
                    })
                );
            } else {
                println!("cotemplate v{}", cotemplate::VERSION);
            }
            Ok(())
        },
        None => {
            println!("cotemplate v{}", cotemplate::VERSION);
            println!("Run 'cotemplate --help' for usage");
            Ok(())
        },
    }
}

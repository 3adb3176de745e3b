//! Jangle CLI - Literate Programming for Interactive Sessions

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jangle::commands;
use jangle::interface::Context;

#[derive(Parser)]
#[command(name = "jangle")]
#[command(author, version, about = "Run the code in a literate session document", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Interpreter executable (overrides config file and PATH probing)
    #[arg(long, global = true)]
    interpreter: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the document's code and weave the output back in (default)
    Run {
        /// Input document, stdin if omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the interpreter script for a document
    Tangle {
        /// Input document, stdin if omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write the script here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Weave a saved transcript into a document
    Weave {
        /// Transcript captured from running the tangled script
        #[arg(short, long)]
        transcript: PathBuf,

        /// Input document, stdin if omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove all woven output from a document
    Strip {
        /// Input document, stdin if omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how a document is split into chunks, as JSON
    Chunks {
        /// Input document, stdin if omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the document
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = match Context::from_current_dir(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error reading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Override interpreter if specified on command line
    if let Some(program) = cli.interpreter {
        ctx.config.interpreter.program = Some(program);
    }

    let command = cli.command.unwrap_or(Commands::Run {
        input: None,
        output: None,
    });

    let result = match command {
        Commands::Run { input, output } => {
            commands::run(&ctx, commands::RunOptions { input, output })
        }

        Commands::Tangle { input, output } => {
            commands::tangle(&ctx, commands::TangleOptions { input, output })
        }

        Commands::Weave {
            transcript,
            input,
            output,
        } => {
            let options = commands::WeaveOptions {
                input,
                transcript,
                output,
            };
            commands::weave(&ctx, options)
        }

        Commands::Strip { input, output } => {
            commands::strip(&ctx, commands::StripOptions { input, output })
        }

        Commands::Chunks { input } => commands::chunks(&ctx, commands::ChunksOptions { input }),

        Commands::Config => commands::config(&ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

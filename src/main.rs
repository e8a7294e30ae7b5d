use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold the boilerplate files of a Python package", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// Defaults to `interactive` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Scan this directory for *.j2 templates instead of using the built-in set
    #[arg(long, global = true, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Config file (default: ~/.pybootstrap/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Root directory generated files are written under (default: current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for every value, then generate all templates
    Interactive,

    /// Take values from the command line, then generate all templates
    Manual {
        /// Package name
        #[arg(value_parser = non_empty)]
        name: String,

        /// Author name
        #[arg(value_parser = non_empty)]
        author_name: String,

        /// Author email
        #[arg(value_parser = non_empty)]
        author_email: String,

        /// Repository URL
        #[arg(short, long, default_value = "")]
        repository: String,

        /// Description text, or the path of a file holding it
        #[arg(short, long, default_value = "")]
        description: String,

        /// Read the description from this file
        #[arg(long, value_name = "PATH", conflicts_with = "description")]
        description_file: Option<PathBuf>,

        /// The package is not a console script
        #[arg(long)]
        no_cli: bool,
    },

    /// Remove every file a generation would have written
    Undo,
}

fn non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            commands::interactive::execute(&cli.global)?;
        }
        Commands::Manual {
            name,
            author_name,
            author_email,
            repository,
            description,
            description_file,
            no_cli,
        } => {
            let input = pybootstrap::ManualInput {
                name,
                author_name,
                author_email,
                repository,
                description,
                description_file,
                no_cli,
            };
            commands::manual::execute(&cli.global, input)?;
        }
        Commands::Undo => {
            commands::undo::execute(&cli.global)?;
        }
    }

    Ok(())
}

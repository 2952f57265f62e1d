//! CLI Adapter.

mod check;
mod enroll;
mod list;
mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "courseplan")]
#[command(version)]
#[command(
    about = "Resolve course prerequisite order and manage enrollments",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding courseplan.toml, the catalog, and enrollments (defaults to current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List available courses
    #[clap(visible_alias = "ls")]
    List {
        /// Show detailed info for a specific course
        #[arg(long)]
        detail: Option<String>,
    },
    /// Print the order in which a course and its prerequisites can be taken
    #[clap(visible_alias = "r")]
    Resolve {
        /// Course name
        course: String,
        /// Fail on prerequisites missing from the catalog
        #[arg(long)]
        strict: bool,
        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Enroll in a course and all of its prerequisites
    #[clap(visible_alias = "e")]
    Enroll {
        /// Course name (prompts when omitted)
        course: Option<String>,
        /// User whose enrollments are updated
        #[arg(short, long)]
        user: String,
        /// Fail on prerequisites missing from the catalog
        #[arg(long)]
        strict: bool,
    },
    /// Show the courses a user is enrolled in
    #[clap(visible_alias = "p")]
    Path {
        /// User whose learning path is shown
        #[arg(short, long)]
        user: String,
    },
    /// Validate the catalog for missing prerequisites and circular dependencies
    Check {
        /// Treat missing prerequisites as failures
        #[arg(long)]
        strict: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = cli
        .root
        .map_or_else(|| std::env::current_dir().map_err(AppError::from), Ok)
        .and_then(|root| dispatch(cli.command, root));

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn dispatch(command: Commands, root: PathBuf) -> Result<i32, AppError> {
    match command {
        Commands::List { detail } => list::run_list(&root, detail).map(|_| 0),
        Commands::Resolve { course, strict, json } => {
            resolve::run_resolve(&root, &course, strict, json).map(|_| 0)
        }
        Commands::Enroll { course, user, strict } => {
            enroll::run_enroll(&root, &user, course, strict).map(|_| 0)
        }
        Commands::Path { user } => list::run_path(&root, &user).map(|_| 0),
        Commands::Check { strict } => check::run_check(&root, strict),
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "courseplan=debug" } else { "courseplan=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

//! markbook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "markbook", version, about = "Student coursework records manager")]
struct Cli {
    /// Config file path (default: ./markbook.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every student record with the cohort summary
    List,

    /// Show one student's record by exact name
    Show {
        /// Student name (case-sensitive)
        name: String,
    },

    /// Add a new student record
    Add {
        /// Student id
        #[arg(long)]
        id: String,

        /// Student name
        #[arg(long)]
        name: String,

        /// The three coursework component scores
        #[arg(long, num_args = 3, value_names = ["C1", "C2", "C3"])]
        coursework: Vec<String>,

        /// Exam score
        #[arg(long)]
        exam: String,
    },

    /// Remove every record matching a name (case-insensitive) or id
    Remove {
        /// Name or id
        key: String,
    },

    /// Update one field of the first record matching a name or id
    Set {
        /// Name or id
        key: String,

        /// Field to update: coursework, exam, name, or id
        field: String,

        /// New value
        value: String,
    },

    /// Sort records by name and save the new order
    Sort {
        /// Sort Z to A instead of A to Z
        #[arg(long)]
        descending: bool,
    },

    /// Show the highest overall scorer
    Best,

    /// Show the lowest overall scorer
    Worst,

    /// Audit the marks file for suspect content
    Check,

    /// Export records and summary as a JSON report
    Export {
        /// Report path
        #[arg(long, default_value = "class-report.json")]
        output: PathBuf,
    },

    /// Play an arithmetic quiz in the terminal
    Quiz {
        /// Difficulty: easy, moderate, or advanced
        #[arg(long, default_value = "easy")]
        difficulty: String,
    },

    /// Print a random joke
    Joke,

    /// Create a starter config and sample data files
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("markbook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let config = match config::Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List => commands::list::execute(&config),
        Commands::Show { name } => commands::show::execute(&config, &name),
        Commands::Add {
            id,
            name,
            coursework,
            exam,
        } => commands::add::execute(&config, &id, &name, &coursework, &exam),
        Commands::Remove { key } => commands::remove::execute(&config, &key),
        Commands::Set { key, field, value } => {
            commands::set::execute(&config, &key, &field, &value)
        }
        Commands::Sort { descending } => commands::sort::execute(&config, descending),
        Commands::Best => commands::extreme::execute(&config, commands::extreme::Which::Best),
        Commands::Worst => commands::extreme::execute(&config, commands::extreme::Which::Worst),
        Commands::Check => commands::check::execute(&config),
        Commands::Export { output } => commands::export::execute(&config, &output),
        Commands::Quiz { difficulty } => commands::quiz::execute(&difficulty),
        Commands::Joke => commands::joke::execute(&config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

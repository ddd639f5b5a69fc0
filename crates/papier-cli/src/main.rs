//! Papier CLI — frame resolution, inspection, and validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "papier")]
#[command(version, about = "Papier — contour topology and collision resolution engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a recorded frame: build the contour tree and correct disks.
    Resolve {
        /// Path to frame file (JSON).
        path: String,

        /// Number of settle passes for the disk stage (omit for single-pass).
        #[arg(short, long)]
        settle: Option<u32>,

        /// Output JSON file path (stdout if omitted).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a recorded frame: print the contour hierarchy.
    Inspect {
        /// Path to frame file (JSON).
        path: String,
    },

    /// Validate a recorded frame without resolving it.
    Validate {
        /// Path to frame file (JSON).
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve {
            path,
            settle,
            output,
        } => commands::resolve(&path, settle, output.as_deref()),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

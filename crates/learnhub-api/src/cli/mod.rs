//! CLI command definitions for the `learnhub` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod courses;
pub mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Digital Learning Hub tutor backend.
#[derive(Parser)]
#[command(name = "learnhub", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the TOML configuration file.
    #[arg(long, global = true, env = "LEARNHUB_CONFIG", default_value = "learnhub.toml")]
    pub config: PathBuf,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on (overrides the config file).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config file).
        #[arg(long)]
        host: Option<String>,
    },

    /// List the course ids that have course-specific instructions.
    Courses,

    /// Print the system prompt the tutor would receive.
    Prompt {
        /// Course id to add course-specific instructions for.
        #[arg(short, long)]
        course: Option<String>,

        /// Include the admin knowledge from the settings store.
        #[arg(long)]
        with_knowledge: bool,
    },
}

impl Cli {
    /// Log filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "info,learnhub_api=debug,learnhub_core=debug,learnhub_infra=debug",
            _ => "trace",
        }
    }
}

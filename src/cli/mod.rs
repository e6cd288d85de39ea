//! CLI module for the model evaluation service

pub mod serve;

use clap::{Parser, Subcommand};

/// Model evaluation service - scores a trained model against a labeled CSV dataset
#[derive(Parser)]
#[command(name = "model-eval-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP evaluation server
    Serve,
}

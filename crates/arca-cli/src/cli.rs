use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arca",
    about = "Arca — content-addressed model artifact store with classification dispatch",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the Arca HTTP server
    Serve(ServeArgs),
    /// Print the content digest of an artifact file
    Hash(HashArgs),
    /// Validate an artifact file against the reference engine
    Inspect(InspectArgs),
    /// Classify texts with an artifact file, without storing anything
    Predict(PredictArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Maximum accepted artifact size in bytes; overrides the config file
    #[arg(long)]
    pub max_artifact_size: Option<u64>,
}

#[derive(Args)]
pub struct HashArgs {
    /// Artifact file to digest
    pub file: PathBuf,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Artifact file to validate
    pub file: PathBuf,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Artifact file holding the model
    pub model: PathBuf,
    /// Texts to classify
    #[arg(required = true)]
    pub inputs: Vec<String>,
}

use std::sync::Arc;

use colored::Colorize;

use arca_crypto::ArtifactHasher;
use arca_dispatch::{ArtifactSource, ClassificationDispatcher, TextInputs};
use arca_engine::{ClassificationEngine, JsonRuleEngine};
use arca_server::{ArcaServer, ServerConfig};
use arca_store::InMemoryArtifactStore;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Hash(args) => cmd_hash(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Predict(args) => cmd_predict(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.parse()?;
    }
    if let Some(max) = args.max_artifact_size {
        config.max_artifact_size = max;
    }

    let server = ArcaServer::new(
        config,
        Arc::new(InMemoryArtifactStore::new()),
        Arc::new(JsonRuleEngine::new()),
    );
    println!(
        "{} Arca server on {}",
        "✓".green().bold(),
        server.config().bind_addr.to_string().bold()
    );
    tokio::runtime::Runtime::new()?.block_on(server.serve())?;
    Ok(())
}

fn cmd_hash(args: HashArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.file)?;
    let digest = ArtifactHasher::ARTIFACT.digest(&bytes);
    println!("{}  {}", digest, args.file.display());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.file)?;
    let digest = ArtifactHasher::ARTIFACT.digest(&bytes);
    println!("Digest: {}", digest.to_hex().cyan());
    println!("Size:   {} bytes", bytes.len().to_string().bold());

    match JsonRuleEngine::new().load(&bytes) {
        Ok(_) => println!("{} Artifact loads as a rule-set model.", "✓".green().bold()),
        Err(e) => println!("{} {}", "✗".red().bold(), e),
    }
    Ok(())
}

fn cmd_predict(args: PredictArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.model)?;
    // One-shot inline classification; no store entry is ever created.
    let dispatcher = ClassificationDispatcher::new(
        Arc::new(InMemoryArtifactStore::new()),
        Arc::new(JsonRuleEngine::new()),
    );
    let predictions = dispatcher.classify(
        ArtifactSource::Inline(bytes),
        TextInputs::Many(args.inputs.clone()),
    )?;

    for (input, prediction) in args.inputs.iter().zip(&predictions) {
        println!("{} {}", prediction.label.yellow().bold(), input);
        for (label, score) in &prediction.scores {
            println!("    {label}: {score:.3}");
        }
    }
    Ok(())
}

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ova_properties::prompt::fill_interactively;
use ova_properties::{load_config, load_model, render_with_binding, Config};

/// Prompt for an OVA's configurable properties and print deployment arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file overriding the descriptor suffix, vService binding or namespaces
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Path to the OVA archive
    ova: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let mut model = load_model(&args.ova, &config)
        .with_context(|| format!("reading OVA '{}'", args.ova.display()))?;

    let stdin = io::stdin();
    fill_interactively(&mut model, stdin.lock(), io::stderr())
        .with_context(|| format!("collecting values for '{}'", args.ova.display()))?;

    println!("{}", render_with_binding(&model, &config.vservice_binding));
    Ok(())
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

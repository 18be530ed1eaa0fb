use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gardenplan::{
    default_config_path, init_logging, parse_script, Config, ScriptRunner, StaticCatalog,
    BUILD_DATE, VERSION,
};
use tracing::info;

/// Drive the garden plan editor headlessly from a JSON script
#[derive(Parser, Debug)]
#[command(name = "gardenplan")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
struct Args {
    /// Configuration file (TOML or JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Plant catalog JSON used by `choose_plant` steps
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Script file, or `-` for stdin
    #[arg(value_name = "SCRIPT")]
    script: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => default_config_path()
            .map(|path| Config::load_or_default(&path))
            .unwrap_or_default(),
    };

    // Initialize logging
    init_logging(&config.logging.filter)?;
    info!(
        version = VERSION,
        build_date = BUILD_DATE,
        "gardenplan starting"
    );

    let mut runner = ScriptRunner::new(config);
    if let Some(path) = &args.catalog {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        runner = runner.with_catalog(StaticCatalog::from_json(&json)?);
    }

    let script = match args.script.as_deref() {
        None => "[]".to_string(),
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {path}"))?,
    };

    let report = runner.run(parse_script(&script)?)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

mod cli;

use reeltag::{config, metadata::TmdbClient, probe, processor::Processor, select::ConsolePrompt};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick defaults based on the
    // verbose flag.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reeltag=trace".to_string()
        } else {
            "reeltag=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Run {
            source,
            destination,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_pipeline(cli.config.as_deref(), source, destination))
        }
        Commands::Probe { file, json } => probe_file(&file, json),
        Commands::CheckTools => check_tools(),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("reeltag {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn run_pipeline(
    config_path: Option<&std::path::Path>,
    source: Option<std::path::PathBuf>,
    destination: Option<std::path::PathBuf>,
) -> Result<()> {
    let mut config = config::find_and_load_config(config_path)?;

    // CLI overrides take precedence over the file.
    if let Some(source) = source {
        config.library.source = source;
    }
    if let Some(destination) = destination {
        config.library.destination = destination;
    }

    if !config.library.destination.is_dir() {
        std::fs::create_dir_all(&config.library.destination)?;
    }

    tracing::info!(
        source = %config.library.source.display(),
        destination = %config.library.destination.display(),
        "starting run"
    );

    let tmdb = TmdbClient::new(&config.tmdb);
    let processor = Processor::new(config, tmdb, ConsolePrompt);
    processor.run().await?;

    Ok(())
}

fn probe_file(file: &std::path::Path, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let frame_size = probe::frame_size(file)?;
    let hd = probe::is_hd(&frame_size)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "frame_size": frame_size, "hd": hd })
        );
    } else {
        println!("File: {}", file.display());
        println!("Frame size: {frame_size}");
        println!("HD: {hd}");
    }

    Ok(())
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    let tools = probe::check_tools();
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "ok"
        } else {
            all_ok = false;
            "missing"
        };
        print!("[{}] {}", status, tool.name);
        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }
        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing; HD classification will fall back to not-HD.");
    }

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    let config = config::find_and_load_config(path)?;
    println!("Configuration is valid");
    println!("  Source: {}", config.library.source.display());
    println!("  Destination: {}", config.library.destination.display());
    println!("  TMDB language: {}", config.tmdb.language);
    println!("  Include adult content: {}", config.tmdb.include_adult);
    Ok(())
}

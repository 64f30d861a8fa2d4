mod cli;

use avls::{config::Config, inventory, probe, report, scanner::Scanner};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let check_tools_only = cli.check_tools;
    let config = cli.into_config()?;

    // Respect RUST_LOG env var if set, otherwise follow -v/-q
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.verbosity.log_filter().to_string());

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    if check_tools_only {
        return check_tools(&config);
    }

    run(&config)
}

fn run(config: &Config) -> Result<()> {
    for warning in config.validate()? {
        tracing::warn!("{}", warning);
    }

    // The version gate must pass before any file is touched
    let prober = probe::prepare_prober(config)?;

    let candidates = Scanner::new()
        .recursive(config.recursive)
        .scan(&config.target)?;

    if candidates.is_empty() {
        tracing::info!("No media files in {}", config.target.display());
    }

    let rows = inventory::build_report(&candidates, &prober, config.mode(), config.jobs)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::render(&rows, config.output, &mut out)?;
    out.flush().context("Failed to write report")?;

    Ok(())
}

fn check_tools(config: &Config) -> Result<()> {
    println!("Checking external tools...\n");

    let tools = probe::check_tools(config);
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.usable() {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.info.name);

        if let Some(ref version) = tool.info.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.info.path {
            print!(" - {}", path.display());
        }

        println!();

        if let Err(ref e) = tool.gate {
            println!("  {}", e);
        }
    }

    println!();
    if !all_ok {
        anyhow::bail!("Some tools are missing or too old");
    }
    println!("All required tools are available!");
    Ok(())
}

use anyhow::Context;
use calcpad::cli::Cli;
use calcpad::config::Config;
use calcpad::logging::{init_tracing, LogSink};
use calcpad::{headless, ui};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) if !path.exists() => {
            anyhow::bail!("Config file '{}' not found", path.display())
        }
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    let sink = LogSink::resolve(&config.logging, !cli.is_headless());
    init_tracing(&config.logging, &sink)?;

    if let Some(keys) = &cli.keys {
        let state = headless::evaluate(keys, config.calculator.chaining)?;
        println!("{}", state.display);
        return Ok(());
    }

    ui::run(&config).context("Terminal UI failed")?;
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use component_lab::cli::Args;
use component_lab::config::Config;
use component_lab::logging::init_tracing;
use component_lab::ui::runtime;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging)?;
    tracing::info!(
        initial = config.counter.initial_value,
        step = config.counter.step,
        page = ?config.ui.start_page,
        "starting component-lab"
    );

    runtime::run(&config).context("terminal UI failed")?;
    Ok(())
}

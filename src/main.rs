use anyhow::Context;
use clap::Parser;
use pincode::cli::Cli;
use pincode::config::Config;
use pincode::logging::init_tracing;
use pincode::shutdown::ShutdownHandle;
use pincode::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    cli.apply(&mut config)?;
    init_tracing(&config.logging);

    let options = config.pin.to_options()?;
    tracing::info!(length = options.length.get(), "starting pincode");

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("installing signal handlers")?;

    runtime::run(options, shutdown).context("terminal UI failed")?;
    tracing::info!("pincode exited");
    Ok(())
}

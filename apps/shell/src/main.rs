use anyhow::Context;
use clap::Parser;
use enrol_domain::config::ShellConfig;
use enrol_kernel::config::load_config;
use enrol_logger::Logger;
use enrol_registry::{Administrator, Registry};
use enrol_shell::{Cli, Console, Session, apply_seed};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg: ShellConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration could not be loaded")?;
    cli.apply(&mut cfg);

    let _log = Logger::builder(env!("CARGO_PKG_NAME"))
        .with_config(&cfg.log)
        .context("Invalid logging configuration")?
        .init()
        .context("Failed to initialise logging")?;

    let mut registry = Registry::with_config(&cfg.registry);
    apply_seed(&mut registry, &cfg.seed);

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(registry, Administrator::new(&cfg.administrator), console);

    session.run().context("Console I/O failed")
}

//! Pagetree CLI Binary Entry Point

use clap::Parser;
use pagetree_cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_filter()),
    )
    .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &config, &mut out)
}

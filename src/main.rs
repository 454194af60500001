use anyhow::Result;
use clap::Parser;
use tailsort::cli::Cli;
use tailsort::commands::{configure_thread_pool, run, RunConfig};
use tailsort::observability::{init_logging, install_panic_hook};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    install_panic_hook();
    configure_thread_pool(cli.jobs);

    let config = RunConfig::from_cli(&cli)?;
    let stdout = std::io::stdout();
    let summary = run(&config, &mut stdout.lock())?;

    if summary.is_failure(config.mode) {
        std::process::exit(1);
    }
    Ok(())
}

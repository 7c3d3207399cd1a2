use clap::Parser;
use notify_sim::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    tracing::debug!(
        version = %settings.application.version,
        app = %settings.application.name,
        "Starting notify-sim"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute_command(&cli, settings, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

use std::process::ExitCode;

use algoviz::{app::App, config::Config, error::AppError};
use clap::Parser;

/// Log file written next to the working directory, so logging never draws over the UI
const LOG_FILE: &str = "algoviz.log";

fn run(config: Config) -> Result<(), AppError> {
    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::new(config).run(&mut stdout);
    // Restore even if the app failed, then report the first error
    App::restore_terminal(&mut stdout)?;
    result
}

fn main() -> ExitCode {
    let config = Config::parse();

    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    // Guard must live until exit so buffered lines are flushed
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(Config::log_level())
        .init();
    tracing::info!("[main] starting with {:?}", config);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("[main] {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

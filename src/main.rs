use anyhow::Result;

use pass_importance::cli::Command;
use pass_importance::{handle_analyze, handle_fetch, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Fetch {
            matches_file,
            events_dir,
        } => handle_fetch(matches_file, events_dir),
        Command::Analyze {
            matches_file,
            events_dir,
            output,
        } => handle_analyze(matches_file, events_dir, output),
    }
}

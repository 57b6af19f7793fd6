#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tictactoe::{init_logging, play, SettingsArgs, StdConsole};

/// Two-player tic-tac-toe on an N×N board, played at the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.settings.resolve()?;

    let mut console = StdConsole::new();
    let played = play(&config, &mut console)?;
    log::info!("played {} session(s)", played);
    Ok(())
}

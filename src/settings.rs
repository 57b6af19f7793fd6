#![cfg(feature = "std")]

//! Configuration provider: command-line flags, environment variables and an
//! optional TOML file, merged into a [`RawConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use serde::Deserialize;

use crate::config::{GameConfig, RawConfig};

/// Flags shared by every way of launching a game. Each one can also come
/// from its environment variable.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// TOML file with `board_scale` and symbol keys.
    #[arg(long, env = "TICTACTOE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Side length of the board (3-255). Invalid values fall back to 3.
    #[arg(long, env = "TICTACTOE_BOARD_SCALE")]
    pub scale: Option<String>,

    /// Symbol for an empty cell (1-5 characters).
    #[arg(long, env = "TICTACTOE_VACANT_SYMBOL")]
    pub vacant_symbol: Option<String>,

    /// Symbol for player 1 (1-5 characters).
    #[arg(long, env = "TICTACTOE_PLAYER1_SYMBOL")]
    pub player1_symbol: Option<String>,

    /// Symbol for player 2 (1-5 characters).
    #[arg(long, env = "TICTACTOE_PLAYER2_SYMBOL")]
    pub player2_symbol: Option<String>,
}

impl SettingsArgs {
    fn raw(&self) -> RawConfig {
        RawConfig {
            scale: self.scale.clone(),
            vacant_symbol: self.vacant_symbol.clone(),
            player1_symbol: self.player1_symbol.clone(),
            player2_symbol: self.player2_symbol.clone(),
        }
    }

    /// Merge flags over the config file (if any) and validate the result.
    pub fn resolve(&self) -> anyhow::Result<GameConfig> {
        let file = match &self.config {
            Some(path) => {
                log::info!("loading board settings from {}", path.display());
                load_file(path)?
            }
            None => RawConfig::default(),
        };
        let config = GameConfig::from_raw(&self.raw().or(file));
        log::info!(
            "{}x{} board, symbols {:?}/{:?}/{:?}",
            config.scale,
            config.scale,
            config.symbols.vacant,
            config.symbols.player1,
            config.symbols.player2
        );
        Ok(config)
    }
}

/// On-disk layout. `board_scale` may be written as a number or a string.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct FileSettings {
    board_scale: Option<toml::Value>,
    vacant_symbol: Option<String>,
    player1_symbol: Option<String>,
    player2_symbol: Option<String>,
}

impl From<FileSettings> for RawConfig {
    fn from(file: FileSettings) -> Self {
        let scale = file.board_scale.map(|value| match value {
            toml::Value::String(s) => s,
            other => other.to_string(),
        });
        RawConfig {
            scale,
            vacant_symbol: file.vacant_symbol,
            player1_symbol: file.player1_symbol,
            player2_symbol: file.player2_symbol,
        }
    }
}

/// Parse TOML configuration text.
pub fn parse_file(text: &str) -> anyhow::Result<RawConfig> {
    let file: FileSettings = toml::from_str(text)?;
    Ok(file.into())
}

/// Read and parse the configuration file at `path`.
pub fn load_file(path: &Path) -> anyhow::Result<RawConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_file(&text).with_context(|| format!("parsing config file {}", path.display()))
}

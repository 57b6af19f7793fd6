//! Board scale and piece symbols, validated once at startup.

use alloc::string::{String, ToString};

pub const DEFAULT_SCALE: u8 = 3;
pub const MIN_SCALE: u8 = 3;
/// Largest scale whose indices still fit the coordinate type.
pub const MAX_SCALE: u8 = u8::MAX;
/// Longest symbol, in characters, accepted from configuration.
pub const MAX_SYMBOL_LEN: usize = 5;

pub const DEFAULT_VACANT_SYMBOL: &str = ".";
pub const DEFAULT_PLAYER1_SYMBOL: &str = "X";
pub const DEFAULT_PLAYER2_SYMBOL: &str = "O";

/// Glyphs used to render each occupancy state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSymbols {
    pub vacant: String,
    pub player1: String,
    pub player2: String,
}

impl Default for PieceSymbols {
    fn default() -> Self {
        Self {
            vacant: DEFAULT_VACANT_SYMBOL.to_string(),
            player1: DEFAULT_PLAYER1_SYMBOL.to_string(),
            player2: DEFAULT_PLAYER2_SYMBOL.to_string(),
        }
    }
}

/// Unvalidated configuration values as they arrive from a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub scale: Option<String>,
    pub vacant_symbol: Option<String>,
    pub player1_symbol: Option<String>,
    pub player2_symbol: Option<String>,
}

impl RawConfig {
    /// Fill every field left unset here from `fallback`.
    pub fn or(self, fallback: RawConfig) -> RawConfig {
        RawConfig {
            scale: self.scale.or(fallback.scale),
            vacant_symbol: self.vacant_symbol.or(fallback.vacant_symbol),
            player1_symbol: self.player1_symbol.or(fallback.player1_symbol),
            player2_symbol: self.player2_symbol.or(fallback.player2_symbol),
        }
    }
}

/// Validated game configuration, passed by reference into each session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub scale: u8,
    pub symbols: PieceSymbols,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            symbols: PieceSymbols::default(),
        }
    }
}

impl GameConfig {
    /// Validate raw values. Anything unusable falls back to its default;
    /// this never fails.
    pub fn from_raw(raw: &RawConfig) -> Self {
        let mut config = GameConfig::default();

        if let Some(value) = raw.scale.as_deref() {
            match value.trim().parse::<usize>() {
                Ok(scale) if is_valid_scale(scale) => config.scale = scale as u8,
                _ => log::warn!(
                    "ignoring board scale {:?}, using {}",
                    value,
                    DEFAULT_SCALE
                ),
            }
        }

        apply_symbol(&mut config.symbols.vacant, raw.vacant_symbol.as_deref(), "vacant");
        apply_symbol(&mut config.symbols.player1, raw.player1_symbol.as_deref(), "player1");
        apply_symbol(&mut config.symbols.player2, raw.player2_symbol.as_deref(), "player2");
        config
    }
}

/// Whether `scale` lies in `[MIN_SCALE, MAX_SCALE]`.
pub fn is_valid_scale(scale: usize) -> bool {
    (MIN_SCALE as usize..=MAX_SCALE as usize).contains(&scale)
}

fn apply_symbol(slot: &mut String, candidate: Option<&str>, which: &str) {
    let Some(candidate) = candidate else {
        return;
    };
    let len = candidate.chars().count();
    if (1..=MAX_SYMBOL_LEN).contains(&len) {
        *slot = candidate.to_string();
    } else {
        log::warn!(
            "ignoring {} symbol {:?} (must be 1-{} characters), using {:?}",
            which,
            candidate,
            MAX_SYMBOL_LEN,
            slot
        );
    }
}

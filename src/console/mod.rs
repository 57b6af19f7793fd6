//! Line-oriented input and output used by a game session.

use alloc::string::String;

/// Source of raw text lines, one per prompt.
pub trait InputSource {
    /// Next line without its trailing newline, or `None` once input is exhausted.
    fn read_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Sink for text shown to the players.
pub trait OutputSink {
    /// Write without a trailing newline, used for prompts.
    fn write(&mut self, text: &str) -> anyhow::Result<()>;

    fn write_line(&mut self, text: &str) -> anyhow::Result<()>;

    /// Wipe whatever the previous session left on screen.
    fn clear(&mut self) -> anyhow::Result<()>;
}

pub mod scripted;
pub mod stdio;

pub use scripted::ScriptedConsole;
pub use stdio::StdConsole;

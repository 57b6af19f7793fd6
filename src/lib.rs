#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod cell;
mod common;
mod config;
mod moves;
mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod settings;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use moves::*;
pub use player::*;
#[cfg(feature = "std")]
pub use console::{InputSource, OutputSink, ScriptedConsole, StdConsole};
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use settings::SettingsArgs;

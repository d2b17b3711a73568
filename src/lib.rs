//! Dice for a game master's monster presets, shown through a tabletop host.
//!
//! ```
//! use mob_roller::Preset;
//!
//! let report = mob_roller::roll(Preset::Weak, 0).unwrap();
//! assert_eq!(report.lines()[0], "=== Weak Mob (3d6) ===");
//! assert!(report.lines()[5].starts_with("ATK Total: "));
//! ```

pub mod action;
pub mod chunk;
pub mod common;
pub mod config;
pub mod console;
mod error;
pub mod gateway;
mod preset;
pub mod roll;
pub mod trigger;

pub use action::{Dispatcher, Outcome, Presentation};
pub use config::RollerConfig;
pub use error::{ActionError, Error};
pub use preset::Preset;
pub use trigger::{parse_level_bonus, Trigger};

use roll::{Report, RollContext, RollError, SimpleStringifier};

/// Rolls `preset` with a fresh default context and renders it.
pub fn roll(preset: Preset, level_bonus: common::UInt) -> Result<Report, RollError> {
    let mut ctx: RollContext = RollContext::default();
    let package = preset.roll(&mut ctx, level_bonus)?;
    Ok(SimpleStringifier::new().stringify(&package))
}

mod aggregate;
mod attack;
mod ctx;
mod error;
mod package;
mod roller;
mod stringify;

pub(crate) type RResult<T> = Result<T, RollError>;

pub use aggregate::{Aggregate, DieRoll, DroppedDieRoll, Tally};
pub use attack::{AttackDie, AttackResolution};
pub use ctx::{DefaultRoller, RollContext, MAX_JITTER};
pub use error::RollError;
pub use package::{HitPoints, RollPackage};
pub use roller::{try_sides, Roller};
pub use stringify::{Report, SimpleStringifier, Stringify};

#[cfg(test)]
pub(crate) use roller::ScriptedRoller;

use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("a die needs at least one side")]
    ZeroSides,
    #[error("too many dice rolled (limit is {limit})")]
    TooManyRolls { limit: usize },
}

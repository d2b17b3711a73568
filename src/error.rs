use crate::gateway::GatewayError;
use crate::roll::RollError;
use thiserror::Error;

/// Why an action stopped before presenting a roll.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("caller is not allowed to roll")]
    PermissionDenied,
    #[error("no scene is open")]
    NoActiveContext,
    #[error("could not check the caller's role: {0}")]
    Gateway(#[from] GatewayError),
    #[error("{0}")]
    Roll(#[from] RollError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Roll(#[from] RollError),
    #[error(transparent)]
    Parse(#[from] crate::trigger::ParseError),
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

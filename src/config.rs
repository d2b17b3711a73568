use crate::gateway::AnnotationStyle;
use crate::roll::MAX_JITTER;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use thiserror::Error;

const APP_NAME: &str = "mob-roller";

/// Dice drawn by one boss package with no level bonus.
pub const MIN_ROLL_BUDGET: usize = 26;
pub const MAX_ROLL_BUDGET: usize = 100_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("max_message_len must be at least 1")]
    ZeroMessageLength,

    #[error("max_rolls must be at least 26, got {0}")]
    RollBudgetTooSmall(usize),

    #[error("max_rolls must be at most 100000, got {0}")]
    RollBudgetTooLarge(usize),

    #[error("anchor_jitter must be at most 2147483647, got {0}")]
    JitterTooLarge(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollerConfig {
    /// Refuse to roll while no scene is open, instead of falling back to
    /// notifications.
    #[serde(default)]
    pub strict_scene_check: bool,
    /// Echo the click, the caller role and the result summary as extra toasts.
    #[serde(default)]
    pub verbose_toasts: bool,
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
    #[serde(default = "default_anchor_jitter")]
    pub anchor_jitter: u32,
    #[serde(default = "default_max_rolls")]
    pub max_rolls: usize,
    #[serde(default)]
    pub annotation_style: AnnotationStyle,
}

fn default_max_message_len() -> usize {
    350
}

fn default_anchor_jitter() -> u32 {
    20
}

fn default_max_rolls() -> usize {
    1000
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            strict_scene_check: false,
            verbose_toasts: false,
            max_message_len: default_max_message_len(),
            anchor_jitter: default_anchor_jitter(),
            max_rolls: default_max_rolls(),
            annotation_style: AnnotationStyle::default(),
        }
    }
}

impl RollerConfig {
    /// Loads from the platform config directory, creating it with defaults
    /// on first use.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = confy::load(APP_NAME, None)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = confy::load_path(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn store_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Save)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_message_len == 0 {
            return Err(ConfigError::ZeroMessageLength);
        }
        if self.max_rolls < MIN_ROLL_BUDGET {
            return Err(ConfigError::RollBudgetTooSmall(self.max_rolls));
        }
        if self.max_rolls > MAX_ROLL_BUDGET {
            return Err(ConfigError::RollBudgetTooLarge(self.max_rolls));
        }
        if self.anchor_jitter > MAX_JITTER {
            return Err(ConfigError::JitterTooLarge(self.anchor_jitter));
        }
        Ok(())
    }

    pub fn message_limit(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.max_message_len).unwrap_or(NonZeroUsize::MIN)
    }
}

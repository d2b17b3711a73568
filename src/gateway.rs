//! The boundary with the host application.
//!
//! Nothing in the crate talks to a host directly. Every permission check,
//! canvas placement and notification goes through [`PresentationGateway`],
//! so tests and the console binary can stand in for the real host.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors reported by the host.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum GatewayError {
    #[error("no scene is open")]
    NoActiveScene,
    #[error("host API unavailable: {0}")]
    Unavailable(String),
    #[error("host rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CallerRole {
    /// Allowed to roll; the game master.
    Privileged,
    Other,
}

impl fmt::Display for CallerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Privileged => "GM",
            Self::Other => "player",
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Success,
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Success => "SUCCESS",
        })
    }
}

/// A canvas position. The origin is the neutral fallback.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx as f64, self.y + dy as f64)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// How a placed annotation looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    pub font_family: String,
    pub font_size: u32,
    pub padding: u32,
    pub fill_color: String,
    pub text_color: String,
    pub stroke_color: String,
    pub stroke_width: u32,
    pub align: TextAlign,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            font_family: "monospace".to_string(),
            font_size: 20,
            padding: 10,
            fill_color: "#111111".to_string(),
            text_color: "#ffffff".to_string(),
            stroke_color: "#ffffff".to_string(),
            stroke_width: 2,
            align: TextAlign::Left,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresentationGateway: Send + Sync {
    async fn check_caller_role(&self) -> Result<CallerRole, GatewayError>;

    /// Whether a scene is open to hold annotations.
    async fn scene_ready(&self) -> Result<bool, GatewayError>;

    async fn display_anchor(&self) -> Result<Anchor, GatewayError>;

    /// Places `text` on the canvas, visible to the caller only.
    async fn place_annotation(
        &self,
        text: &str,
        anchor: Anchor,
        style: &AnnotationStyle,
    ) -> Result<(), GatewayError>;

    async fn show_transient_message(&self, text: &str, level: MessageLevel);
}

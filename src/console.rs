//! A stand-in host that writes to a terminal.

use crate::gateway::{
    Anchor, AnnotationStyle, CallerRole, GatewayError, MessageLevel, PresentationGateway,
};
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::warn;

pub struct ConsoleGateway<W> {
    out: Mutex<W>,
    role: CallerRole,
    scene_open: bool,
}

impl<W: AsyncWrite + Unpin + Send> ConsoleGateway<W> {
    pub fn new(out: W, role: CallerRole, scene_open: bool) -> Self {
        Self {
            out: Mutex::new(out),
            role,
            scene_open,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    async fn write(&self, text: &str) {
        let mut out = self.out.lock().await;
        let written = match out.write_all(text.as_bytes()).await {
            Ok(()) => out.flush().await,
            Err(err) => Err(err),
        };
        if let Err(err) = written {
            warn!(%err, "console write failed");
        }
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> PresentationGateway for ConsoleGateway<W> {
    async fn check_caller_role(&self) -> Result<CallerRole, GatewayError> {
        Ok(self.role)
    }

    async fn scene_ready(&self) -> Result<bool, GatewayError> {
        Ok(self.scene_open)
    }

    async fn display_anchor(&self) -> Result<Anchor, GatewayError> {
        if self.scene_open {
            Ok(Anchor::default())
        } else {
            Err(GatewayError::NoActiveScene)
        }
    }

    async fn place_annotation(
        &self,
        text: &str,
        anchor: Anchor,
        _style: &AnnotationStyle,
    ) -> Result<(), GatewayError> {
        if !self.scene_open {
            return Err(GatewayError::NoActiveScene);
        }
        self.write(&format!("@ ({}, {})\n{}\n\n", anchor.x, anchor.y, text))
            .await;
        Ok(())
    }

    async fn show_transient_message(&self, text: &str, level: MessageLevel) {
        self.write(&format!("[{}] {}\n", level, text)).await;
    }
}

//! Runs one trigger from permission check to presentation.

use crate::chunk::chunk_message;
use crate::config::RollerConfig;
use crate::error::ActionError;
use crate::gateway::{Anchor, CallerRole, GatewayError, MessageLevel, PresentationGateway};
use crate::roll::{DefaultRoller, Report, RollContext, Roller, SimpleStringifier};
use crate::trigger::Trigger;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub const DENIED_MESSAGE: &str = "Only the GM can use this roller.";
pub const NO_SCENE_MESSAGE: &str = "Open a scene first to place the GM-only note.";
pub const PLACED_MESSAGE: &str = "GM-only roll created.";

/// How a computed roll reached the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    /// Placed on the canvas as an annotation.
    Placed,
    /// Placement failed; the roll was shown as notifications instead.
    Fallback(GatewayError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub report: Report,
    pub presentation: Presentation,
}

pub struct Dispatcher {
    gateway: Arc<dyn PresentationGateway>,
    config: RollerConfig,
}

impl Dispatcher {
    pub fn new(gateway: Arc<dyn PresentationGateway>, config: RollerConfig) -> Self {
        Self { gateway, config }
    }

    /// Runs `trigger` on its own task with a freshly seeded roller.
    pub fn spawn(self: &Arc<Self>, trigger: Trigger) -> JoinHandle<Result<Outcome, ActionError>> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.run(trigger, DefaultRoller::from_entropy()).await })
    }

    /// Checks permission, rolls the preset and presents the result.
    ///
    /// Every failure before presentation short-circuits. A failed placement
    /// does not: it is reported as [`Presentation::Fallback`].
    pub async fn run<R: Roller + Send>(
        &self,
        trigger: Trigger,
        roller: R,
    ) -> Result<Outcome, ActionError> {
        let preset = trigger.preset;
        debug!(%preset, level_bonus = trigger.level_bonus, "trigger received");

        self.require_privileged().await?;
        if self.config.verbose_toasts {
            self.toast(&format!("{} clicked", preset.name()), MessageLevel::Info)
                .await;
            self.toast(&format!("Role: {}", CallerRole::Privileged), MessageLevel::Info)
                .await;
        }
        if self.config.strict_scene_check {
            self.require_scene().await?;
        }

        let mut ctx = RollContext::new_bounded(self.config.max_rolls, roller);
        let package = match preset.roll(&mut ctx, trigger.level_bonus) {
            Ok(package) => package,
            Err(err) => {
                warn!(%preset, %err, "roll failed");
                self.toast(&format!("Roll failed: {}", err), MessageLevel::Warning)
                    .await;
                return Err(err.into());
            }
        };
        info!(
            %preset,
            dice = ctx.rolls(),
            hp = package.hp.total(),
            atk_total = package.attack.total(),
            "roll computed"
        );
        let report = SimpleStringifier::new().stringify(&package);

        let anchor = self.anchor(&mut ctx).await;
        let presentation = self.present(&report, anchor).await;
        Ok(Outcome {
            report,
            presentation,
        })
    }

    async fn require_privileged(&self) -> Result<(), ActionError> {
        let role = match self.gateway.check_caller_role().await {
            Ok(role) => role,
            Err(err) => {
                warn!(%err, "role check failed");
                return Err(err.into());
            }
        };
        debug!(%role, "caller role");
        if role != CallerRole::Privileged {
            warn!(%role, "roll refused");
            self.toast(DENIED_MESSAGE, MessageLevel::Warning).await;
            return Err(ActionError::PermissionDenied);
        }
        Ok(())
    }

    async fn require_scene(&self) -> Result<(), ActionError> {
        match self.gateway.scene_ready().await {
            Ok(true) => return Ok(()),
            Ok(false) => debug!("no scene open"),
            Err(err) => debug!(%err, "scene check failed"),
        }
        warn!("strict scene check failed, not rolling");
        self.toast(NO_SCENE_MESSAGE, MessageLevel::Warning).await;
        Err(ActionError::NoActiveContext)
    }

    async fn anchor<R: Roller + Send>(&self, ctx: &mut RollContext<R>) -> Anchor {
        let base = match self.gateway.display_anchor().await {
            Ok(anchor) => anchor,
            Err(err) => {
                debug!(%err, "no display anchor, using origin");
                Anchor::default()
            }
        };
        let radius = self.config.anchor_jitter;
        base.offset(ctx.jitter(radius), ctx.jitter(radius))
    }

    async fn present(&self, report: &Report, anchor: Anchor) -> Presentation {
        let text = report.text();
        let placed = self
            .gateway
            .place_annotation(&text, anchor, &self.config.annotation_style)
            .await;

        match placed {
            Ok(()) => {
                info!(x = anchor.x, y = anchor.y, "annotation placed");
                self.toast(PLACED_MESSAGE, MessageLevel::Success).await;
                if self.config.verbose_toasts {
                    self.toast_chunked(&report.summary(), MessageLevel::Success)
                        .await;
                }
                Presentation::Placed
            }
            Err(err) => {
                warn!(%err, "annotation placement failed, falling back to notifications");
                self.toast(NO_SCENE_MESSAGE, MessageLevel::Warning).await;
                self.toast_chunked(&report.summary(), MessageLevel::Info).await;
                Presentation::Fallback(err)
            }
        }
    }

    async fn toast(&self, text: &str, level: MessageLevel) {
        self.gateway.show_transient_message(text, level).await;
    }

    async fn toast_chunked(&self, text: &str, level: MessageLevel) {
        let chunks = chunk_message(text, self.config.message_limit());
        debug!(chunks = chunks.len(), %level, "showing message");
        for chunk in &chunks {
            self.toast(chunk, level).await;
        }
    }
}

use crate::channels::simulator::DeliverySimulator;
use crate::domain::notification::{DemoMode, InboxEntry, Notification, SendRequest};
use crate::domain::routing_decision::{RoutingDecision, RoutingRequest};
use crate::repo::inbox_repo::InboxRepo;
use crate::router::strategy::RoutingEngine;
use crate::scoring::retry_score::{compute_retry_score, retry_score_to_fail_prob};
use crate::service::delivery_orchestrator::{run_delivery, DeliveryPlan};
use anyhow::Result;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct RoutingPreview {
    pub event_type: String,
    pub intended_channel_override: Option<String>,
    pub retry_score: u8,
    pub retry_percentage: f64,
    pub fail_prob: f64,
    pub decision: RoutingDecision,
}

#[derive(Clone)]
pub struct NotificationService {
    pub engine: RoutingEngine,
    pub simulator: DeliverySimulator,
    pub inbox_repo: InboxRepo,
    pub final_fallback: String,
    pub default_event_type: String,
    pub inbox_offset: chrono::FixedOffset,
}

impl NotificationService {
    pub fn preview(&self, event_type: &str, intended_channel_override: Option<&str>) -> RoutingPreview {
        let catalog = &self.engine.catalog;
        let retry_score = compute_retry_score(catalog, event_type);
        let intended_channels = catalog.intended_channels(event_type);
        let decision = self.engine.compute_routing_strategy(&RoutingRequest {
            event_type,
            intended_channels: Some(intended_channels),
            intended_channel_override: normalize_override(intended_channel_override),
            force_final_fallback: &self.final_fallback,
        });

        RoutingPreview {
            event_type: event_type.to_string(),
            intended_channel_override: intended_channel_override.map(str::to_string),
            retry_score,
            retry_percentage: catalog.retry_percentage(event_type),
            fail_prob: retry_score_to_fail_prob(retry_score),
            decision,
        }
    }

    pub fn route_and_simulate(
        &self,
        event_type: &str,
        demo_mode: Option<&str>,
        intended_channel_override: Option<&str>,
    ) -> Notification {
        let mut rng = rand::thread_rng();
        self.route_and_simulate_with(&mut rng, event_type, demo_mode, intended_channel_override)
    }

    pub fn route_and_simulate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        event_type: &str,
        demo_mode: Option<&str>,
        intended_channel_override: Option<&str>,
    ) -> Notification {
        let preview = self.preview(event_type, intended_channel_override);
        let plan = DeliveryPlan {
            primary: &preview.decision.primary,
            fallbacks: &preview.decision.fallbacks,
            final_fallback: &self.final_fallback,
            fail_prob: preview.fail_prob,
            force_primary_failure: DemoMode::parse(demo_mode) == Some(DemoMode::ForcePrimaryFail),
        };
        let outcome = run_delivery(&plan, &self.simulator, rng);

        tracing::info!(
            "notification routed event_type={} primary={} delivered_via={} attempts={} retry_score={}",
            event_type,
            preview.decision.primary,
            outcome.delivered_via,
            outcome.attempts.len(),
            preview.retry_score
        );

        Notification {
            notification_id: Uuid::new_v4(),
            event_type: preview.event_type,
            primary_channel: preview.decision.primary,
            intended_channel_override: preview.intended_channel_override,
            retry_score: preview.retry_score,
            retry_percentage: preview.retry_percentage,
            routing_order: preview.decision.ranked_channels,
            delivered_via: outcome.delivered_via,
            attempts: outcome.attempts,
        }
    }

    pub async fn send(&self, req: SendRequest) -> Result<Notification> {
        let event_type = req
            .event_type
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| self.default_event_type.clone());
        let notification = self.route_and_simulate(
            &event_type,
            req.demo_mode.as_deref(),
            req.intended_channel.as_deref(),
        );

        let now = chrono::Utc::now().with_timezone(&self.inbox_offset);
        self.inbox_repo
            .append(InboxEntry::from_notification(&notification, now))
            .await?;
        Ok(notification)
    }
}

fn normalize_override(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

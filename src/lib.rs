pub mod config;
pub mod domain {
    pub mod notification;
    pub mod routing_decision;
    pub mod stats;
}
pub mod channels {
    pub mod simulator;
}
pub mod http {
    pub mod handlers {
        pub mod inbox;
        pub mod notifications;
        pub mod ops;
        pub mod routing;
    }
}
pub mod metrics {
    pub mod channel_stats;
}
pub mod repo {
    pub mod inbox_repo;
}
pub mod router {
    pub mod strategy;
}
pub mod scoring {
    pub mod engine;
    pub mod reliability;
    pub mod retry_score;
    pub mod types;
}
pub mod service {
    pub mod delivery_orchestrator;
    pub mod notification_service;
}

use axum::routing::{get, post};
use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub notification_service: service::notification_service::NotificationService,
    pub inbox_repo: repo::inbox_repo::InboxRepo,
}

impl AppState {
    pub fn build(cfg: &config::AppConfig, catalog: domain::stats::StatsCatalog) -> Self {
        let inbox_repo = repo::inbox_repo::InboxRepo::new(&cfg.inbox_path, &cfg.trash_path);
        let notification_service = service::notification_service::NotificationService {
            engine: router::strategy::RoutingEngine::new(std::sync::Arc::new(catalog)),
            simulator: channels::simulator::DeliverySimulator::new(&cfg.final_fallback_channel),
            inbox_repo: inbox_repo.clone(),
            final_fallback: cfg.final_fallback_channel.clone(),
            default_event_type: cfg.default_event_type.clone(),
            inbox_offset: cfg.inbox_offset(),
        };

        Self {
            notification_service,
            inbox_repo,
        }
    }
}

pub fn app(state: AppState) -> Router {
    use crate::http::handlers::{inbox, notifications, ops, routing};

    Router::new()
        .route("/health", get(ops::health))
        .route("/ops/liveness", get(ops::liveness))
        .route("/ops/readiness", get(ops::readiness))
        .route("/send", post(notifications::send))
        .route("/routing/:event_type", get(routing::routing_preview))
        .route("/inbox", get(inbox::list_inbox))
        .route("/clear_inbox", post(inbox::clear_inbox))
        .route("/trash", get(inbox::list_trash))
        .route("/empty_trash", post(inbox::empty_trash))
        .route("/delete_message", post(inbox::delete_message))
        .route("/restore_message", post(inbox::restore_message))
        .with_state(state)
}

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request};
use axum::routing::get;
use axum::Router;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::KeyExtractor;
use tower_governor::{GovernorError, GovernorLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::constants::{GLOBAL_RATE_LIMIT_BURST, GLOBAL_RATE_LIMIT_RPS};
use crate::handlers;
use crate::state::AppState;

/// Rate-limit key: the peer address, or the client address reported by a
/// trusted reverse proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClientIpKeyExtractor {
    trust_proxy_headers: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.trust_proxy_headers {
            if let Some(ip) = forwarded_client_ip(req.headers()) {
                return Ok(ip);
            }
        }

        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ci| ci.0.ip())
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

fn forwarded_client_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|hv| hv.to_str().ok())
        .and_then(|s| {
            s.split(',')
                .rev()
                .find_map(|part| part.trim().parse::<IpAddr>().ok())
        })
}

/// Application routes without the outer rate-limit and tracing layers.
pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/config.js", get(handlers::config::config_js))
        .route("/healthz", get(handlers::health::healthz))
        .with_state(state)
}

pub(crate) fn build_router(state: AppState) -> Router {
    let key_extractor = ClientIpKeyExtractor {
        trust_proxy_headers: state.trust_proxy_headers,
    };

    let governor = GovernorLayer {
        config: Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(key_extractor)
                .per_second(GLOBAL_RATE_LIMIT_RPS)
                .burst_size(GLOBAL_RATE_LIMIT_BURST)
                .finish()
                .expect("governor config must build"),
        ),
    };

    routes(state).layer(governor).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}

//! Request logging middleware
//!
//! One INFO span per request carrying method and path; the response line
//! records status and latency. 5xx responses are additionally logged at ERROR.

use std::time::Duration;

use axum::{body::Body, http::Request};
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{Level, Span};

type MakeSpan = fn(&Request<Body>) -> Span;
type OnFailure = fn(ServerErrorsFailureClass, Duration, &Span);

/// Create request logging middleware
pub fn logging_layer(
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpan, (), DefaultOnResponse, (), (), OnFailure>
{
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeSpan)
        .on_request(())
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_body_chunk(())
        .on_eos(())
        .on_failure(log_failure as OnFailure)
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn log_failure(class: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    tracing::error!(
        latency_ms = latency.as_millis() as u64,
        "request failed: {}",
        class
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_span_is_created() {
        let request = Request::builder()
            .uri("/questions?page=2")
            .body(Body::empty())
            .unwrap();
        let span = request_span(&request);
        assert!(span.is_disabled() || span.metadata().is_some());
    }
}

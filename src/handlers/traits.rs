use async_trait::async_trait;
use axum::extract::Request;
use axum::response::Response;

/// A request responder in the redirect chain
///
/// Every call produces exactly one response, either directly or by
/// delegating the unchanged request to another handler.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, req: Request) -> Response;
}


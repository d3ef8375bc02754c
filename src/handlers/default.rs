use async_trait::async_trait;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::traits::Handler;

/// Terminal responder at the end of the chain
///
/// Answers every request with a fixed status and plain-text body and never
/// delegates.
#[derive(Debug, Clone)]
pub struct DefaultHandler {
    status: StatusCode,
    body: String,
}

impl DefaultHandler {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl Default for DefaultHandler {
    fn default() -> Self {
        Self::new(StatusCode::OK, "Hello, world!\n")
    }
}

#[async_trait]
impl Handler for DefaultHandler {
    async fn handle(&self, _req: Request) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body.clone(),
        )
            .into_response()
    }
}

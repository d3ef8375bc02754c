use async_trait::async_trait;
use axum::extract::Request;
use axum::http::{self, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

use super::traits::Handler;
use crate::mapping::RedirectTable;

/// One link of the redirect chain
///
/// Owns its lookup table and the next handler. A request whose target is in
/// the table gets a `301 Moved Permanently`; anything else is passed on to
/// the fallback untouched.
pub struct RedirectHandler {
    table: RedirectTable,
    fallback: Box<dyn Handler>,
}

impl RedirectHandler {
    pub fn new(table: RedirectTable, fallback: Box<dyn Handler>) -> Self {
        Self { table, fallback }
    }

    pub fn table(&self) -> &RedirectTable {
        &self.table
    }

    /// Lookup-only half of [`Handler::handle`]: `Some` on a table hit
    pub fn attempt<B>(&self, req: &http::Request<B>) -> Option<Response> {
        let target = request_target(req);
        let url = self.table.get(target)?;
        debug!(path = target, location = url, "Redirect matched");
        Some(moved_permanently(target, url))
    }
}

#[async_trait]
impl Handler for RedirectHandler {
    async fn handle(&self, req: Request) -> Response {
        match self.attempt(&req) {
            Some(response) => response,
            None => self.fallback.handle(req).await,
        }
    }
}

/// Raw path and query of the request, exactly as received
pub(crate) fn request_target<B>(req: &http::Request<B>) -> &str {
    let uri = req.uri();
    uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str())
}

fn moved_permanently(path: &str, url: &str) -> Response {
    match HeaderValue::from_str(url) {
        Ok(location) => {
            (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
        }
        Err(e) => {
            error!(path, url, error = %e, "Redirect target is not a valid Location header");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

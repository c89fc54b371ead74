//! Dev Server Module
//! Blocking tiny_http loop over the route table.

use tiny_http::{Header, Response, Server};
use tracing::{error, info};

use super::routes;

/// Helper to create an HTTP header, returning None if the bytes are invalid
fn content_type_header(value: &str) -> Option<Header> {
    Header::from_bytes(&b"Content-Type"[..], value.as_bytes()).ok()
}

/// Serve the route table forever on `addr` (for example `127.0.0.1:5000`).
pub fn serve(addr: &str) -> anyhow::Result<()> {
    let server =
        Server::http(addr).map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    info!("listening on http://{addr}");

    for request in server.incoming_requests() {
        let path = request.url().to_string();
        match routes::dispatch(&path) {
            Ok(page) => {
                info!(%path, status = page.status, "served");
                let mut response =
                    Response::from_string(page.body).with_status_code(page.status);
                if let Some(header) = content_type_header(page.content_type) {
                    response = response.with_header(header);
                }
                let _ = request.respond(response);
            }
            Err(e) => {
                error!(%path, "page render failed: {e}");
                let _ = request
                    .respond(Response::from_string("internal server error").with_status_code(500));
            }
        }
    }
    Ok(())
}

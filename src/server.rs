use std::{io::Read, sync::Arc, thread};

use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::{
    api::{self, CalcResponse},
    error::ServerError,
};

/// Path of the calculator endpoint.
pub const CALC_PATH: &str = "/api/calc";
/// Number of worker threads when none is configured.
pub const DEFAULT_WORKERS: usize = 4;
/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Binds `addr` and serves the calculator endpoint until the process exits.
///
/// # Errors
/// Returns a [`ServerError`] if the address cannot be bound or a worker
/// thread fails.
pub fn serve(addr: &str, workers: usize) -> Result<(), ServerError> {
    let server = Server::http(addr).map_err(|e| ServerError::Bind { addr:    addr.to_string(),
                                                                     details: e.to_string(), })?;

    tracing::info!(addr, workers, "listening on http://{addr}{CALC_PATH}");
    run(&Arc::new(server), workers)
}

/// Serves requests from `server` on `workers` threads.
///
/// Every worker takes requests from the shared server until it is unblocked
/// or the server fails. Returns once all workers have stopped.
///
/// # Errors
/// Returns a [`ServerError`] if a worker cannot be started or panics.
pub fn run(server: &Arc<Server>, workers: usize) -> Result<(), ServerError> {
    let handles = (0..workers.max(1)).map(|id| {
                                         let server = Arc::clone(server);
                                         thread::Builder::new().name(format!("sandcalc-worker-{id}"))
                                                               .spawn(move || worker(&server))
                                     })
                                     .collect::<Result<Vec<_>, _>>()
                                     .map_err(ServerError::Spawn)?;

    for handle in handles {
        handle.join().map_err(|_| ServerError::WorkerPanicked)?;
    }

    Ok(())
}

fn worker(server: &Server) {
    loop {
        match server.recv() {
            Ok(request) => handle(request),
            Err(e) => {
                tracing::debug!(error = %e, "worker stopped");
                break;
            },
        }
    }
}

/// Reads, routes and answers one request.
fn handle(mut request: Request) {
    let mut body = Vec::new();
    if let Err(e) = request.as_reader().take(MAX_BODY_BYTES + 1).read_to_end(&mut body) {
        tracing::warn!(error = %e, "failed to read request body");
    }

    let (status, response) = route(request.method(), request.url(), &body);
    tracing::debug!(method = %request.method(), url = request.url(), status, "handled request");

    let json = match serde_json::to_string(&response) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize response");
            return;
        },
    };

    let mut reply = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        reply.add_header(header);
    }

    if let Err(e) = request.respond(reply) {
        tracing::warn!(error = %e, "failed to send response");
    }
}

/// Maps a request to its status code and response document.
///
/// `POST /api/calc` is answered by [`api::respond`]. Other methods on that path
/// get 405, every other path gets 404, and a body over [`MAX_BODY_BYTES`]
/// gets 413. A query string is ignored.
///
/// # Example
/// ```
/// use sandcalc::server::route;
/// use tiny_http::Method;
///
/// let (status, response) = route(&Method::Post, "/api/calc", br#"{"expression": "5!"}"#);
/// assert_eq!(status, 200);
/// assert_eq!(response.result.unwrap().to_string(), "120");
///
/// assert_eq!(route(&Method::Get, "/api/calc", b"").0, 405);
/// assert_eq!(route(&Method::Post, "/", b"").0, 404);
///
/// let oversized = vec![b' '; 65 * 1024];
/// assert_eq!(route(&Method::Post, "/api/calc", &oversized).0, 413);
/// ```
#[must_use]
pub fn route(method: &Method, url: &str, body: &[u8]) -> (u16, CalcResponse) {
    let path = url.split_once('?').map_or(url, |(path, _)| path);

    if path != CALC_PATH {
        return (404, CalcResponse::failure("Not found."));
    }
    if *method != Method::Post {
        return (405, CalcResponse::failure("Method not allowed."));
    }
    if u64::try_from(body.len()).map_or(true, |len| len > MAX_BODY_BYTES) {
        tracing::debug!(limit = MAX_BODY_BYTES, "request body too large");
        return (413, CalcResponse::failure("Request body too large."));
    }

    api::respond(body)
}

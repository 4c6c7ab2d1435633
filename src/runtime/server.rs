//! Hyper server loop and the framework/record conversion layer.

use crate::controller::{ApiError, Controller};
use crate::http::{error_body, HttpRequest, HttpResponse, ResponseBody};
use crate::runtime::AppConfig;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

/// Scorecard HTTP server.
///
/// Owns the listener loop and converts between hyper types and the
/// crate-level request/response records; all decisions live in the controller.
pub struct Server {
    config: AppConfig,
    controller: Arc<dyn Controller>,
}

impl Server {
    /// Create a new server around a controller.
    pub fn new(config: AppConfig, controller: Arc<dyn Controller>) -> Self {
        Self { config, controller }
    }

    /// Start the HTTP server.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.config.bind_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!("scorecard server listening on {}", addr);

        let controller = self.controller;
        let config = self.config;

        loop {
            let (stream, remote_addr) = listener.accept().await?;
            let io = TokioIo::new(stream);

            let controller = controller.clone();
            let config = config.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req| {
                    let controller = controller.clone();
                    let config = config.clone();
                    async move { route(req, controller, config, remote_addr).await }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    error!("Error serving connection: {:?}", err);
                }
            });
        }
    }
}

/// Route an incoming HTTP request.
async fn route(
    req: Request<Incoming>,
    controller: Arc<dyn Controller>,
    config: AppConfig,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let path = req.uri().path().to_string();
    let method = req.method().clone();

    debug!("Handling request: {} {} from {}", method, path, remote_addr);

    let response = match (method.as_str(), path.as_str()) {
        ("GET", "/") => HttpResponse::success(json!({ "data": "Ok" })),
        ("POST", "/scorecard.pdf") => {
            match parse_request(req, config.max_body_size).await {
                Ok(request) => controller.handle(request).await,
                Err(err) => {
                    warn!("Failed to read request body: {}", err);
                    err.into_response()
                }
            }
        }
        _ => HttpResponse::not_found(error_body("Not found")),
    };

    if response.status_code.is_server_error() {
        error!("{} {} failed with {}", path, remote_addr, response.status_code.0);
    }

    Ok(build_response(response))
}

/// Convert a hyper request into an [`HttpRequest`].
///
/// Unreadable and malformed bodies degrade to an empty body; only an
/// oversized body is reported to the caller.
async fn parse_request(
    req: Request<Incoming>,
    max_body_size: usize,
) -> Result<HttpRequest, ApiError> {
    let bytes = match req.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Ok(HttpRequest::empty()),
    };

    if bytes.len() > max_body_size {
        return Err(ApiError::InvalidParam("Request body too large".to_string()));
    }

    Ok(HttpRequest::from_json_bytes(&bytes))
}

/// Build a hyper response from an [`HttpResponse`].
fn build_response(response: HttpResponse) -> Response<Full<Bytes>> {
    let status = hyper::StatusCode::from_u16(response.status_code.0).unwrap_or_else(|_| {
        warn!(
            "Invalid status code {}, falling back to 500 Internal Server Error",
            response.status_code.0
        );
        hyper::StatusCode::INTERNAL_SERVER_ERROR
    });

    let mut builder = Response::builder().status(status);

    let is_json = matches!(response.body, ResponseBody::Json(_));
    let has_content_type = response
        .headers
        .keys()
        .any(|key| key.eq_ignore_ascii_case("content-type"));

    for (name, value) in response.headers {
        builder = builder.header(name, value);
    }
    if is_json && !has_content_type {
        builder = builder.header("Content-Type", "application/json");
    }

    let body = match response.body {
        ResponseBody::Pdf(bytes) => bytes,
        ResponseBody::Json(value) => Bytes::from(value.to_string()),
    };

    builder
        .body(Full::new(body))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}

//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method
//! validation, route matching, and dispatching.

use crate::config::AppState;
use crate::handler::resolver::Outcome;
use crate::handler::{assets, pages, resolver};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    let mut entry =
        AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path.clone());
    entry.http_version = version_label(req.version()).to_string();
    entry.referer = header_value(&req, "referer");
    entry.user_agent = header_value(&req, "user-agent");

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    // 1. Check HTTP method
    // 2. Check declared body size
    // 3. Dispatch on path
    let response = if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        resp
    } else if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        resp
    } else {
        let ctx = RequestContext {
            path: &path,
            is_head,
            if_none_match: header_value(&req, "if-none-match"),
        };
        route_request(&ctx, &state).await
    };

    if state.config.logging.access_log {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Route request based on path and configuration
async fn route_request(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let routes = &state.config.routes;

    // 0. Health check endpoints (highest priority, always fast)
    if routes.health.enabled
        && (ctx.path == routes.health.liveness_path || ctx.path == routes.health.readiness_path)
    {
        return http::build_health_response("ok");
    }

    // 1. Favicon and friends bypass the resolver
    if routes.favicon_paths.iter().any(|p| ctx.path == p) {
        return assets::serve_asset(ctx, &routes.asset_dir).await;
    }

    // 2. Everything else is a redirect candidate
    match resolver::resolve(ctx.path, &state.config.redirect) {
        Outcome::ServeLanding => http::build_html_response(pages::landing_page(), ctx.is_head),
        Outcome::ServeError => {
            logger::log_warning(&format!("Invalid redirect target: {}", ctx.path));
            http::build_html_response(pages::error_page(), ctx.is_head)
        }
        Outcome::RedirectTo(url) => {
            http::build_redirect_response(&url, state.config.redirect.status_code)
        }
    }
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_state() -> Arc<AppState> {
        let cfg = Config::load_from("nonexistent-config").unwrap();
        Arc::new(AppState::new(cfg))
    }

    fn ctx(path: &str) -> RequestContext<'_> {
        RequestContext {
            path,
            is_head: false,
            if_none_match: None,
        }
    }

    #[test]
    fn test_check_http_method() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());

        let options = check_http_method(&Method::OPTIONS, false).unwrap();
        assert_eq!(options.status(), 204);

        let post = check_http_method(&Method::POST, false).unwrap();
        assert_eq!(post.status(), 405);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let state = test_state();
        let resp = route_request(&ctx("/healthz"), &state).await;
        assert_eq!(resp.status(), 200);
        let resp = route_request(&ctx("/readyz"), &state).await;
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn test_root_serves_landing_page() {
        let state = test_state();
        let resp = route_request(&ctx("/"), &state).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_invalid_target_serves_error_page() {
        let state = test_state();
        let resp = route_request(&ctx("/nodot"), &state).await;
        // The error page is delivered as a normal page, not a fault
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_valid_target_redirects() {
        let state = test_state();
        let resp = route_request(&ctx("/example.com/article"), &state).await;
        assert_eq!(resp.status(), 302);
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "https://archive.today/submit/?url=https%3A%2F%2Fexample.com%2Farticle"
        );
    }

    #[tokio::test]
    async fn test_favicon_bypasses_resolver() {
        let state = test_state();
        // favicon.svg ships with the repo; favicon.ico does not
        let resp = route_request(&ctx("/favicon.svg"), &state).await;
        assert_eq!(resp.status(), 200);
        let resp = route_request(&ctx("/favicon.ico"), &state).await;
        assert_eq!(resp.status(), 404);
    }
}

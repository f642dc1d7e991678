//! Static asset passthrough module
//!
//! Serves favicon-style assets from the configured asset directory with
//! `ETag` based conditional requests.

use crate::handler::router::RequestContext;
use crate::http::cache::CachePolicy;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// How long clients may cache assets (one day)
const ASSET_CACHE: CachePolicy = CachePolicy::Public(86_400);

/// Serve an asset for an allow-listed path
pub async fn serve_asset(ctx: &RequestContext<'_>, asset_dir: &str) -> Response<Full<Bytes>> {
    match load_asset(asset_dir, ctx.path).await {
        Some((data, content_type)) => build_asset_response(
            &data,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        None => http::build_404_response(),
    }
}

/// Load an asset by its request path
///
/// Only flat file names are accepted; the allow-listed favicon paths never
/// contain subdirectories, so anything else is treated as missing.
async fn load_asset(asset_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let name = path.trim_start_matches('/');
    if name.is_empty() || name.contains('/') || name.contains("..") {
        return None;
    }

    let file_path = Path::new(asset_dir).join(name);
    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read asset '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Build asset response with `ETag` support
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", data.len())
        .header("ETag", etag)
        .header("Cache-Control", ASSET_CACHE.to_header_value())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build asset response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}

//! Redirect target resolution module
//!
//! The core request transform: decides whether a request path maps to the
//! landing page, the error page, or a redirect into the archival service.

use crate::config::RedirectConfig;
use url::Url;

/// Transient view of an incoming request path.
///
/// `raw_target` is derived by stripping exactly one leading `/` from the
/// path; it is the article URL as the visitor typed it after our host.
#[derive(Debug, Clone, Copy)]
pub struct ParsedRequest<'a> {
    pub path: &'a str,
    pub raw_target: &'a str,
}

impl<'a> ParsedRequest<'a> {
    pub fn from_path(path: &'a str) -> Self {
        Self {
            path,
            raw_target: path.strip_prefix('/').unwrap_or(path),
        }
    }

    /// Whether the request addresses the site root.
    fn is_root(&self) -> bool {
        self.path.is_empty() || self.path == "/"
    }
}

/// Resolution outcome for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Serve the landing page.
    ServeLanding,
    /// Serve the invalid-target error page.
    ServeError,
    /// Redirect to the composed archival submission URL.
    RedirectTo(String),
}

/// Why a candidate target was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTarget {
    /// Nothing left after stripping the leading separator.
    Empty,
    /// No `.` anywhere, so the candidate cannot name a domain.
    MissingDomain,
    /// Rejected by the URL parser.
    Unparseable(url::ParseError),
}

impl std::fmt::Display for InvalidTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty target"),
            Self::MissingDomain => write!(f, "target has no domain separator"),
            Self::Unparseable(e) => write!(f, "target is not a valid URL: {e}"),
        }
    }
}

impl std::error::Error for InvalidTarget {}

/// Resolve a request path into an outcome.
///
/// Pure and synchronous; invalid targets are recovered here as
/// [`Outcome::ServeError`], never propagated.
pub fn resolve(path: &str, cfg: &RedirectConfig) -> Outcome {
    let req = ParsedRequest::from_path(path);

    if req.is_root() {
        return Outcome::ServeLanding;
    }

    match normalize_target(req.raw_target) {
        Ok(target) => Outcome::RedirectTo(submission_url(&target, cfg)),
        Err(_) => Outcome::ServeError,
    }
}

/// Validate a raw target and normalize it into an absolute URL.
///
/// Candidates without an explicit scheme default to `https://`. Everything
/// else (IDNA mapping, percent-encoding normalization, host validation) is
/// delegated to the WHATWG parser in the `url` crate.
pub fn normalize_target(raw: &str) -> Result<Url, InvalidTarget> {
    if raw.is_empty() {
        return Err(InvalidTarget::Empty);
    }
    if !raw.contains('.') {
        return Err(InvalidTarget::MissingDomain);
    }

    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    Url::parse(&candidate).map_err(InvalidTarget::Unparseable)
}

/// Compose the archival-service submission URL for a validated target.
///
/// The normalized target is percent-encoded by the query serializer, so the
/// embedded URL round-trips through a single percent-decode.
fn submission_url(target: &Url, cfg: &RedirectConfig) -> String {
    let mut submit = cfg.submit_endpoint.clone();
    submit
        .query_pairs_mut()
        .append_pair(&cfg.query_param, target.as_str());
    submit.into()
}

//! CORS Origin Gatekeeper
//!
//! Validates the declared origin of every inbound request and attaches the
//! CORS header set to every outbound response. Preflight `OPTIONS` requests
//! are answered directly, before routing, so that unregistered paths still
//! get a well-formed preflight response.

use std::sync::Arc;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Method, Request, Response, StatusCode},
};
use tower::{Layer, Service};

use crate::config::CorsSettings;

/// Methods advertised to the browser
const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS, PATCH";

/// Request headers the browser may send
const ALLOW_HEADERS: &str = "Accept, Accept-Language, Content-Language, Content-Type, \
    Authorization, X-Requested-With, X-Request-ID, X-HTTP-Method-Override, \
    Cache-Control, Pragma, Expires";

/// Response headers frontend scripts may read
const EXPOSE_HEADERS: &str = "Content-Type, Authorization, X-Request-ID, Cache-Control";

/// Preflight cache lifetime in seconds
const MAX_AGE: &str = "3600";

/// Origin allow-list plus fixed pattern rules.
///
/// Built once at startup from [`CorsSettings`]; immutable afterwards. The
/// exact-match list carries the production frontend and backend URLs, while
/// local development servers and Netlify deploys are matched by rule.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    exact_origins: Arc<[String]>,
}

impl CorsPolicy {
    /// Create a policy from settings
    pub fn new(settings: &CorsSettings) -> Self {
        Self {
            exact_origins: settings.allowed_origins.clone().into(),
        }
    }

    /// Decide whether a declared origin may talk to this API.
    ///
    /// The checks run in order, each independently testable:
    /// 1. exact allow-list lookup
    /// 2. `http://localhost` / `http://127.0.0.1` prefix, any port
    /// 3. `https://` Netlify deploy (`.netlify.app` anywhere in the origin)
    ///
    /// An absent origin is never allowed. Pure predicate, no side effects.
    pub fn is_origin_allowed(&self, origin: Option<&str>) -> bool {
        let Some(origin) = origin else {
            return false;
        };

        if self.exact_origins.iter().any(|allowed| allowed == origin) {
            return true;
        }

        // Local development servers, with or without an explicit port
        if origin.starts_with("http://localhost") || origin.starts_with("http://127.0.0.1") {
            return true;
        }

        // Netlify preview and branch deploys, TLS only
        if origin.starts_with("https://") && origin.contains(".netlify.app") {
            return true;
        }

        false
    }

    /// Attach the full CORS header set to a response.
    ///
    /// An allowed origin is echoed back verbatim with credentials enabled.
    /// Anything else falls back to `*` without the credentials header:
    /// browsers reject a wildcard origin combined with credentials, so the
    /// fallback stays credential-free. Idempotent for a given origin.
    pub fn apply_cors_headers(&self, headers: &mut HeaderMap, origin: Option<&str>) {
        let echoed = origin
            .filter(|o| self.is_origin_allowed(Some(o)))
            .and_then(|o| HeaderValue::from_str(o).ok());

        match echoed {
            Some(value) => {
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    HeaderValue::from_static("true"),
                );
            }
            None => {
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                );
            }
        }

        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            HeaderValue::from_static(EXPOSE_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(MAX_AGE),
        );
    }
}

/// Layer that applies the origin gatekeeper to every request
#[derive(Clone)]
pub struct CorsGatekeeperLayer {
    policy: CorsPolicy,
}

impl CorsGatekeeperLayer {
    /// Create a gatekeeper layer from a policy
    pub fn new(policy: CorsPolicy) -> Self {
        Self { policy }
    }
}

impl<S> Layer<S> for CorsGatekeeperLayer {
    type Service = CorsGatekeeperMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsGatekeeperMiddleware {
            inner,
            policy: self.policy.clone(),
        }
    }
}

/// Middleware service that validates origins and emits CORS headers
#[derive(Clone)]
pub struct CorsGatekeeperMiddleware<S> {
    inner: S,
    policy: CorsPolicy,
}

impl<S> Service<Request<Body>> for CorsGatekeeperMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let policy = self.policy.clone();

        let origin = request
            .headers()
            .get(header::ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        // Preflight: synthesize the response here, for every path. The
        // router never sees OPTIONS requests, so unregistered paths are
        // covered too.
        if request.method() == Method::OPTIONS {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::OK;
            policy.apply_cors_headers(response.headers_mut(), origin.as_deref());
            return Box::pin(async move { Ok(response) });
        }

        Box::pin(async move {
            // Status and body pass through untouched, whatever they are;
            // error responses still need the headers or the browser masks
            // them as CORS failures.
            let mut response = inner.call(request).await?;
            policy.apply_cors_headers(response.headers_mut(), origin.as_deref());
            Ok(response)
        })
    }
}

/// Create the gatekeeper layer from settings
pub fn create_cors_layer(settings: &CorsSettings) -> CorsGatekeeperLayer {
    CorsGatekeeperLayer::new(CorsPolicy::new(settings))
}

//! Minimal request router
//!
//! Routes are `(pattern, method, handler)` entries tried in registration order.
//! A handler returning `Some` ends dispatch; `None` passes the request on to the
//! next matching handler, which makes handlers usable as middleware:
//!
//! ```ignore
//! let mut router = Router::<String, Env, Response<String>>::with_base(base);
//! router
//!     .all("/api/*", |request, env| Box::pin(async move {
//!         request.extensions_mut().insert(Caller::from(env));
//!         None
//!     }))?
//!     .get("/api/items/:id", |request, _| Box::pin(async move {
//!         let id = request.extensions().get::<RouteMatch>()?.param("id")?.to_string();
//!         Some(create_response(Some(&Item { id }), StatusCode::OK, HeaderMap::new()))
//!     }))?;
//!
//! let response = router.fetch(request, &env).await;
//! ```

mod pattern;

pub use pattern::{RouteMatch, UrlPattern};

use crate::error::{Error, Result};
use futures::future::BoxFuture;
use http::Request;
use std::sync::Arc;
use url::Url;

/// Route method matching every request method
const ALL: &str = "all";

/// Request handler
///
/// Receives the request (extensible through [`http::Extensions`]) and the extra
/// arguments passed to [`Router::fetch`].
pub type Handler<B, A, T> =
    Arc<dyn for<'a> Fn(&'a mut Request<B>, &'a A) -> BoxFuture<'a, Option<T>> + Send + Sync>;

struct Route<B, A, T> {
    pattern: UrlPattern,
    method: String,
    handler: Handler<B, A, T>,
}

/// Pattern-based request router
///
/// * `B` - request body type
/// * `A` - extra arguments handed to every handler (environment bindings, ...)
/// * `T` - handler output, usually a response
pub struct Router<B, A = (), T = http::Response<String>> {
    base: Option<Url>,
    routes: Vec<Route<B, A, T>>,
}

impl<B, A, T> Router<B, A, T> {
    /// Create a router whose patterns must all be full URLs
    pub fn new() -> Self {
        Self {
            base: None,
            routes: Vec::new(),
        }
    }

    /// Create a router resolving relative patterns and request URIs against `base`
    pub fn with_base(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| Error::PatternInvalid {
            pattern: base.to_string(),
            reason: format!("invalid base URL: {e}"),
        })?;
        Ok(Self {
            base: Some(base),
            routes: Vec::new(),
        })
    }

    /// Register a handler for a method, including custom ones
    ///
    /// Registering the same method and pattern again appends a handler that runs
    /// after this one.
    pub fn route<F>(&mut self, method: &str, pattern: &str, handler: F) -> Result<&mut Self>
    where
        F: for<'a> Fn(&'a mut Request<B>, &'a A) -> BoxFuture<'a, Option<T>>
            + Send
            + Sync
            + 'static,
    {
        let pattern = UrlPattern::new(pattern, self.base.as_ref())?;
        self.routes.push(Route {
            pattern,
            method: method.to_ascii_lowercase(),
            handler: Arc::new(handler),
        });
        Ok(self)
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no route is registered
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Dispatch a request
    ///
    /// Every route whose method and pattern match is tried in order. Before its
    /// handler runs, the route's [`RouteMatch`] is stored in the request
    /// extensions. Returns the first `Some` produced by a handler, or `None`.
    pub async fn fetch(&self, mut request: Request<B>, args: &A) -> Option<T> {
        let url = self.request_url(&request)?;
        let method = request.method().as_str().to_ascii_lowercase();

        for route in &self.routes {
            if route.method != method && route.method != ALL {
                continue;
            }
            let Some(route_match) = route.pattern.exec(&url) else {
                continue;
            };

            tracing::trace!(method = %method, path = url.path(), "route matched");
            request.extensions_mut().insert(route_match);

            if let Some(output) = (route.handler)(&mut request, args).await {
                return Some(output);
            }
        }

        None
    }

    /// Absolute URL of the request, resolving origin-form URIs against the base
    fn request_url(&self, request: &Request<B>) -> Option<Url> {
        let uri = request.uri().to_string();
        match Url::parse(&uri) {
            Ok(url) => Some(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self.base.as_ref()?.join(&uri).ok(),
            Err(e) => {
                tracing::debug!(uri = %uri, error = %e, "request URI not routable");
                None
            }
        }
    }
}

macro_rules! method_routes {
    ($($(#[$doc:meta])* $name:ident => $method:literal),* $(,)?) => {
        impl<B, A, T> Router<B, A, T> {
            $(
                $(#[$doc])*
                pub fn $name<F>(&mut self, pattern: &str, handler: F) -> Result<&mut Self>
                where
                    F: for<'a> Fn(&'a mut Request<B>, &'a A) -> BoxFuture<'a, Option<T>>
                        + Send
                        + Sync
                        + 'static,
                {
                    self.route($method, pattern, handler)
                }
            )*
        }
    };
}

method_routes! {
    /// Register a handler for every method
    all => "all",
    /// Register a GET handler
    get => "get",
    /// Register a POST handler
    post => "post",
    /// Register a PUT handler
    put => "put",
    /// Register a PATCH handler
    patch => "patch",
    /// Register a DELETE handler
    delete => "delete",
    /// Register a HEAD handler
    head => "head",
    /// Register an OPTIONS handler
    options => "options",
    /// Register a TRACE handler
    trace => "trace",
}

impl<B, A, T> Default for Router<B, A, T> {
    fn default() -> Self {
        Self::new()
    }
}

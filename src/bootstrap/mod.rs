//! Serverless entry point.
//!
//! The route table is defined for a long-lived process (`routes::app_router`),
//! but the hosting environment invokes one exported handler per request and
//! may reuse a warm execution context between invocations. `Bootstrap` bridges
//! the two: the router is built at most once per live context, every
//! invocation dispatches through the same instance, and overlapping first
//! invocations share a single in-flight initialization.

use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::header::CONTENT_TYPE;
use tokio::sync::OnceCell;
use tower::util::ServiceExt;
use tracing::info;

use crate::app_state::build_app_state;
use crate::errors::AppError;
use crate::routes::app_router;

/// Largest non-multipart body the capture middleware will buffer.
const MAX_BUFFERED_BODY: usize = 2 * 1024 * 1024;

/// Raw request body captured before extractor parsing, kept alongside the
/// parsed form for consumers that need the exact bytes (e.g. webhook
/// signature checks).
#[derive(Clone)]
pub struct RawBody(pub Bytes);

/// Where the route table comes from for this execution context.
///
/// `Bundled` is the production serverless deployment: the compiled router,
/// nothing else. `Dev` is local execution and adds the debug routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterSource {
    Bundled,
    Dev,
}

impl RouterSource {
    /// Read the mode signal once per process; later calls return the cached
    /// decision, so the mode can never change mid-context.
    pub fn detect() -> Self {
        static MODE: OnceLock<RouterSource> = OnceLock::new();
        *MODE.get_or_init(|| {
            Self::from_env_value(std::env::var("SHOWROOM_SERVERLESS").ok().as_deref())
        })
    }

    /// Truthy signal selects the bundled router; absent or anything else
    /// falls back to dev loading.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes") => {
                RouterSource::Bundled
            }
            _ => RouterSource::Dev,
        }
    }

    async fn load(self) -> Result<Router> {
        info!(source = ?self, "Building route table");
        let router = app_router().with_state(build_app_state());
        let router = match self {
            RouterSource::Bundled => router,
            RouterSource::Dev => router.merge(dev_routes()),
        };
        // body capture runs before any route extractor
        Ok(router.layer(middleware::from_fn(capture_body)))
    }
}

fn dev_routes() -> Router {
    Router::new().route(
        "/debug/build",
        get(|| async {
            Json(serde_json::json!({
                "version": env!("CARGO_PKG_VERSION"),
                "source": "dev",
            }))
        }),
    )
}

type RouterFuture = Pin<Box<dyn Future<Output = Result<Router>> + Send>>;

pub struct Bootstrap {
    loader: Box<dyn Fn() -> RouterFuture + Send + Sync>,
    router: OnceCell<Router>,
}

impl Bootstrap {
    /// Production constructor: loads whichever router the environment
    /// signal selected.
    pub fn from_env() -> Self {
        Self::with_loader(|| Box::pin(RouterSource::detect().load()))
    }

    /// One `Bootstrap` per simulated execution context; tests inject their
    /// own loader here.
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn() -> RouterFuture + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            router: OnceCell::new(),
        }
    }

    /// The cell is set only after the loader completed, and concurrent
    /// callers await the same in-flight load rather than starting another.
    async fn router(&self) -> Result<&Router> {
        self.router.get_or_try_init(|| (self.loader)()).await
    }

    /// Sole externally invoked operation: guarantee the route table exists,
    /// then dispatch. Initialization failure surfaces as `Err`; request
    /// handling failures come back as JSON error responses.
    pub async fn handle(&self, request: Request) -> Result<Response> {
        let router = self
            .router()
            .await
            .context("Route table initialization failed")?;
        router
            .clone()
            .oneshot(request)
            .await
            .map_err(|infallible| match infallible {})
    }
}

/// Process-wide bootstrap instance used by the exported handler.
pub fn bootstrap() -> &'static Bootstrap {
    static BOOTSTRAP: OnceLock<Bootstrap> = OnceLock::new();
    BOOTSTRAP.get_or_init(Bootstrap::from_env)
}

/// Buffer the request body and keep the raw bytes in extensions, unless the
/// request is multipart: those keep their stream untouched so the multipart
/// consumer reads it directly. The check is a deliberate substring match;
/// callers send unusual but working content-type values.
pub async fn capture_body(request: Request, next: Next) -> Response {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("multipart/form-data"));

    if is_multipart {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_BUFFERED_BODY).await {
        Ok(bytes) => bytes,
        Err(err) => return AppError::BodyParsingError(err.to_string()).into_response(),
    };

    let mut request = Request::from_parts(parts, Body::from(bytes.clone()));
    request.extensions_mut().insert(RawBody(bytes));
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use axum::extract::Extension;
    use axum::routing::post;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn empty_get(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn overlapping_invocations_register_routes_exactly_once() {
        let registrations = Arc::new(AtomicUsize::new(0));
        let counter = registrations.clone();

        let bootstrap = Arc::new(Bootstrap::with_loader(move || {
            let counter = counter.clone();
            Box::pin(async move {
                // widen the init window so invocations actually overlap
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Router::new().route("/", get(|| async { "ok" })))
            })
        }));

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let bootstrap = bootstrap.clone();
            tasks.push(tokio::spawn(async move {
                bootstrap.handle(empty_get("/")).await
            }));
        }

        for task in tasks {
            let response = task.await.unwrap().expect("dispatch should succeed");
            assert_eq!(response.status(), http::StatusCode::OK);
        }

        assert_eq!(registrations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn initialization_failure_propagates_to_the_caller() {
        let bootstrap = Bootstrap::with_loader(|| Box::pin(async { Err(anyhow!("no module")) }));

        let err = bootstrap
            .handle(empty_get("/"))
            .await
            .expect_err("init failure must fail the invocation");

        assert!(err.to_string().contains("Route table initialization failed"));
    }

    #[tokio::test]
    async fn multipart_body_is_not_consumed_by_the_capture_middleware() {
        let payload = "--XBOUNDARY\r\n\
            content-disposition: form-data; name=\"file\"; filename=\"a.txt\"\r\n\
            \r\nhello\r\n--XBOUNDARY--\r\n";

        let app = Router::new()
            .route(
                "/upload",
                post(|request: Request| async move {
                    assert!(request.extensions().get::<RawBody>().is_none());
                    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
                        .await
                        .unwrap();
                    // the full stream is still readable downstream
                    format!("{}", bytes.len())
                }),
            )
            .layer(middleware::from_fn(capture_body));

        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                CONTENT_TYPE,
                "multipart/form-data; boundary=XBOUNDARY",
            )
            .body(Body::from(payload))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), http::StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes, payload.len().to_string().as_bytes());
    }

    #[tokio::test]
    async fn json_body_is_parsed_and_raw_bytes_are_preserved() {
        let raw_payload = r#"{"make":"Audi","year":2020}"#;

        let app = Router::new()
            .route(
                "/echo",
                post(
                    |Extension(raw): Extension<RawBody>, Json(parsed): Json<Value>| async move {
                        assert_eq!(parsed["make"], "Audi");
                        String::from_utf8(raw.0.to_vec()).unwrap()
                    },
                ),
            )
            .layer(middleware::from_fn(capture_body));

        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(raw_payload))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), http::StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes, raw_payload.as_bytes());
    }

    #[tokio::test]
    async fn typed_error_keeps_its_status_and_message() {
        let app = Router::new().route(
            "/missing",
            get(|| async { Err::<(), AppError>(AppError::NotFound("Not Found".into())) }),
        );

        let response = app.oneshot(empty_get("/missing")).await.unwrap();
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "message": "Not Found" }));
    }

    #[tokio::test]
    async fn untyped_error_becomes_a_generic_500() {
        let app = Router::new().route(
            "/broken",
            get(|| async {
                crate::api::util::json::to_json::<Value>(Err(anyhow!("connection reset")))
            }),
        );

        let response = app.oneshot(empty_get("/broken")).await.unwrap();
        assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "message": "Internal Server Error" }));
    }

    #[test]
    fn mode_signal_selects_the_loading_path_deterministically() {
        assert_eq!(RouterSource::from_env_value(None), RouterSource::Dev);
        assert_eq!(RouterSource::from_env_value(Some("")), RouterSource::Dev);
        assert_eq!(RouterSource::from_env_value(Some("0")), RouterSource::Dev);
        assert_eq!(
            RouterSource::from_env_value(Some("1")),
            RouterSource::Bundled
        );
        assert_eq!(
            RouterSource::from_env_value(Some("TRUE")),
            RouterSource::Bundled
        );
        assert_eq!(
            RouterSource::from_env_value(Some(" yes ")),
            RouterSource::Bundled
        );
    }

    #[tokio::test]
    async fn cold_contexts_can_select_different_sources() {
        // two bootstraps simulate two cold execution contexts
        let bundled = Bootstrap::with_loader(|| Box::pin(RouterSource::Bundled.load()));
        let dev = Bootstrap::with_loader(|| Box::pin(RouterSource::Dev.load()));

        let bundled_response = bundled.handle(empty_get("/debug/build")).await.unwrap();
        let dev_response = dev.handle(empty_get("/debug/build")).await.unwrap();

        // debug routes exist only in the dev source
        assert_eq!(bundled_response.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(dev_response.status(), http::StatusCode::OK);
    }
}

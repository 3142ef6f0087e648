use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::handlers::{
    get_status, health_check, list_drinks, list_foods, metrics_handler,
    security_headers_middleware,
};
use crate::models::Catalog;
use crate::observability::{observability_middleware, Metrics, MetricsError};
use crate::repositories::InMemoryCatalogRepository;
use crate::services::CatalogService;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Wire the repository, service and metrics around an already-built catalog
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, MetricsError> {
        let metrics = Arc::new(Metrics::new()?);
        let repository = Arc::new(InMemoryCatalogRepository::new(catalog));
        let catalog_service = Arc::new(CatalogService::new_with_metrics(
            repository,
            metrics.clone(),
        ));

        Ok(Self {
            catalog_service,
            metrics,
        })
    }

    /// State over the production menu
    pub fn seeded() -> Result<Self, MetricsError> {
        Self::new(Arc::new(Catalog::seed()))
    }
}

/// Build the application router
pub fn create_app(state: AppState) -> Router {
    let metrics_for_middleware = state.metrics.clone();

    Router::new()
        .route("/Success", get(get_status))
        .route("/api/v1/foods", get(list_foods))
        .route("/api/v1/drinks", get(list_drinks))
        .route("/health/status", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        // Middleware layers, inner to outer
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(move |req, next| {
            observability_middleware(metrics_for_middleware.clone(), req, next)
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_status_route() {
        let app = create_app(AppState::seeded().unwrap());
        let (status, headers, body) = send(app, get_request("/Success")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"Order Status":"Success"}"#);
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["x-content-type-options"], "nosniff");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_app(AppState::seeded().unwrap());
        let (status, _, _) = send(app, get_request("/api/v1/desserts")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_to_list_route_not_allowed() {
        let app = create_app(AppState::seeded().unwrap());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/foods")
            .body(Body::empty())
            .unwrap();
        let (status, _, _) = send(app, request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_header_present() {
        let app = create_app(AppState::seeded().unwrap());
        let request = Request::builder()
            .uri("/api/v1/drinks")
            .header("origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let (status, headers, _) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_requests_show_up_in_metrics() {
        let state = AppState::seeded().unwrap();
        let app = create_app(state.clone());

        send(app.clone(), get_request("/api/v1/foods?ID=1")).await;
        let (_, _, body) = send(app, get_request("/metrics")).await;

        assert!(body.contains(r#"endpoint="/api/v1/foods""#));
        assert!(body.contains(r#"collection="foods""#));
    }

    #[tokio::test]
    async fn test_custom_catalog() {
        let catalog = Catalog::new(
            vec![crate::models::FoodItem::new("A1", "Pad Thai", "Noodles", 90)],
            Vec::new(),
        );
        let app = create_app(AppState::new(Arc::new(catalog)).unwrap());

        let (_, _, foods) = send(app.clone(), get_request("/api/v1/foods?ID=A1")).await;
        let (_, _, drinks) = send(app, get_request("/api/v1/drinks")).await;

        assert_eq!(
            foods,
            r#"[{"id":"A1","name":"Pad Thai","category":"Noodles","price":90}]"#
        );
        assert_eq!(drinks, "[]");
    }
}

//! Health check endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub ocr_provider: String,
    pub ocr_available: bool,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ocr = state.ocr();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "mcq-extract-server".to_string(),
        ocr_provider: ocr.provider_name().to_string(),
        ocr_available: ocr.is_available().await,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::ocr::MockProvider;
    use crate::routes::test_support::test_app;

    #[tokio::test]
    async fn test_health_reports_ocr_availability() {
        let dir = tempfile::tempdir().unwrap();

        for uri in ["/health", "/api/health"] {
            let app = test_app(Arc::new(MockProvider::unavailable()), dir.path());
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(health.status, "healthy");
            assert_eq!(health.ocr_provider, "mock");
            assert!(!health.ocr_available);
        }
    }
}

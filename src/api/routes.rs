use crate::api::api_error::APIError;
use crate::api::model::RecordRequest;
use crate::api::server::AppState;
use crate::error::Error;
use crate::store::StoredRecord;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, put};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthcheck", get(health_check))
        .route("/dns/", put(update_record).delete(delete_record))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn root(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.config.root_redirect)
}

#[allow(clippy::unused_async)]
async fn health_check() -> impl IntoResponse {
    Json(json!({"ok":"healthy"}))
}

/// Validate the request body and flatten it into the tuple the store keys on.
fn stored_record(payload: RecordRequest) -> Result<StoredRecord, APIError> {
    match payload.into_record() {
        Ok(record) => Ok(StoredRecord::from(&record)),
        Err(err) => {
            tracing::debug!("rejected record: {err}");
            Err(Error::from(err).into())
        }
    }
}

async fn update_record(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<RecordRequest>, APIError>,
) -> Result<String, APIError> {
    let row = stored_record(payload)?;
    tracing::info!("put {row}");
    state
        .record_store
        .write()
        .await
        .insert(row.clone())
        .await?;
    Ok(row.value)
}

async fn delete_record(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<RecordRequest>, APIError>,
) -> Result<String, APIError> {
    let row = stored_record(payload)?;
    let affected = state.record_store.write().await.delete(&row).await?;
    tracing::info!("delete {row}: {affected} affected");
    Ok(format!("Affected: {affected}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DEFAULT_ROOT_REDIRECT};
    use crate::record::RecordType;
    use crate::store::{DynRecordStore, InMemoryRecordStore};
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        store: DynRecordStore,
    }

    fn test_app() -> TestApp {
        let config = Config {
            api_bind_addr: "127.0.0.1:0".parse().unwrap(),
            api_timeout: Duration::from_secs(5),
            store_state_path: None,
            root_redirect: DEFAULT_ROOT_REDIRECT.to_string(),
        };
        let store: DynRecordStore = Arc::new(RwLock::new(InMemoryRecordStore::default()));
        let router = new(AppState {
            config: Arc::new(config),
            record_store: store.clone(),
        });
        TestApp { router, store }
    }

    impl TestApp {
        async fn send(&self, method: Method, body: &serde_json::Value) -> (StatusCode, String) {
            let request = Request::builder()
                .method(method)
                .uri("/dns/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap();
            let response = self.router.clone().oneshot(request).await.unwrap();
            read(response).await
        }

        async fn rows(&self) -> usize {
            self.store.read().await.count().await
        }
    }

    async fn read(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn a_record_body() -> serde_json::Value {
        json!({
            "apex": "example.com",
            "subdomain": "@",
            "record": {"record_type": "A", "record_val": "4.3.2.1"},
        })
    }

    fn a_row() -> StoredRecord {
        StoredRecord {
            apex: "example.com".into(),
            subdomain: "@".into(),
            record_type: RecordType::A,
            value: "4.3.2.1".into(),
        }
    }

    #[tokio::test]
    async fn put_stores_canonical_value() {
        let app = test_app();
        let (status, body) = app.send(Method::PUT, &a_record_body()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "4.3.2.1");
        assert!(app.store.read().await.contains(&a_row()).await);
    }

    #[tokio::test]
    async fn put_response_matches_stored_value() {
        let app = test_app();
        let body = json!({
            "apex": "example.com",
            "subdomain": "@",
            "record": {
                "record_type": "CAA",
                "record_val": {"flags": 0, "tag": "issue", "value": "ca \"q\" \\ x"},
            },
        });
        let (status, text) = app.send(Method::PUT, &body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, r#"0 issue "ca \"q\" \\ x""#);

        let stored = app
            .store
            .read()
            .await
            .lookup("example.com", "@", RecordType::Caa)
            .await;
        assert_eq!(stored, vec![text]);
    }

    #[tokio::test]
    async fn duplicate_put_succeeds_identically() {
        let app = test_app();
        let first = app.send(Method::PUT, &a_record_body()).await;
        let second = app.send(Method::PUT, &a_record_body()).await;
        assert_eq!(first, second);
        assert_eq!(app.rows().await, 1);
    }

    #[tokio::test]
    async fn delete_reports_affected_count() {
        let app = test_app();
        let (status, body) = app.send(Method::DELETE, &a_record_body()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Affected: 0");

        app.send(Method::PUT, &a_record_body()).await;
        let other = json!({
            "apex": "example.com",
            "subdomain": "www",
            "record": {"record_type": "A", "record_val": "4.3.2.1"},
        });
        app.send(Method::PUT, &other).await;
        assert_eq!(app.rows().await, 2);

        let (_, body) = app.send(Method::DELETE, &a_record_body()).await;
        assert_eq!(body, "Affected: 1");
        assert_eq!(app.rows().await, 1);
        assert!(!app.store.read().await.contains(&a_row()).await);
    }

    #[tokio::test]
    async fn invalid_field_is_rejected_with_its_name() {
        let app = test_app();
        let body = json!({
            "apex": "example.com",
            "subdomain": "@",
            "record": {"record_type": "A", "record_val": "4.3.2.256"},
        });
        let (status, text) = app.send(Method::PUT, &body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let err: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(err["field"], "record_val");
        assert_eq!(app.rows().await, 0);
    }

    #[tokio::test]
    async fn unknown_record_type_is_unprocessable() {
        let app = test_app();
        let body = json!({
            "apex": "example.com",
            "subdomain": "@",
            "record": {"record_type": "NS", "record_val": "ns1.example.com"},
        });
        let (status, _) = app.send(Method::PUT, &body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let app = test_app();
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/dns/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"apex\":"))
            .unwrap();
        let (status, _) = read(app.router.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_unsupported() {
        let app = test_app();
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/dns/")
            .body(Body::from(a_record_body().to_string()))
            .unwrap();
        let (status, _) = read(app.router.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn root_redirects() {
        let app = test_app();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            DEFAULT_ROOT_REDIRECT
        );
    }

    #[tokio::test]
    async fn health_check_is_ok() {
        let app = test_app();
        let request = Request::builder()
            .uri("/healthcheck")
            .body(Body::empty())
            .unwrap();
        let (status, body) = read(app.router.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"ok":"healthy"}"#);
    }
}

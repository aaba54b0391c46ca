//! Integration Tests for API Endpoints
//!
//! Drives the full router against an in-memory SQLite store, with a store
//! wrapper that counts single-record reads so cache hits are observable.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use cars_api::{
    api::create_router,
    models::{Car, NewCar},
    repository::{database::connect_in_memory, CarStore, SqliteCarStore},
    AppState, Config, Result,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

// == Helper Types ==

/// Delegates to the SQLite store and counts `get_by_id` round-trips.
#[derive(Clone)]
struct CountingStore {
    inner: SqliteCarStore,
    reads: Arc<AtomicUsize>,
}

#[async_trait]
impl CarStore for CountingStore {
    async fn list_all(&self) -> Result<Vec<Car>> {
        self.inner.list_all().await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Car> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id).await
    }

    async fn add(&self, car: NewCar) -> Result<Car> {
        self.inner.add(car).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        self.inner.delete_by_id(id).await
    }

    async fn update(&self, car: Car) -> Result<Car> {
        self.inner.update(car).await
    }
}

struct TestApp {
    router: Router,
    store: CountingStore,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_config(Config::default()).await
    }

    async fn with_config(config: Config) -> Self {
        let inner = SqliteCarStore::new(connect_in_memory().await.unwrap());
        inner.init_schema().await.unwrap();
        let store = CountingStore {
            inner,
            reads: Arc::new(AtomicUsize::new(0)),
        };
        let router = create_router(AppState::cached(store.clone(), &config));

        Self { router, store }
    }

    /// Store `get_by_id` calls, including the existence check inside update.
    fn store_reads(&self) -> usize {
        self.store.reads.load(Ordering::SeqCst)
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, bytes.to_vec())
    }

    async fn send_json(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn add_audi(&self) -> Value {
        let (status, json) = self.send_json("POST", "/cars", Some(audi())).await;
        assert_eq!(status, StatusCode::CREATED);
        json
    }
}

fn audi() -> Value {
    json!({"brand": "Audi", "model": "A3", "color": "Red", "cost": 10000})
}

// == List Endpoint Tests ==

#[tokio::test]
async fn test_list_empty_returns_array() {
    let app = TestApp::new().await;

    let (status, json) = app.send_json("GET", "/cars/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_list_returns_all_cars() {
    let app = TestApp::new().await;
    let first = app.add_audi().await;
    let (_, second) = app
        .send_json(
            "POST",
            "/cars",
            Some(json!({"brand": "BMW", "model": "X6", "color": "Black", "cost": 20000})),
        )
        .await;

    let (status, json) = app.send_json("GET", "/cars", None).await;

    assert_eq!(status, StatusCode::OK);
    let cars = json.as_array().unwrap();
    assert_eq!(cars.len(), 2);
    assert!(cars.contains(&first));
    assert!(cars.contains(&second));
}

// == Add Endpoint Tests ==

#[tokio::test]
async fn test_add_returns_created_with_generated_id() {
    let app = TestApp::new().await;

    let json = app.add_audi().await;

    let id = Uuid::parse_str(json["id"].as_str().unwrap()).unwrap();
    assert!(!id.is_nil());
    assert_eq!(json["brand"], "Audi");
    assert_eq!(json["model"], "A3");
    assert_eq!(json["color"], "Red");
    assert_eq!(json["cost"], 10000);
}

#[tokio::test]
async fn test_add_invalid_json_request() {
    let app = TestApp::new().await;

    let (status, bytes) = app
        .send("POST", "/cars", Some(json!({"brand": "Audi", "cost": "lots"})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json["message"].is_string());
}

// == Get Endpoint Tests ==

#[tokio::test]
async fn test_get_after_add_is_served_from_cache() {
    let app = TestApp::new().await;
    let created = app.add_audi().await;
    let uri = format!("/cars/{}", created["id"].as_str().unwrap());

    let (status1, first) = app.send_json("GET", &uri, None).await;
    let (status2, second) = app.send_json("GET", &uri, None).await;

    assert_eq!(status1, StatusCode::OK);
    assert_eq!(status2, StatusCode::OK);
    assert_eq!(first, created);
    assert_eq!(second, first);
    assert_eq!(app.store_reads(), 0, "both reads should hit the cache");
}

#[tokio::test]
async fn test_get_reads_through_once_then_hits_cache() {
    let app = TestApp::new().await;
    let car = app
        .store
        .inner
        .add(NewCar {
            brand: "Audi".to_string(),
            model: "A3".to_string(),
            color: "Red".to_string(),
            cost: 10000,
        })
        .await
        .unwrap();
    let uri = format!("/cars/{}", car.id);

    let (_, first) = app.send_json("GET", &uri, None).await;
    let (_, second) = app.send_json("GET", &uri, None).await;

    assert_eq!(first, second);
    assert_eq!(app.store_reads(), 1);

    let (_, stats) = app.send_json("GET", "/stats", None).await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["total_entries"], 1);
}

#[tokio::test]
async fn test_get_unknown_id_is_server_error_and_not_cached() {
    let app = TestApp::new().await;

    let (status, json) = app
        .send_json("GET", &format!("/cars/{}", Uuid::new_v4()), None)
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["message"].is_string());

    let (_, stats) = app.send_json("GET", "/stats", None).await;
    assert_eq!(stats["total_entries"], 0);
}

#[tokio::test]
async fn test_get_invalid_id() {
    let app = TestApp::new().await;

    let (status, json) = app.send_json("GET", "/cars/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("not-a-uuid"));
}

#[tokio::test]
async fn test_get_after_ttl_reads_through() {
    let config = Config {
        cache_ttl_seconds: 1,
        ..Config::default()
    };
    let app = TestApp::with_config(config).await;
    let created = app.add_audi().await;
    let uri = format!("/cars/{}", created["id"].as_str().unwrap());

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let (status, json) = app.send_json("GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, created);
    assert_eq!(app.store_reads(), 1);
}

// == Update Endpoint Tests ==

#[tokio::test]
async fn test_update_then_get_reflects_changes() {
    let app = TestApp::new().await;
    let created = app.add_audi().await;
    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/cars/{}", id);

    // Warm the cache with the old version
    app.send_json("GET", &uri, None).await;

    let changed = json!({"id": id, "brand": "Audi", "model": "A4", "color": "Blue", "cost": 15000});
    let (status, updated) = app.send_json("PUT", "/cars", Some(changed.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, changed);

    let (status, fetched) = app.send_json("GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, changed);
}

#[tokio::test]
async fn test_update_unknown_id_fails_and_creates_nothing() {
    let app = TestApp::new().await;
    let ghost = json!({
        "id": Uuid::new_v4().to_string(),
        "brand": "BMW",
        "model": "X6",
        "color": "Black",
        "cost": 20000
    });

    let (status, json) = app.send_json("PUT", "/cars", Some(ghost)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["message"].is_string());

    let (_, list) = app.send_json("GET", "/cars", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_update_invalid_body() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send_json("PUT", "/cars", Some(json!({"id": "nope", "brand": "BMW"})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Delete Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint_success() {
    let app = TestApp::new().await;
    let created = app.add_audi().await;

    let (status, body) = app
        .send("DELETE", &format!("/cars/{}", created["id"].as_str().unwrap()), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, list) = app.send_json("GET", "/cars", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_delete_unknown_id_is_ok() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send("DELETE", &format!("/cars/{}", Uuid::new_v4()), None)
        .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_invalid_id() {
    let app = TestApp::new().await;

    let (status, _) = app.send("DELETE", "/cars/123", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// Regression target: delete does not invalidate the cache, so a deleted
// record keeps being served until its TTL lapses.
#[tokio::test]
async fn test_deleted_record_still_served_from_cache_until_ttl() {
    let app = TestApp::new().await;
    let created = app.add_audi().await;
    let uri = format!("/cars/{}", created["id"].as_str().unwrap());

    let (status, _) = app.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = app.send_json("GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, created);
}

#[tokio::test]
async fn test_delete_with_invalidation_enabled() {
    let config = Config {
        cache_invalidate_on_delete: true,
        ..Config::default()
    };
    let app = TestApp::with_config(config).await;
    let created = app.add_audi().await;
    let uri = format!("/cars/{}", created["id"].as_str().unwrap());

    app.send("DELETE", &uri, None).await;

    let (status, _) = app.send_json("GET", &uri, None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// == Misc Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;

    let (status, json) = app.send_json("GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_concurrent_reads_share_cache() {
    let app = Arc::new(TestApp::new().await);
    let created = app.add_audi().await;
    let uri = format!("/cars/{}", created["id"].as_str().unwrap());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let app = Arc::clone(&app);
        let uri = uri.clone();
        handles.push(tokio::spawn(async move { app.send_json("GET", &uri, None).await }));
    }

    for handle in handles {
        let (status, json) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], created["id"]);
    }
    assert_eq!(app.store_reads(), 0);
}

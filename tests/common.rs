#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use axum::Router;
use masslog::api::{Notice, Notifier};
use masslog::{ApiClient, ClientConfig, SessionState};
use serde_json::{json, Value};
use tokio::net::TcpListener;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("masslog=debug".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().init();
    });
}

/// Serve `routes` under `/api` on a random local port; returns the API base URL
pub async fn spawn_server(routes: Router) -> String {
    setup_tracing();
    let app = Router::new().nest("/api", routes);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

/// Base URL of a port nothing listens on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

pub fn client_for(base_url: &str) -> ApiClient {
    let config = ClientConfig::new(base_url).unwrap();
    ApiClient::new(&config, SessionState::new()).unwrap()
}

pub fn lenient_client_for(base_url: &str) -> ApiClient {
    let mut config = ClientConfig::new(base_url).unwrap();
    config.lenient_status = true;
    ApiClient::new(&config, SessionState::new()).unwrap()
}

/// Counts requests and keeps the JSON bodies a mock handler received
#[derive(Clone, Default)]
pub struct Recorder {
    hits: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    pub fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record(&self, body: Value) {
        self.hit();
        self.bodies.lock().unwrap().push(body);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

/// Notifier that remembers every notice
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

pub fn mass_json(id: i64, mass_kg: f64, timestamp: &str) -> Value {
    json!({
        "id": id,
        "mass_kg": mass_kg,
        "measurement_timestamp": timestamp,
        "created_at": timestamp,
    })
}

pub fn user_json() -> Value {
    json!({
        "id": "5f0c1a2e-2f8e-4d0b-9d55-0c4f3e0b7a10",
        "username": "a",
        "password_hash": "$argon2id$v=19$m=19456,t=2,p=1$abc$def",
        "created_at": "2024-01-01T00:00:00Z",
    })
}

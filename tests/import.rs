use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use masslog::api::Notice;
use masslog::models::ImportOutcome;
use masslog::ApiError;
use serde_json::{json, Value};

mod common;

/// `/import` accepts bodies with a `masses` array and rejects anything else
fn import_routes(recorder: common::Recorder) -> Router {
    Router::new().route(
        "/import",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                let accepted = body["masses"].is_array();
                recorder.record(body);
                if accepted {
                    StatusCode::OK.into_response()
                } else {
                    (StatusCode::UNPROCESSABLE_ENTITY, "missing field `masses`").into_response()
                }
            }
        }),
    )
}

#[tokio::test]
async fn test_import_malformed_json_sends_nothing() {
    let recorder = common::Recorder::default();
    let notifier = Arc::new(common::RecordingNotifier::default());
    let client = common::client_for(&common::spawn_server(import_routes(recorder.clone())).await)
        .with_notifier(notifier.clone());

    let err = client.import_user_data("not json").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidImport(_)));
    assert_eq!(recorder.hits(), 0);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_import_success_notifies() {
    let recorder = common::Recorder::default();
    let notifier = Arc::new(common::RecordingNotifier::default());
    let client = common::client_for(&common::spawn_server(import_routes(recorder.clone())).await)
        .with_notifier(notifier.clone());

    let text = r#"{"masses": [{"mass_kg": 80.0, "measurement_timestamp": "2024-01-01T07:00:00Z", "created_at": "2024-01-01T07:00:00Z"}]}"#;
    let outcome = client.import_user_data(text).await.unwrap();

    assert_eq!(outcome, ImportOutcome::Imported);
    assert_eq!(notifier.notices(), vec![Notice::ImportSucceeded]);
    let expected: Value = serde_json::from_str(text).unwrap();
    assert_eq!(recorder.bodies(), vec![expected]);
}

#[tokio::test]
async fn test_import_failure_notifies_with_server_text() {
    let recorder = common::Recorder::default();
    let notifier = Arc::new(common::RecordingNotifier::default());
    let client = common::client_for(&common::spawn_server(import_routes(recorder.clone())).await)
        .with_notifier(notifier.clone());

    let outcome = client.import_user_data(r#"{"weights": []}"#).await.unwrap();

    assert_eq!(
        outcome,
        ImportOutcome::Rejected {
            status: 422,
            message: "missing field `masses`".to_string()
        }
    );
    assert_eq!(
        notifier.notices(),
        vec![Notice::ImportFailed("missing field `masses`".to_string())]
    );
    assert_eq!(recorder.hits(), 1);
}

#[tokio::test]
async fn test_export_then_import() {
    let recorder = common::Recorder::default();
    let routes = import_routes(recorder.clone()).route(
        "/masses",
        get(|| async {
            Json(json!([
                common::mass_json(2, 79.5, "2024-02-02T07:00:00Z"),
                common::mass_json(1, 80.0, "2024-02-01T07:00:00Z"),
            ]))
        }),
    );
    let client = common::client_for(&common::spawn_server(routes).await);

    let document = client.export_user_data().await.unwrap();
    let masses = document.as_value()["masses"].as_array().unwrap();
    assert_eq!(masses.len(), 2);
    assert_eq!(masses[0]["mass_kg"], 79.5);

    let outcome = client.import_document(&document).await.unwrap();
    assert_eq!(outcome, ImportOutcome::Imported);
    assert_eq!(recorder.bodies()[0], *document.as_value());
}

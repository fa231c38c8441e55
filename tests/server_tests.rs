mod common;

use common::scenario_dataset;
use launchboard::server::{router, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0)); // Random port
    let listener = TcpListener::bind(addr).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let app = router(AppState::new(scenario_dataset()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_index_and_health() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let page = client.get(&base).send().await.unwrap();
    assert!(page.status().is_success());
    assert!(page.text().await.unwrap().contains("/api/sessions"));

    let health: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["records"], 4);
    assert_eq!(health["sites"], 2);
}

#[tokio::test]
async fn test_layout_endpoint() {
    let base = spawn_server().await;
    let layout: Value = reqwest::get(format!("{}/api/layout", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let options = layout["siteDropdown"]["options"].as_array().unwrap();
    assert_eq!(options.len(), 3);
    assert_eq!(options[0], json!({ "label": "All Sites", "value": "ALL" }));
    assert_eq!(layout["payloadSlider"]["value"], json!([500.0, 9000.0]));
}

#[tokio::test]
async fn test_stateless_chart_endpoints() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let pie: Value = client
        .get(format!("{}/api/charts/proportion?site=siteA", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pie["data"][0]["values"], json!([1, 1]));

    let scatter: Value = client
        .get(format!(
            "{}/api/charts/correlation?site=ALL&low=0&high=5000",
            base
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let traces = scatter["data"].as_array().unwrap();
    assert_eq!(traces.len(), 1);
    assert_eq!(traces[0]["x"], json!([500.0, 3000.0]));

    // Missing params fall back to ALL and the full range
    let full: Value = client
        .get(format!("{}/api/charts/correlation", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(full["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_chart_endpoints_validate_filters() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let unknown = client
        .get(format!("{}/api/charts/proportion?site=siteZ", base))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    let body: Value = unknown.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("siteZ"));

    let inverted = client
        .get(format!("{}/api/charts/correlation?low=5000&high=100", base))
        .send()
        .await
        .unwrap();
    assert_eq!(inverted.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_session_lifecycle() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    // 1. Open
    let resp = client
        .post(format!("{}/api/sessions", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let opened: Value = resp.json().await.unwrap();
    let id = opened["session_id"].as_str().unwrap().to_string();
    assert_eq!(opened["state"]["site"], "ALL");
    assert_eq!(
        opened["proportion"]["layout"]["title"]["text"],
        "Total Success Launches by Site"
    );
    assert!(opened["correlation"].is_object());

    // 2. Range change: only the scatter comes back
    let updated: Value = client
        .post(format!("{}/api/sessions/{}/events", base, id))
        .json(&json!({ "payload_range": [0, 5000] }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(updated.get("proportion").is_none());
    assert_eq!(updated["correlation"]["data"].as_array().unwrap().len(), 1);

    // 3. Site change: both come back, range is kept
    let updated: Value = client
        .post(format!("{}/api/sessions/{}/events", base, id))
        .json(&json!({ "site": "siteB" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        updated["proportion"]["layout"]["title"]["text"],
        "Total Launch Outcome for site siteB"
    );
    assert_eq!(updated["correlation"]["data"], json!([]));

    let state: Value = client
        .get(format!("{}/api/sessions/{}", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state, json!({ "site": "siteB", "payload_range": [0.0, 5000.0] }));

    // 4. Close
    let closed = client
        .delete(format!("{}/api/sessions/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(closed.status(), StatusCode::NO_CONTENT);

    let gone = client
        .post(format!("{}/api/sessions/{}/events", base, id))
        .json(&json!({ "site": "siteA" }))
        .send()
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_event_leaves_session_untouched() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let opened: Value = client
        .post(format!("{}/api/sessions", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = opened["session_id"].as_str().unwrap();

    // Valid site, invalid range: nothing is applied
    let resp = client
        .post(format!("{}/api/sessions/{}/events", base, id))
        .json(&json!({ "site": "siteA", "payload_range": [9000, 100] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let state: Value = client
        .get(format!("{}/api/sessions/{}", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state["site"], "ALL");
}

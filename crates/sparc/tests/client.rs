use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use sparc_api::{SparcApi, SparcApiConfig, SparcError, SparcSearchQuery, create_sparc_api};

const SEARCH_RESPONSE: &str = include_str!("fixtures/search_response.json");

#[derive(Debug, Clone)]
struct RecordedRequest {
    index: String,
    params: HashMap<String, String>,
    body: Value,
}

type Recorder = Arc<Mutex<Vec<RecordedRequest>>>;

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let address = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test router");
    });
    format!("http://{address}")
}

async fn record_search(
    State(recorder): State<Recorder>,
    Path(index): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    recorder
        .lock()
        .expect("recorder lock")
        .push(RecordedRequest {
            index,
            params,
            body,
        });
    (StatusCode::OK, SEARCH_RESPONSE.to_string())
}

fn api_for(base_url: &str, index: &str) -> SparcApi {
    SparcApi::new(
        SparcApiConfig::new("test-key")
            .with_base_url(format!("{base_url}/"))
            .with_index(index),
    )
    .expect("valid config")
}

#[tokio::test]
async fn search_posts_query_to_index_and_decodes_hits() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route("/{index}/_search", post(record_search))
        .with_state(recorder.clone());
    let base_url = spawn_server(router).await;
    let api = api_for(&base_url, "portal_datasets");

    assert_eq!(
        api.search_url(),
        format!("{base_url}/portal_datasets/_search")
    );

    let query = SparcSearchQuery::text("vagus")
        .with_size(5)
        .with_filter(json!({"term": {"item.published": true}}));
    let response = api.search(&query).await.expect("search succeeds");

    assert_eq!(response.total_hits(), 2);
    assert_eq!(
        response.datasets().map(|dataset| dataset.name()).collect::<Vec<_>>(),
        vec!["Vagus nerve stimulation in rat", "Colon motility atlas"]
    );

    let recorded = recorder.lock().expect("recorder lock").clone();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].index, "portal_datasets");
    assert_eq!(
        recorded[0].params.get("api_key").map(String::as_str),
        Some("test-key")
    );
    assert_eq!(
        recorded[0].body,
        json!({
            "size": 5,
            "query": {
                "query_string": {"query": "vagus"},
                "bool": {"filter": [{"term": {"item.published": true}}]}
            }
        })
    );
}

#[tokio::test]
async fn search_text_sends_trimmed_query_string() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route("/{index}/_search", post(record_search))
        .with_state(recorder.clone());
    let base_url = spawn_server(router).await;
    let api = create_sparc_api(
        SparcApiConfig::new("  test-key  ")
            .with_base_url(base_url)
            .with_index("datasets"),
    )
    .expect("valid config");

    api.search_text("  colon motility ", 3)
        .await
        .expect("search succeeds");

    let recorded = recorder.lock().expect("recorder lock").clone();
    assert_eq!(
        recorded[0].body,
        json!({"size": 3, "query": {"query_string": {"query": "colon motility"}}})
    );
    assert_eq!(
        recorded[0].params.get("api_key").map(String::as_str),
        Some("test-key")
    );
}

#[tokio::test]
async fn non_success_status_keeps_code_and_body() {
    let router = Router::new().route(
        "/{index}/_search",
        post(|| async { (StatusCode::UNAUTHORIZED, "invalid api key") }),
    );
    let base_url = spawn_server(router).await;
    let api = api_for(&base_url, "datasets");

    let error = api
        .search_text("anything", 1)
        .await
        .expect_err("unauthorized");

    assert_eq!(
        error.to_string(),
        "search endpoint returned status 401 on `search-http-status`: invalid api key"
    );
    match error {
        SparcError::ResponseStatus { status, body, .. } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route(
        "/{index}/_search",
        post(|| async { (StatusCode::OK, "{\"took\": \"soon\"}") }),
    );
    let base_url = spawn_server(router).await;
    let api = api_for(&base_url, "datasets");

    let error = api
        .search(&SparcSearchQuery::new())
        .await
        .expect_err("body does not match response shape");

    assert!(matches!(
        error,
        SparcError::DecodeResponse {
            stage: "decode-search-response",
            ..
        }
    ));
}

#[test]
fn blank_api_key_is_rejected() {
    let error = SparcApi::new(SparcApiConfig::new("   ")).expect_err("blank key");
    assert!(matches!(error, SparcError::MissingApiKey { .. }));
}

#[test]
fn defaults_apply_when_overrides_are_absent() {
    let api = SparcApi::new(SparcApiConfig::new("key")).expect("valid config");
    assert_eq!(api.index(), sparc_api::DEFAULT_INDEX);
    assert_eq!(
        api.search_url(),
        format!(
            "{}/{}/_search",
            sparc_api::DEFAULT_BASE_URL,
            sparc_api::DEFAULT_INDEX
        )
    );
}

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use params_api::{
    config::Config, models::Props, router::create_router, service::EndpointService,
    state::AppState,
};
use params_core::{MultiValueMap, SingleValueMap};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Object(Props),
    Map(SingleValueMap),
    MultiMap(MultiValueMap),
}

#[derive(Default)]
struct RecordingService {
    calls: Mutex<Vec<Call>>,
}

impl RecordingService {
    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

#[async_trait]
impl EndpointService for RecordingService {
    async fn get_endpoint_object(&self, props: Props) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Object(props));
        Ok(())
    }

    async fn get_endpoint_map(&self, props: SingleValueMap) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Map(props));
        Ok(())
    }

    async fn get_endpoint_multi_map(&self, props: MultiValueMap) -> Result<()> {
        self.calls.lock().unwrap().push(Call::MultiMap(props));
        Ok(())
    }
}

fn app_state(config: Config) -> (Arc<AppState>, Arc<RecordingService>) {
    let service = Arc::new(RecordingService::default());
    let state = AppState::new(config, service.clone());
    (state, service)
}

async fn get(state: &Arc<AppState>, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = create_router(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn empty_query_succeeds_on_every_endpoint() {
    let (state, service) = app_state(Config::default());

    for uri in ["/endpoint-object", "/endpoint-map", "/endpoint-multi-map"] {
        let (status, body) = get(&state, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.is_empty(), "{uri}");
    }

    assert_eq!(
        service.take(),
        vec![
            Call::Object(Props::default()),
            Call::Map(SingleValueMap::new()),
            Call::MultiMap(MultiValueMap::new()),
        ]
    );
}

#[tokio::test]
async fn map_endpoint_keeps_last_repeated_value() {
    let (state, service) = app_state(Config::default());

    let (status, _) = get(&state, "/endpoint-map?a=1&a=2&b=x").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        service.take(),
        vec![Call::Map(SingleValueMap::from_pairs([("a", "2"), ("b", "x")]))]
    );
}

#[tokio::test]
async fn multi_map_endpoint_keeps_repeated_values_in_order() {
    let (state, service) = app_state(Config::default());

    let (status, _) = get(&state, "/endpoint-multi-map?a=1&b=x&a=2").await;
    assert_eq!(status, StatusCode::OK);

    let calls = service.take();
    let [Call::MultiMap(props)] = calls.as_slice() else {
        panic!("unexpected calls: {calls:?}");
    };
    assert_eq!(
        props.get_all("a"),
        Some(&["1".to_string(), "2".to_string()][..])
    );
    assert_eq!(props.get_all("b"), Some(&["x".to_string()][..]));
}

#[tokio::test]
async fn object_endpoint_binds_fields_and_ignores_unknown() {
    let (state, service) = app_state(Config::default());

    let (status, _) = get(&state, "/endpoint-object?prop2=b&unknown=z&prop1=a").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        service.take(),
        vec![Call::Object(Props {
            prop1: Some("a".to_string()),
            prop2: Some("b".to_string()),
        })]
    );
}

#[tokio::test]
async fn object_endpoint_rejects_repeated_field() {
    let (state, service) = app_state(Config::default());

    let (status, body) = get(&state, "/endpoint-object?prop1=a&prop1=b").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["message"].is_string());
    assert!(service.take().is_empty());
}

#[tokio::test]
async fn non_get_method_is_not_allowed() {
    let (state, _) = app_state(Config::default());

    let response = create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/endpoint-map")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn openapi_document_is_served_when_enabled() {
    let (state, _) = app_state(Config::default());

    let (status, body) = get(&state, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    for path in ["/endpoint-object", "/endpoint-map", "/endpoint-multi-map"] {
        assert!(doc["paths"][path]["get"].is_object(), "{path}");
    }
}

#[tokio::test]
async fn openapi_document_is_absent_when_disabled() {
    let config = Config {
        swagger_ui: false,
        ..Config::default()
    };
    let (state, _) = app_state(config);

    let (status, _) = get(&state, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

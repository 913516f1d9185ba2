use axum::{http::StatusCode, routing::post, Json, Router};
use geoquery::{
    client::{HttpTransport, QueryRequest, QueryTransport},
    GeoQueryBuilder, GeoQueryError,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Serves `router` on an ephemeral port and returns its base URL
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn transport_for(base_url: &str) -> HttpTransport {
    let config = GeoQueryBuilder::new()
        .with_endpoint(base_url)
        .build()
        .unwrap();
    HttpTransport::from_config(&config)
}

fn paris_body() -> Value {
    json!({
        "query_response": "Paris is the capital of France.",
        "geospatial_context": "Western Europe",
        "additional_info": "Population 2.1M",
        "intent": "information",
        "explicit_locations": [
            {"name": "Paris", "type": "City", "coordinates": [48.8566, 2.3522]}
        ],
        "implicit_locations": [],
        "map_data": {
            "center": [48.8566, 2.3522],
            "zoom": 10,
            "markers": [
                {"name": "Paris", "type": "City", "coordinates": [48.8566, 2.3522]}
            ],
            "boundaries": null
        }
    })
}

#[tokio::test]
async fn test_posts_query_as_json() {
    println!("🧪 [TEST] POST /process_query round trip");

    let received = Arc::new(Mutex::new(Vec::new()));
    let recorded = received.clone();
    let router = Router::new().route(
        "/process_query",
        post(move |Json(body): Json<Value>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(body);
                Json(paris_body())
            }
        }),
    );
    let base_url = spawn_server(router).await;
    let transport = transport_for(&base_url);
    assert_eq!(transport.url(), format!("{}/process_query", base_url));

    let response = transport
        .send(&QueryRequest::new("Where is Paris?"))
        .await
        .unwrap();

    assert_eq!(
        *received.lock().unwrap(),
        vec![json!({"query": "Where is Paris?"})]
    );
    assert_eq!(response.explicit_locations.len(), 1);
    assert_eq!(response.map_data.markers[0].name, "Paris");
    assert_eq!(response.intent.as_deref(), Some("information"));
}

#[tokio::test]
async fn test_error_status_is_reported_with_detail() {
    let router = Router::new().route(
        "/process_query",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "model unavailable"})),
            )
        }),
    );
    let transport = transport_for(&spawn_server(router).await);

    let err = transport
        .send(&QueryRequest::new("Where is Paris?"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("model unavailable"));
    match err.downcast_ref::<GeoQueryError>() {
        Some(GeoQueryError::Status { status, detail }) => {
            assert_eq!(*status, 500);
            assert_eq!(detail.as_deref(), Some("model unavailable"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_status_without_body() {
    let router = Router::new().route("/process_query", post(|| async { StatusCode::BAD_GATEWAY }));
    let transport = transport_for(&spawn_server(router).await);

    let err = transport
        .send(&QueryRequest::new("Where is Paris?"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GeoQueryError>(),
        Some(GeoQueryError::Status { status: 502, detail: None })
    ));
}

#[tokio::test]
async fn test_malformed_body_is_a_serialization_error() {
    let router = Router::new().route("/process_query", post(|| async { "definitely not json" }));
    let transport = transport_for(&spawn_server(router).await);

    let err = transport
        .send(&QueryRequest::new("Where is Paris?"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GeoQueryError>(),
        Some(GeoQueryError::Serialization(_))
    ));
}

#[tokio::test]
async fn test_missing_location_list_is_a_serialization_error() {
    let router = Router::new().route(
        "/process_query",
        post(|| async {
            let mut body = paris_body();
            body.as_object_mut().unwrap().remove("implicit_locations");
            Json(body)
        }),
    );
    let transport = transport_for(&spawn_server(router).await);

    let err = transport
        .send(&QueryRequest::new("Where is Paris?"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GeoQueryError>(),
        Some(GeoQueryError::Serialization(_))
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = transport_for(&format!("http://{}", addr));
    let err = transport
        .send(&QueryRequest::new("Where is Paris?"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GeoQueryError>(),
        Some(GeoQueryError::Network(_))
    ));
}

//! HttpApi against a local axum server speaking the search API

use std::net::SocketAddr;

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use research_core::domain::SearchRequest;
use research_core::{ApiConfig, ApiError, ArticleCard, HttpApi, NewDocument, ResearchApi};
use serde::Deserialize;
use serde_json::{json, Value};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr) -> HttpApi {
    HttpApi::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        ..Default::default()
    })
    .unwrap()
}

async fn process(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "input": body["query"],
        "total": 42,
        "output": [{
            "title": format!("{} page {}", body["query"].as_str().unwrap_or(""), body["page"]),
            "abstract": "Nodes pass messages.",
            "keywords": "['graphs', 'message passing']",
            "n_citation": "17",
            "year": 2020.0,
            "url": "['https://example.org/a', 'bad']"
        }]
    }))
}

#[derive(Deserialize)]
struct PrefixQuery {
    prefix: String,
}

async fn autocomplete(Query(q): Query<PrefixQuery>) -> Json<Vec<String>> {
    Json(vec![format!("{}h", q.prefix), format!("{}mmar", q.prefix)])
}

async fn add_document(Json(doc): Json<Value>) -> (StatusCode, Json<Value>) {
    if doc["abstract"].is_string() && doc["keywords"].is_array() {
        (
            StatusCode::OK,
            Json(json!({ "message": "Document added successfully", "time_taken": 0.42 })),
        )
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad payload" })))
    }
}

fn router() -> Router {
    Router::new()
        .route("/api/process", post(process))
        .route("/api/autocomplete", get(autocomplete))
        .route("/api/add_document", post(add_document))
}

#[tokio::test]
async fn test_search_round_trip() {
    let api = client(serve(router()).await);

    let response = api
        .search(&SearchRequest {
            query: "graph".to_string(),
            page: 3,
            per_page: 10,
        })
        .await
        .unwrap();

    assert_eq!(response.total, 42);
    let article = &response.output[0];
    assert_eq!(article.title, "graph page 3");
    assert_eq!(article.n_citation, 17);
    assert_eq!(article.year, 2020);

    let card = ArticleCard::from_article(article, 100);
    assert_eq!(card.keywords, vec!["graphs", "message passing"]);
    assert_eq!(card.links, vec!["https://example.org/a"]);
}

#[tokio::test]
async fn test_autocomplete_sends_prefix() {
    let api = client(serve(router()).await);
    let suggestions = api.autocomplete("grap").await.unwrap();
    assert_eq!(suggestions, vec!["graph", "grapmmar"]);
}

#[tokio::test]
async fn test_add_document() {
    let api = client(serve(router()).await);
    let response = api
        .add_document(&NewDocument {
            title: "T".to_string(),
            abstract_text: "A".to_string(),
            year: 2024,
            keywords: vec!["k".to_string()],
            n_citation: 0.0,
            url: "https://example.org".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.time_taken, 0.42);
}

#[tokio::test]
async fn test_server_error_is_status() {
    let app = Router::new().route(
        "/api/process",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "index unavailable") }),
    );
    let api = client(serve(app).await);

    let err = api
        .search(&SearchRequest {
            query: "graph".to_string(),
            page: 1,
            per_page: 10,
        })
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "index unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_garbage_body_is_decode_error() {
    let app = Router::new().route("/api/autocomplete", get(|| async { "not json" }));
    let api = client(serve(app).await);

    let err = api.autocomplete("gr").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr).autocomplete("gr").await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use benchview_client::{ApiClient, DetailsSource, DetailsSurface, Outcome, Presenter};
use benchview_core::{ApiConfig, BenchviewError, ModalTargets, Result, DEFAULT_ERROR_MESSAGE};
use serde_json::json;
use std::collections::HashMap;

#[derive(Default)]
struct Page {
    containers: HashMap<String, String>,
    opened: Vec<String>,
    alerts: Vec<String>,
    errors: Vec<String>,
}

impl Page {
    fn new() -> Self {
        let mut page = Page::default();
        page.containers.insert("detailsModal".to_string(), String::new());
        page.containers.insert("detailsContent".to_string(), "<p>loading</p>".to_string());
        page
    }

    fn content(&self) -> &str {
        &self.containers["detailsContent"]
    }
}

impl DetailsSurface for Page {
    fn set_content(&mut self, content_id: &str, html: &str) -> Result<()> {
        match self.containers.get_mut(content_id) {
            Some(slot) => {
                *slot = html.to_string();
                Ok(())
            }
            None => Err(BenchviewError::ContainerNotFound(content_id.to_string())),
        }
    }

    fn show_modal(&mut self, modal_id: &str) -> Result<()> {
        self.opened.push(modal_id.to_string());
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn log_error(&mut self, context: &str, error: &BenchviewError) {
        self.errors.push(format!("{}: {}", context, error));
    }
}

async fn get_run(Path(id): Path<u64>) -> impl IntoResponse {
    if id != 42 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Benchmark run not found"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": 42,
            "prompt_content": "What is 17 * 23?",
            "response_text": "391",
            "score": 0.8734,
            "input_tokens": 12,
            "output_tokens": 3,
            "cost_usd": 0.00021,
            "run_time_ms": 840,
            "created_at": "2024-03-05T14:07:09.123456",
            "model_name": "gpt-4o-mini",
            "judge_reasoning": "Correct product.",
            "judge_model": "gpt-4o"
        })),
    )
}

async fn get_suite(Path(id): Path<u64>) -> Json<serde_json::Value> {
    Json(json!({
        "suite": {
            "id": id,
            "model_name": "llama3.1:8b",
            "prompt_name": "arithmetic",
            "status": "completed",
            "run_count": 2,
            "max_score": 1.0,
            "avg_score": 0.5,
            "min_score": 0.0,
            "total_cost_usd": 0.0042
        },
        "runs": [
            {"run_index": 1, "response_text": "391", "score": 1.0, "input_tokens": 12,
             "output_tokens": 3, "cost_usd": 0.0021, "run_time_ms": 800,
             "created_at": "2024-03-05T14:07:09"},
            {"run_index": 2, "response_text": "392", "score": 0.0, "input_tokens": 12,
             "output_tokens": 3, "cost_usd": 0.0021, "run_time_ms": 790,
             "created_at": "2024-03-05T14:07:10"}
        ]
    }))
}

async fn spawn_api() -> String {
    let app = Router::new()
        .route("/api/benchmark-runs/{id}", get(get_run))
        .route("/api/suite-runs/{id}", get(get_suite))
        .route("/broken/api/benchmark-runs/{id}", get(|| async { "<html>oops</html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn fetches_and_presents_run() {
    let base = spawn_api().await;
    let mut presenter = Presenter::new(ApiClient::new(&base), Page::new());

    let outcome = presenter.show_run(42, &ModalTargets::default()).await;
    assert!(outcome.is_shown());

    let page = presenter.into_surface();
    assert_eq!(page.opened, vec!["detailsModal"]);
    assert!(page.content().contains("<p class=\"mb-2\">gpt-4o-mini</p>"));
    assert!(page.content().contains("<li><strong>Score:</strong> 0.873</li>"));
    assert!(page.content().contains("<li><strong>Total Tokens:</strong> 15</li>"));
    assert!(page.content().contains("<li><strong>Cost:</strong> $0.0002</li>"));
    assert!(page.content().contains("<h6>Judge Output:</h6>"));
    assert!(page.content().contains("<li><strong>Judge Model:</strong> gpt-4o</li>"));
}

#[tokio::test]
async fn fetches_and_presents_suite() {
    let base = spawn_api().await;
    let mut presenter = Presenter::new(ApiClient::new(&base), Page::new());

    let outcome = presenter.show_suite(3, &ModalTargets::default()).await;
    assert!(outcome.is_shown());

    let page = presenter.surface();
    assert_eq!(page.content().matches(r#"role="tab""#).count(), 3);
    assert!(page.content().contains("<li><strong>Avg Score:</strong> 50.0%</li>"));
    assert!(page.content().contains("<li><strong>Total Cost:</strong> $0.0042</li>"));
    assert!(page.content().contains("Run 2: 0.0%"));
}

#[tokio::test]
async fn network_failure_alerts_and_leaves_content() {
    let base = unreachable_base().await;
    let mut presenter = Presenter::new(ApiClient::new(&base), Page::new());

    let outcome = presenter.show_run(42, &ModalTargets::default()).await;
    assert!(matches!(outcome, Outcome::Failed(BenchviewError::Http(_))));

    let page = presenter.into_surface();
    assert_eq!(page.content(), "<p>loading</p>");
    assert!(page.opened.is_empty());
    assert_eq!(page.alerts, vec![DEFAULT_ERROR_MESSAGE]);
    assert_eq!(page.errors.len(), 1);
}

#[tokio::test]
async fn not_found_is_a_failure() {
    let base = spawn_api().await;
    let mut presenter = Presenter::new(ApiClient::new(&base), Page::new());

    let outcome = presenter.show_run(7, &ModalTargets::default()).await;
    match outcome {
        Outcome::Failed(BenchviewError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/benchmark-runs/7"));
        }
        other => panic!("expected status failure, got {:?}", other),
    }
    assert_eq!(presenter.surface().content(), "<p>loading</p>");
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let base = spawn_api().await;
    let client = ApiClient::new(&format!("{}/broken", base));

    let err = client.fetch_run(1).await.unwrap_err();
    assert!(matches!(err, BenchviewError::Decode(ref msg) if msg.contains("<html>oops</html>")));
}

#[tokio::test]
async fn client_honours_config() {
    let base = spawn_api().await;
    let config = ApiConfig {
        base_url: base.clone(),
        timeout_ms: Some(5_000),
    };
    let client = ApiClient::from_config(&config).unwrap();
    assert_eq!(client.base_url(), base);

    let run = client.fetch_run(42).await.unwrap();
    assert_eq!(run.id, Some(42));
}

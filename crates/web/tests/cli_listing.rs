#![cfg(not(target_arch = "wasm32"))]

use axum::Json;
use axum::Router;
use axum::routing::get;
use clap::Parser;
use serde_json::{Value, json};

use storefront_web::cli::{Args, run};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = Router::new().route("/products", get(|| async { Json(catalog()) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// 20 products: 19 in "A", the last one in "B".
fn catalog() -> Value {
    let products: Vec<Value> = (1..=20)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Gadget {i}"),
                "description": format!("Gadget number {i}"),
                "price": i as f64 + 0.5,
                "category": if i == 20 { "B" } else { "A" },
            })
        })
        .collect();

    json!({ "products": products, "total": 20, "skip": 0, "limit": 20 })
}

async fn run_cli(server: &TestServer, flags: &[&str]) -> String {
    let mut argv = vec!["storefront", "--api-url", server.base_url.as_str()];
    argv.extend_from_slice(flags);
    let args = Args::try_parse_from(argv).unwrap();

    let mut out = Vec::new();
    run(args, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn prints_last_page_of_unfiltered_catalog() {
    let server = TestServer::spawn().await;
    let text = run_cli(&server, &["--page", "3"]).await;

    assert!(text.contains("Categories: [All] A B"));
    assert!(text.contains("Gadget 19  $19.5"));
    assert!(text.contains("Gadget 20  $20.5"));
    assert!(!text.contains("Gadget 18 "));
    assert!(text.contains("< Previous | 1 2 [3] | Next  "));
    assert!(text.contains("Page 3 of 3 (20 matching products)"));
}

#[tokio::test]
async fn out_of_range_page_is_clamped_by_the_host() {
    let server = TestServer::spawn().await;
    let text = run_cli(&server, &["--category", "B", "--page", "7"]).await;

    assert!(text.contains("Categories: All A [B]"));
    assert!(text.contains("Gadget 20  $20.5"));
    assert!(text.contains("Page 1 of 1 (1 matching products)"));
}

#[tokio::test]
async fn json_output_carries_the_derived_view() {
    let server = TestServer::spawn().await;
    let text = run_cli(&server, &["--json", "--search", "GADGET 1"]).await;
    let view: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(view["categories"], json!(["All", "A", "B"]));
    // "Gadget 1" and "Gadget 10".."Gadget 19"
    assert_eq!(view["filtered"].as_array().unwrap().len(), 11);
    assert_eq!(view["page_count"], 2);
    assert_eq!(view["page_items"].as_array().unwrap().len(), 9);
    assert_eq!(view["page_items"][0]["title"], "Gadget 1");
}

#[tokio::test]
async fn search_matching_nothing_prints_empty_state() {
    let server = TestServer::spawn().await;
    let text = run_cli(&server, &["--search", "zZz"]).await;

    assert!(text.contains("No products match the current filters."));
    assert!(text.contains("Page 1 of 0 (0 matching products)"));
}

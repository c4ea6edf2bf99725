use std::time::{Duration, Instant};
use storefront_scraper::config::Config;
use storefront_scraper::crawler::{run_scrape, Category, StopReason};
use storefront_scraper::output::{export, ExportFormat};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the mock server
fn create_test_config(base_url: &str, max_pages: u32) -> Config {
    let mut config = Config::default();
    config.scraper.base_url = base_url.to_string();
    config.scraper.delay_ms = 0; // No pacing in tests
    config.scraper.timeout_secs = 5;
    config.scraper.max_pages = max_pages;
    config
}

fn card(name: &str, price: &str, rating: &str, slug: &str) -> String {
    format!(
        r#"<article class="product-card">
            <a href="/item/{slug}"><h3 class="product-name">{name}</h3></a>
            <div class="product-price">{price}</div>
            <p class="product-description">The {name}</p>
            <div class="product-rating" data-rating="{rating}">★★★★</div>
        </article>"#
    )
}

fn listing(cards: &[String]) -> String {
    format!(
        "<html><head><title>Products</title></head><body><section>{}</section></body></html>",
        cards.join("\n")
    )
}

fn detail(category: &str, stock: &str) -> String {
    format!(
        r#"<html><body>
            <ol class="breadcrumb"><a href="/">Home</a><a href="/products">Products</a><a href="/c">{category}</a></ol>
            <span class="stock-status">{stock}</span>
        </body></html>"#
    )
}

async fn mount_listing(server: &MockServer, list_path: &str, page: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(list_path))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, slug: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/item/{}", slug)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}

#[tokio::test]
async fn test_full_scrape_two_pages_then_exhausted() {
    let server = MockServer::start().await;

    mount_listing(
        &server,
        "/products",
        "1",
        listing(&[
            card("Desk Lamp", "$19.99", "4.5", "lamp"),
            card("Mystery Box", "$", "3.0", "mystery"),
            card("Unrated Vase", "$9.00", "n/a", "vase"),
            card("Office Chair", "$149.00", "4.0", "chair"),
        ]),
        1,
    )
    .await;
    mount_listing(
        &server,
        "/products",
        "2",
        listing(&[card("Wool Rug", "$80.50", "3.5", "rug")]),
        1,
    )
    .await;
    mount_listing(&server, "/products", "3", listing(&[]), 1).await;

    mount_detail(&server, "lamp", detail("Lighting", "In Stock"), 1).await;
    mount_detail(&server, "chair", detail("Furniture", "Out of Stock"), 1).await;
    mount_detail(&server, "rug", detail("Decor", "in stock (2 left)"), 1).await;
    mount_detail(&server, "mystery", detail("Never", "In Stock"), 0).await;
    mount_detail(&server, "vase", detail("Never", "In Stock"), 0).await;

    let config = create_test_config(&server.uri(), 5);
    let report = run_scrape(&config, &Category::All)
        .await
        .expect("scraper setup succeeds");

    assert_eq!(report.stop_reason, StopReason::Exhausted { page: 3 });
    assert_eq!(report.pages_fetched, 3);

    let records = report.results.as_slice();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].name, "Desk Lamp");
    assert_eq!(records[0].price, 19.99);
    assert_eq!(records[0].rating, 4.5);
    assert_eq!(records[0].description, "The Desk Lamp");
    assert_eq!(records[0].url.as_str(), format!("{}/item/lamp", server.uri()));
    assert_eq!(records[0].category.as_deref(), Some("Lighting"));
    assert!(records[0].in_stock);

    assert_eq!(records[1].name, "Office Chair");
    assert_eq!(records[1].category.as_deref(), Some("Furniture"));
    assert!(!records[1].in_stock);

    assert_eq!(records[2].name, "Wool Rug");
    assert_eq!(records[2].price, 80.5);
    assert!(records[2].in_stock);

    let paths = request_paths(&server).await;
    assert_eq!(paths.iter().filter(|p| *p == "/products").count(), 3);
    assert_eq!(paths.iter().filter(|p| p.starts_with("/item/")).count(), 3);
}

#[tokio::test]
async fn test_page_limit_with_category() {
    let server = MockServer::start().await;

    for page in ["1", "2"] {
        mount_listing(
            &server,
            "/products/books",
            page,
            listing(&[card(&format!("Book {}", page), "$12.00", "4.0", &format!("book-{}", page))]),
            1,
        )
        .await;
    }
    mount_listing(
        &server,
        "/products/books",
        "3",
        listing(&[card("Book 3", "$12.00", "4.0", "book-3")]),
        0,
    )
    .await;

    mount_detail(&server, "book-1", detail("Books", "In Stock"), 1).await;
    mount_detail(&server, "book-2", detail("Books", "In Stock"), 1).await;

    let config = create_test_config(&server.uri(), 2);
    let report = run_scrape(&config, &Category::Named("books".to_string()))
        .await
        .expect("scraper setup succeeds");

    assert_eq!(report.stop_reason, StopReason::PageLimit { max_pages: 2 });
    let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Book 1", "Book 2"]);
}

#[tokio::test]
async fn test_server_error_stops_pagination() {
    let server = MockServer::start().await;

    mount_listing(
        &server,
        "/products",
        "1",
        listing(&[card("Kettle", "$30.00", "4.2", "kettle")]),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_listing(&server, "/products", "3", listing(&[]), 0).await;
    mount_detail(&server, "kettle", detail("Kitchen", "In Stock"), 1).await;

    let config = create_test_config(&server.uri(), 3);
    let report = run_scrape(&config, &Category::All)
        .await
        .expect("scraper setup succeeds");

    assert_eq!(report.stop_reason, StopReason::FetchFailed { page: 2 });
    assert_eq!(report.results.len(), 1);
}

#[tokio::test]
async fn test_missing_detail_page_keeps_record_with_defaults() {
    let server = MockServer::start().await;

    mount_listing(
        &server,
        "/products",
        "1",
        listing(&[card("Teapot", "$22.00", "4.8", "teapot")]),
        1,
    )
    .await;
    mount_listing(&server, "/products", "2", listing(&[]), 1).await;
    // No detail mock: wiremock answers 404

    let config = create_test_config(&server.uri(), 3);
    let report = run_scrape(&config, &Category::All)
        .await
        .expect("scraper setup succeeds");

    let records = report.results.as_slice();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, None);
    assert!(records[0].in_stock);
}

#[tokio::test]
async fn test_scrape_then_export() {
    let server = MockServer::start().await;

    mount_listing(
        &server,
        "/products",
        "1",
        listing(&[
            card("Pen", "$1.50", "3.9", "pen"),
            card("Notebook", "$4.25", "4.1", "notebook"),
        ]),
        1,
    )
    .await;
    mount_listing(&server, "/products", "2", listing(&[]), 1).await;
    mount_detail(&server, "pen", detail("Stationery", "In Stock"), 1).await;
    mount_detail(&server, "notebook", detail("Stationery", "Sold out"), 1).await;

    let config = create_test_config(&server.uri(), 3);
    let report = run_scrape(&config, &Category::All)
        .await
        .expect("scraper setup succeeds");

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("products.csv");
    let json_path = dir.path().join("products.json");

    assert_eq!(export(&report.results, ExportFormat::Csv, &csv_path).unwrap(), 2);
    assert_eq!(export(&report.results, ExportFormat::Json, &json_path).unwrap(), 2);

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("name,price,description,rating,url,category,in_stock")
    );
    assert!(lines.next().unwrap().starts_with("Pen,1.5,The Pen,3.9,"));
    assert!(lines.next().unwrap().ends_with(",Stationery,false"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json[1]["name"], "Notebook");
    assert_eq!(json[1]["in_stock"], false);
}

#[tokio::test]
async fn test_politeness_delay_precedes_every_request() {
    let server = MockServer::start().await;

    mount_listing(
        &server,
        "/products",
        "1",
        listing(&[card("Clock", "$15.00", "4.0", "clock")]),
        1,
    )
    .await;
    mount_listing(&server, "/products", "2", listing(&[]), 1).await;
    mount_detail(&server, "clock", detail("Decor", "In Stock"), 1).await;

    let mut config = create_test_config(&server.uri(), 3);
    config.scraper.delay_ms = 60;

    let start = Instant::now();
    run_scrape(&config, &Category::All)
        .await
        .expect("scraper setup succeeds");

    // Two listing requests and one detail request, each preceded by the delay
    assert!(start.elapsed() >= Duration::from_millis(180));
}

#[tokio::test]
async fn test_invalid_selector_fails_setup() {
    let mut config = create_test_config("http://127.0.0.1:9", 1);
    config.selectors.card = "div[".to_string();

    assert!(run_scrape(&config, &Category::All).await.is_err());
}

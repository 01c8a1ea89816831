//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock to serve listing pages and check the full
//! fetch → parse → extract → report cycle end-to-end.

use chart_harvest::config::Config;
use chart_harvest::scrape::{
    build_http_client, fetch_page, FetchError, Scraper, NO_RECORDS_MESSAGE,
};
use chart_harvest::NOT_AVAILABLE;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Three well-formed entries followed by one without a rating element
const CHART_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Top 250 Movies</title></head>
<body>
<ul class="ipc-metadata-list">
  <li class="ipc-metadata-list-summary-item">
    <h3 class="ipc-title__text">1. The Shawshank Redemption</h3>
    <div>
      <span class="sc-b0691f29-8 cli-title-metadata-item">1994</span>
      <span class="sc-b0691f29-8 cli-title-metadata-item">2h 22m</span>
    </div>
    <span class="ipc-rating-star">9.3 (3M)</span>
    <span class="ipc-inline-list__item">Drama</span>
  </li>
  <li class="ipc-metadata-list-summary-item">
    <h3 class="ipc-title__text">2. The Godfather</h3>
    <div>
      <span class="sc-b0691f29-8 cli-title-metadata-item">1972</span>
      <span class="sc-b0691f29-8 cli-title-metadata-item">2h 55m</span>
    </div>
    <span class="ipc-rating-star">9.2 (2.1M)</span>
    <span class="ipc-inline-list__item">Crime</span>
    <span class="ipc-inline-list__item">Drama</span>
  </li>
  <li class="ipc-metadata-list-summary-item">
    <h3 class="ipc-title__text">3. The Dark Knight</h3>
    <div>
      <span class="sc-b0691f29-8 cli-title-metadata-item">2008</span>
      <span class="sc-b0691f29-8 cli-title-metadata-item">2h 32m</span>
    </div>
    <span class="ipc-rating-star">9.0 (3M)</span>
    <span class="ipc-inline-list__item">Action</span>
    <span class="ipc-inline-list__item">Crime</span>
    <span class="ipc-inline-list__item">12</span>
  </li>
  <li class="ipc-metadata-list-summary-item">
    <h3 class="ipc-title__text">4. 12 Angry Men</h3>
    <div>
      <span class="sc-b0691f29-8 cli-title-metadata-item">1957</span>
    </div>
    <span class="ipc-inline-list__item">Drama</span>
  </li>
</ul>
</body></html>"#;

fn test_config(base_url: &str, csv_path: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.fetch.url = format!("{}/chart/top/", base_url);
    config.fetch.user_agent = "TestBrowser/1.0".to_string();
    config.fetch.pre_run_delay_ms = 0;
    config.output.csv_path = csv_path.display().to_string();
    config
}

async fn serve_chart(mock_server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/chart/top/"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_full_scrape_writes_all_records() {
    let mock_server = MockServer::start().await;
    serve_chart(&mock_server, 200, CHART_PAGE).await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("movies_data.csv");
    let config = test_config(&mock_server.uri(), &csv_path);

    let scraper = Scraper::new(config).expect("Failed to create scraper");
    let summary = scraper.run().await;

    assert_eq!(summary.records.len(), 4);

    let titles: Vec<&str> = summary.records.iter().map(|r| r.title()).collect();
    assert_eq!(
        titles,
        vec![
            "The Shawshank Redemption",
            "The Godfather",
            "The Dark Knight",
            "12 Angry Men"
        ]
    );

    let malformed = &summary.records.as_slice()[3];
    assert_eq!(malformed.rating(), NOT_AVAILABLE);
    assert_eq!(malformed.year(), "1957");
    assert_eq!(malformed.categories(), "Drama");

    let dark_knight = &summary.records.as_slice()[2];
    assert_eq!(dark_knight.rating(), "9.0");
    assert_eq!(dark_knight.categories(), "Action, Crime");

    assert_eq!(summary.output_path.as_deref(), Some(csv_path.as_path()));
    let content = std::fs::read_to_string(&csv_path).expect("CSV file missing");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "title,year,rating,categories");
    assert_eq!(lines[2], "The Godfather,1972,9.2,\"Crime, Drama\"");
    assert_eq!(lines[4], "12 Angry Men,1957,N/A,Drama");

    let stats = summary.statistics.expect("Statistics missing");
    assert_eq!(stats.earliest, 1957);
    assert_eq!(stats.latest, 2008);
    assert_eq!(stats.average, 1982);
}

#[tokio::test]
async fn test_request_carries_client_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chart/top/"))
        .and(header("user-agent", "TestBrowser/1.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(CHART_PAGE)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = test_config(&mock_server.uri(), &dir.path().join("out.csv"));

    let client = build_http_client(&config.fetch).expect("Failed to build client");
    let page = fetch_page(&client, &config.fetch.url)
        .await
        .expect("Fetch failed");

    assert_eq!(page.status_code, 200);
    assert!(page.body.contains("The Godfather"));
}

#[tokio::test]
async fn test_error_status_is_typed_failure() {
    let mock_server = MockServer::start().await;
    serve_chart(&mock_server, 503, "Service Unavailable").await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = test_config(&mock_server.uri(), &dir.path().join("out.csv"));

    let client = build_http_client(&config.fetch).expect("Failed to build client");
    let result = fetch_page(&client, &config.fetch.url).await;

    match result {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_failure_ends_run_gracefully() {
    let mock_server = MockServer::start().await;
    serve_chart(&mock_server, 404, "Not Found").await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("out.csv");
    let config = test_config(&mock_server.uri(), &csv_path);

    let summary = Scraper::new(config)
        .expect("Failed to create scraper")
        .run()
        .await;

    assert!(summary.records.is_empty());
    assert!(summary.output_path.is_none());
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn test_transport_failure_is_typed() {
    // Nothing listens on port 9 (discard) on test hosts
    let mut config = Config::default();
    config.fetch.url = "http://127.0.0.1:9/chart/top/".to_string();

    let client = build_http_client(&config.fetch).expect("Failed to build client");
    let result = fetch_page(&client, &config.fetch.url).await;

    assert!(matches!(result, Err(FetchError::Transport { .. })));
}

#[tokio::test]
async fn test_page_without_entries_writes_no_file() {
    let mock_server = MockServer::start().await;
    serve_chart(
        &mock_server,
        200,
        "<html><body><p>Please enable JavaScript</p></body></html>",
    )
    .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("out.csv");
    let config = test_config(&mock_server.uri(), &csv_path);

    let summary = Scraper::new(config)
        .expect("Failed to create scraper")
        .run()
        .await;

    assert!(summary.records.is_empty());
    assert!(summary.statistics.is_none());
    assert!(!csv_path.exists());
    assert!(summary.console.contains(NO_RECORDS_MESSAGE));
}

#[test]
fn test_offline_run_matches_network_run() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("offline.csv");
    let config = test_config("http://unused.invalid", &csv_path);

    let summary = Scraper::new(config)
        .expect("Failed to create scraper")
        .run_offline(CHART_PAGE.as_bytes());

    assert_eq!(summary.records.len(), 4);
    let content = std::fs::read_to_string(&csv_path).expect("CSV file missing");
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn test_offline_snapshot_with_invalid_utf8_is_scraped() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let snapshot = dir.path().join("chart.html");
    let csv_path = dir.path().join("offline.csv");

    // A Latin-1 byte in the heading, as a page saved with the wrong encoding
    let mut page = CHART_PAGE.as_bytes().to_vec();
    let heading = b"12 Angry Men";
    let at = page
        .windows(heading.len())
        .position(|w| w == heading)
        .expect("Heading missing");
    page.insert(at + heading.len(), 0xa0);
    std::fs::write(&snapshot, &page).expect("Failed to write snapshot");
    assert!(std::fs::read_to_string(&snapshot).is_err());

    let bytes = std::fs::read(&snapshot).expect("Failed to read snapshot");
    let config = test_config("http://unused.invalid", &csv_path);
    let summary = Scraper::new(config)
        .expect("Failed to create scraper")
        .run_offline(&bytes);

    assert_eq!(summary.records.len(), 4);
    assert!(summary.records.as_slice()[3].title().starts_with("12 Angry Men"));
    assert_eq!(summary.records.as_slice()[3].year(), "1957");
    assert!(csv_path.exists());
}

#[tokio::test]
async fn test_placeholder_entries_are_written_as_blank_rows() {
    let mock_server = MockServer::start().await;
    serve_chart(
        &mock_server,
        200,
        r#"<html><body><ul>
        <li class="ipc-metadata-list-summary-item"></li>
        <li class="ipc-metadata-list-summary-item"></li>
        </ul></body></html>"#,
    )
    .await;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("out.csv");
    let config = test_config(&mock_server.uri(), &csv_path);

    let summary = Scraper::new(config)
        .expect("Failed to create scraper")
        .run()
        .await;

    assert_eq!(summary.records.len(), 2);
    assert!(summary.statistics.is_none());
    let content = std::fs::read_to_string(&csv_path).expect("CSV file missing");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "title,year,rating,categories",
            "N/A,N/A,N/A,N/A",
            "N/A,N/A,N/A,N/A"
        ]
    );
}

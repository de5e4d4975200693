//! Integration tests for fetching and parsing over HTTP
//!
//! A local TCP listener stands in for the report server so no external
//! network is needed.

use metar_report::{Config, Error, ReportFetcher, ReportParser};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const EHAM_REPORT: &str = include_str!("data/EHAM.TXT");

/// Serve `/EHAM.TXT` with the sample report and 404 for anything else
async fn spawn_report_server(requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/decoded/", listener.local_addr().unwrap());

    tokio::spawn(async move {
        for _ in 0..requests {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let (status, body) = if request.starts_with("GET /decoded/EHAM.TXT ") {
                ("200 OK", EHAM_REPORT)
            } else {
                ("404 Not Found", "Not Found")
            };
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
    });

    base_url
}

fn fetcher_for(base_url: &str) -> ReportFetcher {
    let config = Config::default()
        .with_base_url(base_url)
        .with_timeout_secs(5)
        .without_system_proxy();
    ReportFetcher::new(config).unwrap()
}

#[tokio::test]
async fn test_fetch_and_parse_report() {
    let base_url = spawn_report_server(1).await;
    let fetcher = fetcher_for(&base_url);

    let mut report = fetcher.fetch_report("eham").await.unwrap();
    assert_eq!(report.station_code, "EHAM");
    assert_eq!(report.report_url, Some(format!("{}EHAM.TXT", base_url)));
    assert!(!report.valid);

    let report = ReportParser::new().parse_report(&mut report).unwrap();
    assert!(report.valid);
    assert_eq!(report.station_city.as_deref(), Some("Amsterdam Airport Schiphol"));
    assert_eq!(report.wind_direction, Some(220));
    assert_eq!(report.cycle, Some(10));
}

#[tokio::test]
async fn test_unknown_station_is_network_error() {
    let base_url = spawn_report_server(1).await;
    let fetcher = fetcher_for(&base_url);

    let err = fetcher.fetch_report("ZZZZ").await.unwrap_err();
    assert!(err.is_network());
    match err {
        Error::Network { url, .. } => assert!(url.ends_with("/decoded/ZZZZ.TXT")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind and drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = fetcher_for(&format!("http://{}/", addr));
    let err = fetcher.fetch_report("EHAM").await.unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
async fn test_empty_station_id() {
    let fetcher = fetcher_for("http://127.0.0.1:9/");
    let err = fetcher.fetch_report("").await.unwrap_err();
    assert!(matches!(err, Error::EmptyStationId));
    assert!(err.is_missing_input());
}

//! Fetcher for NOAA decoded METAR reports
//!
//! Downloads `<base_url><STATION>.TXT` and wraps the raw bytes in an
//! unparsed [`WeatherReport`]. The fetcher never retries; any transport
//! failure or non-success status is returned as [`Error::Network`].

use std::time::Duration;

use tracing::{debug, info};

use crate::app::models::WeatherReport;
use crate::config::Config;
use crate::constants::report_url;
use crate::{Error, Result};

/// HTTP fetcher for decoded reports
#[derive(Debug, Clone)]
pub struct ReportFetcher {
    config: Config,
    client: reqwest::Client,
}

impl ReportFetcher {
    /// Create a fetcher for a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone());

        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(|e| {
                Error::configuration(format!("Invalid proxy URL '{}': {}", proxy, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            Error::configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// URL of the report for a station
    pub fn report_url(&self, station: &str) -> String {
        report_url(&self.config.base_url, station)
    }

    /// Wrap report bytes obtained elsewhere into an unparsed report
    ///
    /// The report URL is the one this fetcher would have used.
    pub fn make_report(&self, station: &str, raw: impl Into<Vec<u8>>) -> WeatherReport {
        WeatherReport::from_raw(station, raw).with_report_url(self.report_url(station))
    }

    /// Download the report for a station
    ///
    /// The station code is trimmed and uppercased. An empty code fails with
    /// [`Error::EmptyStationId`] before any request is made.
    pub async fn fetch_report(&self, station: &str) -> Result<WeatherReport> {
        let station = normalize_station(station)?;
        let url = self.report_url(&station);
        info!("Fetching report for {} from {}", station, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::network(&url, format!("request failed: {}", e), Some(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::network(
                &url,
                format!("server answered {}", status),
                None,
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network(&url, format!("failed to read body: {}", e), Some(e)))?;
        debug!("Received {} bytes for {}", body.len(), station);

        Ok(WeatherReport::from_raw(station, body.to_vec()).with_report_url(url))
    }
}

/// Trim and uppercase a station code, rejecting empty input
pub fn normalize_station(station: &str) -> Result<String> {
    let station = station.trim();
    if station.is_empty() {
        return Err(Error::EmptyStationId);
    }
    Ok(station.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const SAMPLE: &str = "Somewhere, Nowhere (XXXX) 10-00N 020-00E 5M\nob: XXXX 011200Z FEW030\n";

    /// Serve one canned HTTP response and return the request line it saw
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            request.lines().next().unwrap_or_default().to_string()
        });

        (base_url, handle)
    }

    fn local_fetcher(base_url: &str) -> ReportFetcher {
        ReportFetcher::new(
            Config::default()
                .with_base_url(base_url)
                .with_timeout_secs(5)
                .without_system_proxy(),
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_station() {
        assert_eq!(normalize_station(" eham ").unwrap(), "EHAM");
        assert!(matches!(normalize_station(""), Err(Error::EmptyStationId)));
        assert!(matches!(normalize_station("   "), Err(Error::EmptyStationId)));
    }

    #[test]
    fn test_make_report() {
        let fetcher = local_fetcher("http://localhost/decoded/");
        let report = fetcher.make_report("EHAM", b"ob: EHAM".to_vec());

        assert_eq!(report.station_code, "EHAM");
        assert_eq!(
            report.report_url.as_deref(),
            Some("http://localhost/decoded/EHAM.TXT")
        );
        assert!(!report.valid);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = ReportFetcher::new(Config::default().with_timeout_secs(0)).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_fetch_report() {
        let (base_url, server) = serve_once("200 OK", SAMPLE).await;
        let fetcher = local_fetcher(&base_url);

        let report = fetcher.fetch_report("xxxx").await.unwrap();
        let request_line = server.await.unwrap();

        assert_eq!(request_line, "GET /XXXX.TXT HTTP/1.1");
        assert_eq!(report.station_code, "XXXX");
        assert_eq!(report.full_report.as_deref(), Some(SAMPLE.as_bytes()));
        assert_eq!(report.report_url, Some(format!("{}XXXX.TXT", base_url)));
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_network_error() {
        let (base_url, server) = serve_once("404 Not Found", "missing").await;
        let fetcher = local_fetcher(&base_url);

        let err = fetcher.fetch_report("XXXX").await.unwrap_err();
        server.await.unwrap();

        assert!(err.is_network());
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_empty_station_makes_no_request() {
        // Nothing listens here, so any request would fail as a network error
        let fetcher = local_fetcher("http://127.0.0.1:9/");
        let err = fetcher.fetch_report("  ").await.unwrap_err();
        assert!(matches!(err, Error::EmptyStationId));
    }
}

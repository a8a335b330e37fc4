//! Fire-and-forget visit logging.
//!
//! A single background thread resolves the public IP, enriches it with a
//! geolocation lookup, and appends one JSON-line record to the visit log
//! under the platform data directory. Nothing on the render path waits on
//! this, and every failure is swallowed at the boundary: a portfolio page
//! must never break because an analytics lookup did.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Timeout for the geolocation HTTP request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Geolocation endpoint; with no IP path segment it resolves the caller.
const GEO_ENDPOINT: &str = "http://ip-api.com/json/";

/// File name of the append-only visit log.
const LOG_FILE: &str = "visits.jsonl";

/// Outcome of the logging attempt, for the status footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogStatus {
    /// Thread still running (or never finished).
    #[default]
    Pending,
    /// Record appended.
    Logged,
    /// Lookup or write failed; nothing was recorded.
    Failed,
}

/// One row of the visit log. Geo fields stay null when enrichment fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitRecord {
    pub timestamp: String,
    pub ip: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub isp: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Response shape of the ip-api.com JSON endpoint.
#[derive(Debug, Deserialize)]
struct GeoResponse {
    status: String,
    query: Option<String>,
    country: Option<String>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    isp: Option<String>,
    timezone: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Handle to the background logging thread.
#[derive(Debug)]
pub struct VisitorLogger {
    status: Arc<RwLock<LogStatus>>,
}

impl VisitorLogger {
    /// Spawn the logging thread and return its handle immediately.
    pub fn spawn() -> Self {
        let status = Arc::new(RwLock::new(LogStatus::Pending));
        let shared = status.clone();

        thread::spawn(move || {
            let outcome = log_visit();
            if let Ok(mut s) = shared.write() {
                *s = outcome;
            }
        });

        Self { status }
    }

    /// Current outcome, for display only.
    pub fn status(&self) -> LogStatus {
        self.status
            .read()
            .map(|s| *s)
            .unwrap_or(LogStatus::Pending)
    }
}

fn log_visit() -> LogStatus {
    let record = build_record();
    match append_record(&record) {
        Ok(()) => LogStatus::Logged,
        Err(_) => LogStatus::Failed,
    }
}

/// Build the record for this visit; enrichment failure degrades to an
/// all-null row with just the timestamp.
fn build_record() -> VisitRecord {
    let mut record = VisitRecord {
        timestamp: Utc::now().to_rfc3339(),
        ..VisitRecord::default()
    };

    if let Some(geo) = fetch_geo() {
        record.ip = geo.query;
        record.country = geo.country;
        record.city = geo.city;
        record.region = geo.region_name;
        record.isp = geo.isp;
        record.timezone = geo.timezone;
        record.latitude = geo.lat;
        record.longitude = geo.lon;
    }

    record
}

/// Fetch geolocation for the caller's public IP.
fn fetch_geo() -> Option<GeoResponse> {
    let agent = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build()
        .new_agent();

    let geo: GeoResponse = agent
        .get(GEO_ENDPOINT)
        .call()
        .ok()?
        .body_mut()
        .read_json()
        .ok()?;

    if geo.status == "success" { Some(geo) } else { None }
}

/// Append one JSON line to the visit log under the data directory.
fn append_record(record: &VisitRecord) -> std::io::Result<()> {
    let dir = myeongham_config::data_dir()
        .ok_or_else(|| std::io::Error::other("no data directory"))?;
    std::fs::create_dir_all(&dir)?;

    let line = serde_json::to_string(record)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;
    writeln!(file, "{line}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_expected_shape() {
        let record = VisitRecord {
            timestamp: "2026-08-26T00:00:00+00:00".to_string(),
            ip: Some("203.0.113.7".to_string()),
            country: Some("Korea".to_string()),
            city: None,
            region: None,
            isp: Some("Example ISP".to_string()),
            timezone: Some("Asia/Seoul".to_string()),
            latitude: Some(37.5),
            longitude: Some(127.0),
        };

        let json = serde_json::to_string(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ip"], "203.0.113.7");
        assert_eq!(value["city"], serde_json::Value::Null);
        assert_eq!(value["latitude"], 37.5);
    }

    #[test]
    fn test_geo_response_parses_provider_fields() {
        let geo: GeoResponse = serde_json::from_str(
            r#"{
                "status": "success",
                "query": "203.0.113.7",
                "country": "South Korea",
                "city": "Seoul",
                "regionName": "Seoul",
                "isp": "Example ISP",
                "timezone": "Asia/Seoul",
                "lat": 37.56,
                "lon": 126.97
            }"#,
        )
        .unwrap();

        assert_eq!(geo.status, "success");
        assert_eq!(geo.region_name.as_deref(), Some("Seoul"));
        assert_eq!(geo.lat, Some(37.56));
    }

    #[test]
    fn test_failed_lookup_status_is_rejected() {
        let geo: GeoResponse =
            serde_json::from_str(r#"{"status": "fail", "query": "127.0.0.1"}"#).unwrap();
        assert_ne!(geo.status, "success");
    }
}

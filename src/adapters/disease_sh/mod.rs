//! disease.sh adapter: Implementation of StatsSource over HTTP.
//!
//! Two endpoints are used:
//! - `{base}/countries`: current per-country totals with nested coordinates
//! - `{base}/historical/all?lastdays=N`: global cumulative cases keyed by `M/D/YY`
//!
//! Requests are blocking and carry a bounded timeout; callers run them off the
//! UI thread.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{MapPoint, TrendPoint};
use crate::ports::{SourceError, StatsSource};

/// Default API base.
pub const DEFAULT_BASE_URL: &str = "https://disease.sh/v3/covid-19";

/// Configuration for the statistics client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Length of the trend window in days
    pub history_days: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            history_days: 30,
        }
    }
}

impl ApiConfig {
    /// Load config overrides from environment (best-effort).
    ///
    /// Supported:
    /// - HEALTHTRENDS_API_URL
    /// - HEALTHTRENDS_HTTP_TIMEOUT_SECS
    /// - HEALTHTRENDS_HISTORY_DAYS
    #[must_use]
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("HEALTHTRENDS_API_URL") {
            let v = v.trim().trim_end_matches('/');
            if v.starts_with("http://") || v.starts_with("https://") {
                cfg.base_url = v.to_string();
            }
        }

        if let Ok(v) = std::env::var("HEALTHTRENDS_HTTP_TIMEOUT_SECS") {
            if let Ok(secs) = v.trim().parse::<u64>() {
                if secs > 0 {
                    cfg.timeout = Duration::from_secs(secs);
                }
            }
        }

        if let Ok(v) = std::env::var("HEALTHTRENDS_HISTORY_DAYS") {
            if let Ok(days) = v.trim().parse::<usize>() {
                if days > 0 {
                    cfg.history_days = days;
                }
            }
        }

        cfg
    }
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    country: String,
    cases: u64,
    #[serde(rename = "countryInfo")]
    country_info: CountryInfo,
}

#[derive(Debug, Deserialize)]
struct CountryInfo {
    lat: f64,
    long: f64,
}

#[derive(Debug, Deserialize)]
struct HistoricalAll {
    cases: HashMap<String, u64>,
}

/// Parse the `/countries` payload.
///
/// # Errors
/// Returns [`SourceError::Malformed`] if the body does not have the expected
/// shape or contains no countries.
pub fn parse_countries(body: &str) -> Result<Vec<MapPoint>, SourceError> {
    let records: Vec<CountryRecord> =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;

    if records.is_empty() {
        return Err(SourceError::Malformed("no countries in response".to_string()));
    }

    Ok(records
        .into_iter()
        .map(|r| MapPoint {
            country: r.country,
            cases: r.cases,
            lat: r.country_info.lat,
            long: r.country_info.long,
        })
        .collect())
}

/// Parse the `/historical/all` payload, keeping the most recent `days` entries.
///
/// # Errors
/// Returns [`SourceError::Malformed`] on shape errors, unparseable dates or an
/// empty series.
pub fn parse_historical(body: &str, days: usize) -> Result<Vec<TrendPoint>, SourceError> {
    let data: HistoricalAll =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;

    let mut points = data
        .cases
        .into_iter()
        .map(|(key, cases)| {
            NaiveDate::parse_from_str(&key, "%m/%d/%y")
                .map(|date| TrendPoint { date, cases })
                .map_err(|e| SourceError::Malformed(format!("bad date {key:?}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if points.is_empty() {
        return Err(SourceError::Malformed("empty case series".to_string()));
    }

    // JSON object order is not meaningful once decoded; restore chronology.
    points.sort_by_key(|p| p.date);
    let skip = points.len().saturating_sub(days);
    Ok(points.split_off(skip))
}

/// Blocking HTTP client for the disease.sh statistics API.
pub struct DiseaseShClient {
    config: ApiConfig,
    http: reqwest::blocking::Client,
}

impl DiseaseShClient {
    /// Create a client with configuration from the environment.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(ApiConfig::from_env_or_default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_config(config: ApiConfig) -> Result<Self, SourceError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("healthtrends/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self { config, http })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn get(&self, url: &str) -> Result<String, SourceError> {
        tracing::debug!(url, "GET");

        let resp = self.http.get(url).send().map_err(map_transport_error)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        resp.text().map_err(map_transport_error)
    }
}

fn map_transport_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Network(e.to_string())
    }
}

impl StatsSource for DiseaseShClient {
    fn country_cases(&self) -> Result<Vec<MapPoint>, SourceError> {
        let body = self.get(&format!("{}/countries", self.config.base_url))?;
        parse_countries(&body)
    }

    fn historical_cases(&self, days: usize) -> Result<Vec<TrendPoint>, SourceError> {
        let body = self.get(&format!(
            "{}/historical/all?lastdays={days}",
            self.config.base_url
        ))?;
        parse_historical(&body, days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTRIES_FIXTURE: &str = r#"[
        {
            "updated": 1729300000000,
            "country": "Afghanistan",
            "countryInfo": {"_id": 4, "iso2": "AF", "iso3": "AFG", "lat": 33, "long": 65, "flag": "https://disease.sh/assets/img/flags/af.png"},
            "cases": 235214,
            "todayCases": 0,
            "deaths": 7998
        },
        {
            "updated": 1729300000000,
            "country": "France",
            "countryInfo": {"_id": 250, "iso2": "FR", "iso3": "FRA", "lat": 46, "long": 2, "flag": "https://disease.sh/assets/img/flags/fr.png"},
            "cases": 40138560,
            "todayCases": 0,
            "deaths": 167642
        }
    ]"#;

    const HISTORICAL_FIXTURE: &str = r#"{
        "cases": {"9/29/26": 100, "9/30/26": 110, "10/1/26": 125, "10/2/26": 130},
        "deaths": {"9/29/26": 1, "9/30/26": 1, "10/1/26": 2, "10/2/26": 2},
        "recovered": {"9/29/26": 0, "9/30/26": 0, "10/1/26": 0, "10/2/26": 0}
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_countries() {
        let points = parse_countries(COUNTRIES_FIXTURE).expect("Should parse");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].country, "Afghanistan");
        assert_eq!(points[0].cases, 235_214);
        assert_eq!(points[0].lat, 33.0);
        assert_eq!(points[0].long, 65.0);
        assert_eq!(points[1].country, "France");
    }

    #[test]
    fn test_parse_countries_missing_coordinates() {
        let body = r#"[{"country": "Nowhere", "cases": 5}]"#;
        assert!(matches!(
            parse_countries(body),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_countries_empty() {
        assert!(matches!(parse_countries("[]"), Err(SourceError::Malformed(_))));
    }

    #[test]
    fn test_parse_countries_not_json() {
        assert!(matches!(
            parse_countries("<html>502 Bad Gateway</html>"),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_historical_sorted_chronologically() {
        let points = parse_historical(HISTORICAL_FIXTURE, 30).expect("Should parse");
        let dates: Vec<_> = points.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2026, 9, 29),
                date(2026, 9, 30),
                date(2026, 10, 1),
                date(2026, 10, 2)
            ]
        );
        assert_eq!(points[2].cases, 125);
    }

    #[test]
    fn test_parse_historical_keeps_most_recent() {
        let points = parse_historical(HISTORICAL_FIXTURE, 2).expect("Should parse");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, date(2026, 10, 1));
        assert_eq!(points[1].date, date(2026, 10, 2));
    }

    #[test]
    fn test_parse_historical_bad_date() {
        let body = r#"{"cases": {"yesterday": 1}}"#;
        assert!(matches!(
            parse_historical(body, 30),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_historical_missing_cases() {
        let body = r#"{"message": "Country not found"}"#;
        assert!(matches!(
            parse_historical(body, 30),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert_eq!(cfg.history_days, 30);
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        let cfg = ApiConfig {
            // Port 9 (discard) on loopback is refused on test machines.
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
            history_days: 30,
        };
        let client = DiseaseShClient::with_config(cfg).expect("Should build client");
        let err = client.country_cases().unwrap_err();
        assert!(matches!(err, SourceError::Network(_) | SourceError::Timeout));
    }
}

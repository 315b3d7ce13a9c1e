//! OpenWeatherMap current-weather client

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::state::{FailureKind, QueryError, WeatherResult};

pub const DEFAULT_API_BASE: &str = "https://api.openweathermap.org";
const WEATHER_PATH: &str = "/data/2.5/weather";

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    main: MainReadings,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

/// Body the provider sends alongside a non-success status
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Request(_) => FailureKind::Network,
            FetchError::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
                FailureKind::NotFound
            }
            FetchError::Status { .. } => FailureKind::Provider,
            FetchError::Decode(_) => FailureKind::Malformed,
        }
    }
}

impl From<FetchError> for QueryError {
    fn from(error: FetchError) -> Self {
        let message = match &error {
            FetchError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        };
        QueryError::new(error.kind(), message)
    }
}

// ============================================================================
// Client
// ============================================================================

#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Full request URL; every query value is percent-encoded.
    pub fn request_url(&self, city: &str) -> String {
        format!(
            "{}{}?q={}&appid={}&units=metric",
            self.base_url,
            WEATHER_PATH,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key)
        )
    }

    /// One GET for the current weather in `city`.
    pub async fn current_weather(&self, city: &str) -> Result<WeatherResult, FetchError> {
        tracing::info!(city, "fetching current weather");

        let response = self.http.get(self.request_url(city)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = provider_message(&body).unwrap_or_else(|| status.to_string());
            tracing::warn!(city, %status, %message, "weather provider rejected query");
            return Err(FetchError::Status { status, message });
        }

        let result = parse_weather(&body)?;
        tracing::debug!(city, location = %result.location_name, "weather received");
        Ok(result)
    }
}

/// Parse a current-weather body into a `WeatherResult`. No rounding happens here.
pub fn parse_weather(body: &str) -> Result<WeatherResult, FetchError> {
    let data: WeatherResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let description = data
        .weather
        .into_iter()
        .next()
        .map(|c| c.description)
        .ok_or_else(|| FetchError::Decode("no weather conditions in response".into()))?;

    Ok(WeatherResult {
        location_name: data.name,
        temperature_celsius: data.main.temp,
        humidity_percent: data.main.humidity,
        condition_description: description,
    })
}

fn provider_message(body: &str) -> Option<String> {
    serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 21.4, "feels_like": 21.2, "pressure": 1012, "humidity": 64},
        "name": "London",
        "cod": 200
    }"#;

    fn client() -> WeatherClient {
        WeatherClient::new("https://example.test/", "k3y", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_parse_fixture_is_lossless() {
        let result = parse_weather(FIXTURE).unwrap();

        assert_eq!(
            result,
            WeatherResult {
                location_name: "London".into(),
                temperature_celsius: 21.4,
                humidity_percent: 64.0,
                condition_description: "light rain".into(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_provider_error_body() {
        let err = parse_weather(r#"{"cod":"404","message":"city not found"}"#).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Malformed);
    }

    #[test]
    fn test_parse_rejects_empty_conditions() {
        let body = r#"{"name":"X","main":{"temp":1.0,"humidity":2},"weather":[]}"#;
        let err = parse_weather(body).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Malformed);
    }

    #[test]
    fn test_request_url_encodes_city() {
        let url = client().request_url("São Paulo & co");

        assert_eq!(
            url,
            "https://example.test/data/2.5/weather?q=S%C3%A3o%20Paulo%20%26%20co&appid=k3y&units=metric"
        );
    }

    #[test]
    fn test_status_error_kinds() {
        let not_found = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            message: "city not found".into(),
        };
        let unauthorized = FetchError::Status {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid API key".into(),
        };

        assert_eq!(not_found.kind(), FailureKind::NotFound);
        assert_eq!(unauthorized.kind(), FailureKind::Provider);

        let error = QueryError::from(not_found);
        assert_eq!(error.message, "city not found");
    }

    #[test]
    fn test_provider_message_falls_back() {
        assert_eq!(
            provider_message(r#"{"cod":"401","message":"Invalid API key"}"#),
            Some("Invalid API key".to_string())
        );
        assert_eq!(provider_message("<html>bad gateway</html>"), None);
    }
}

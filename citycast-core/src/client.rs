use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::FetchError,
    model::{CityQuery, WeatherReading},
    temperature::{self, Kelvin},
};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for OpenWeatherMap's current-weather-by-city endpoint.
///
/// One lookup per call, nothing cached, nothing retried; repeating a call
/// re-fetches live data.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint, e.g. a mock server in tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Construct a client from stored configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `citycast configure` and enter your OpenWeatherMap API key."
            )
        })?;

        Ok(Self::new(api_key))
    }

    /// Fetch current conditions for `query`.
    ///
    /// An empty city name fails with [`FetchError::InvalidInput`] before any
    /// request is built. Everything that goes wrong after dispatch (transport
    /// errors, non-success statuses, bodies that don't parse into a complete
    /// reading) comes back as [`FetchError::Lookup`] with the cause attached.
    pub async fn fetch_weather(&self, query: &CityQuery) -> Result<WeatherReading, FetchError> {
        if query.is_empty() {
            return Err(FetchError::InvalidInput);
        }

        debug!(city = %query.city, "requesting current weather");

        self.fetch_current(query).await.map_err(|source| {
            warn!(city = %query.city, error = %source, "weather lookup failed");
            FetchError::Lookup {
                city: query.city.clone(),
                source,
            }
        })
    }

    async fn fetch_current(&self, query: &CityQuery) -> Result<WeatherReading> {
        let url = format!("{}/weather", self.base_url);
        let q = query.query_value();

        // No `units` parameter: the provider default is Kelvin and the
        // conversion below owns the unit handling.
        let res = self
            .http
            .get(&url)
            .query(&[("q", q.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await
            .context("Failed to send request to OpenWeatherMap")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeatherMap response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeatherMap request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: CurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeatherMap JSON")?;

        // A response without at least one condition entry is not a reading.
        let description = parsed
            .weather
            .first()
            .map(|entry| entry.description.as_str())
            .ok_or_else(|| anyhow!("Response contained no weather conditions"))?;

        let (celsius, fahrenheit) = temperature::convert(Kelvin::new(parsed.main.temp));

        Ok(WeatherReading {
            city: parsed.name,
            description: title_case(description),
            celsius: format_degrees(celsius.value(), 'C'),
            fahrenheit: format_degrees(fahrenheit.value(), 'F'),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    weather: Vec<ConditionEntry>,
    main: MainMeasurements,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainMeasurements {
    temp: f64,
}

/// Title-case a condition description: the first letter of each alphabetic
/// run is upper-cased, the rest lower-cased. `"clear sky"` becomes
/// `"Clear Sky"`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

/// Whole-degree display string with a trailing unit marker, e.g. `"10C"`.
///
/// Exact half-degrees round to even (`10.5` -> `"10"`, `11.5` -> `"12"`),
/// which is what `{:.0}` formatting does; the same rule applies to both
/// scales.
fn format_degrees(value: f64, unit: char) -> String {
    format!("{value:.0}{unit}")
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}

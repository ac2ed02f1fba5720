use serde::{Deserialize, Serialize};

/// A user-supplied lookup key: city name plus an optional country qualifier.
///
/// Nothing is validated here beyond what the lookup client checks
/// (non-emptiness of the city); whether the name resolves is entirely the
/// provider's call.
#[derive(Debug, Clone)]
pub struct CityQuery {
    pub city: String,
    pub country: Option<String>,
}

impl CityQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: None,
        }
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// The value sent as the provider's `q` parameter: `"London"` or
    /// `"London,us"`.
    pub fn query_value(&self) -> String {
        match &self.country {
            Some(country) => format!("{},{}", self.city, country),
            None => self.city.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_empty()
    }
}

/// One point-in-time observation, normalized and ready to display.
///
/// Constructed only from a fully parsed provider response; the temperature
/// fields are already rounded to whole degrees and carry their unit marker
/// (`"10C"`, `"50F"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// City name as reported by the provider, not as typed by the user.
    pub city: String,
    /// Title-cased condition text, e.g. `"Clear Sky"`.
    pub description: String,
    pub celsius: String,
    pub fahrenheit: String,
}

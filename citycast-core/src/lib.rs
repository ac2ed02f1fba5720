//! Core library for the `citycast` CLI.
//!
//! This crate defines:
//! - The OpenWeatherMap client and its fetch flow
//! - Temperature scales and the Kelvin-to-display conversion
//! - Shared domain models (city queries, weather readings)
//! - Configuration & credentials handling
//!
//! It is used by `citycast-cli`, but can also be reused by other binaries or
//! services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod temperature;

pub use client::WeatherClient;
pub use config::Config;
pub use error::FetchError;
pub use model::{CityQuery, WeatherReading};
pub use temperature::{Celsius, Fahrenheit, Kelvin, convert};

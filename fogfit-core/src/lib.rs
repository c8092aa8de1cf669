//! Core library for FogFit: "what should I wear right now in neighborhood X".
//!
//! This crate defines:
//! - Configuration (file plus environment overlay)
//! - Weather providers (NOAA, Open-Meteo, offline) behind one trait
//! - The fallback chain that always yields a reading
//! - Fog detection, outfit rules and timestamp display
//!
//! It is used by `fogfit-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod fog;
pub mod localize;
pub mod model;
pub mod neighborhoods;
pub mod outfit;
pub mod provider;
pub mod recommender;
pub mod resolver;
pub mod units;

pub use config::Config;
pub use error::ProviderError;
pub use model::{Coordinate, HourReading, Recommendation, Resolution};
pub use provider::{ProviderId, WeatherProvider};
pub use recommender::Recommender;
pub use resolver::FallbackResolver;

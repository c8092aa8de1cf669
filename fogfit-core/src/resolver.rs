//! Provider failover: primary, then secondary, then the offline generator.

use tracing::{info, warn};

use crate::{
    Coordinate, HourReading, Resolution,
    error::ProviderError,
    provider::{WeatherProvider, offline::OfflineProvider},
};

pub const FALLBACK_MARKER: &str = " (fallback)";
pub const FORCED_OFFLINE_NOTE: &str = "Forced offline mode";

enum State {
    TryPrimary,
    TrySecondary { primary: ProviderError },
    UseOffline { note: String },
    Done { reading: HourReading, note: String },
}

/// Tries each provider exactly once, in order, and never fails.
#[derive(Debug)]
pub struct FallbackResolver {
    primary: Box<dyn WeatherProvider>,
    secondary: Box<dyn WeatherProvider>,
    offline: OfflineProvider,
    force_offline: bool,
}

impl FallbackResolver {
    pub fn new(
        primary: Box<dyn WeatherProvider>,
        secondary: Box<dyn WeatherProvider>,
        force_offline: bool,
    ) -> Self {
        Self { primary, secondary, offline: OfflineProvider::new(), force_offline }
    }

    pub async fn resolve(&self, coord: Coordinate) -> Resolution {
        let mut state = if self.force_offline {
            State::UseOffline { note: FORCED_OFFLINE_NOTE.to_string() }
        } else {
            State::TryPrimary
        };

        loop {
            state = match state {
                State::TryPrimary => match self.primary.fetch(coord).await {
                    Ok(reading) => {
                        State::Done { reading, note: format!("{} OK", self.primary.id()) }
                    }
                    Err(primary) => {
                        warn!(provider = %self.primary.id(), error = %primary, "provider failed, falling back");
                        State::TrySecondary { primary }
                    }
                },
                State::TrySecondary { primary } => match self.secondary.fetch(coord).await {
                    Ok(mut reading) => {
                        reading.short_forecast.push_str(FALLBACK_MARKER);
                        let note = format!(
                            "{} failed: {}: {}",
                            self.primary.id(),
                            primary.category(),
                            primary
                        );
                        State::Done { reading, note }
                    }
                    Err(secondary) => {
                        warn!(provider = %self.secondary.id(), error = %secondary, "provider failed, using offline data");
                        let note = format!(
                            "{} failed: {}; {} failed: {}; using offline",
                            self.primary.id(),
                            primary,
                            self.secondary.id(),
                            secondary
                        );
                        State::UseOffline { note }
                    }
                },
                State::UseOffline { note } => {
                    State::Done { reading: self.offline.generate(coord), note }
                }
                State::Done { reading, note } => {
                    info!(source = %reading.provider, %note, "resolved current hour");
                    return Resolution { reading, note };
                }
            };
        }
    }
}

//! Fluent configuration builder
//!
//! Starts from a preset and layers individual overrides on top; `build`
//! validates the result.

use crate::{
    animation::interpolation::EasingFunction,
    core::{
        config::{BoundaryStyle, ConfigPreset, GeoQueryConfig, TileSourceConfig},
        geo::LatLng,
    },
    Result,
};
use std::time::Duration;

/// Builder for [`GeoQueryConfig`]
pub struct GeoQueryBuilder {
    config: GeoQueryConfig,
}

impl GeoQueryBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::from_preset(ConfigPreset::Default)
    }

    pub fn from_preset(preset: ConfigPreset) -> Self {
        Self {
            config: preset.resolve(),
        }
    }

    /// Set the base URL of the query server
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the initial center and zoom level
    pub fn with_initial_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.config.initial_view.center = center;
        self.config.initial_view.zoom = zoom;
        self
    }

    pub fn with_tile_source(mut self, tiles: TileSourceConfig) -> Self {
        self.config.tiles = tiles;
        self
    }

    pub fn with_boundary_style(mut self, style: BoundaryStyle) -> Self {
        self.config.boundary_style = style;
        self
    }

    pub fn with_scroll_duration(mut self, duration: Duration) -> Self {
        self.config.scroll.duration_ms = duration.as_millis() as u64;
        self
    }

    pub fn with_scroll_easing(mut self, easing: EasingFunction) -> Self {
        self.config.scroll.easing = easing;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.config.scroll.frame_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.config.messages.failure = message.into();
        self
    }

    pub fn with_validation_message(mut self, message: impl Into<String>) -> Self {
        self.config.messages.validation = message.into();
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<GeoQueryConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for GeoQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = GeoQueryBuilder::new()
            .with_endpoint("https://geo.example.org")
            .with_initial_view(LatLng::new(10.0, 20.0), 4.0)
            .with_scroll_duration(Duration::from_millis(300))
            .with_failure_message("nope")
            .build()
            .unwrap();

        assert_eq!(config.query_url(), "https://geo.example.org/process_query");
        assert_eq!(config.initial_view.center, LatLng::new(10.0, 20.0));
        assert_eq!(config.scroll.duration_ms, 300);
        assert_eq!(config.messages.failure, "nope");
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let result = GeoQueryBuilder::from_preset(ConfigPreset::Instant)
            .with_frame_interval(Duration::ZERO)
            .build();
        assert!(result.is_err());
    }
}

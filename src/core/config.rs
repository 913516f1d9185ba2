//! Configuration for the query pipeline
//!
//! Everything tunable lives in [`GeoQueryConfig`]: where queries are sent,
//! how the map starts out, how boundaries are styled, how the scroll to the
//! map behaves and which messages the user sees. Presets cover the common
//! cases; [`crate::core::builder::GeoQueryBuilder`] covers the rest.

use crate::{
    animation::interpolation::EasingFunction,
    core::{constants, geo::LatLng},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigPreset {
    /// Page-like behavior: animated scroll, OSM tiles, default endpoint
    Default,
    /// No scroll animation; the page jumps straight to the map
    Instant,
    Custom(GeoQueryConfig),
}

impl ConfigPreset {
    pub fn resolve(&self) -> GeoQueryConfig {
        match self {
            Self::Default => GeoQueryConfig::default(),
            Self::Instant => GeoQueryConfig {
                scroll: ScrollConfig {
                    duration_ms: 0,
                    easing: EasingFunction::Linear,
                    ..ScrollConfig::default()
                },
                ..GeoQueryConfig::default()
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for ConfigPreset {
    fn default() -> Self {
        Self::Default
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GeoQueryConfig {
    /// Base URL of the server hosting the query endpoint
    pub endpoint: String,
    pub initial_view: InitialView,
    pub tiles: TileSourceConfig,
    pub boundary_style: BoundaryStyle,
    pub scroll: ScrollConfig,
    pub messages: MessageConfig,
}

impl Default for GeoQueryConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            initial_view: InitialView::default(),
            tiles: TileSourceConfig::default(),
            boundary_style: BoundaryStyle::default(),
            scroll: ScrollConfig::default(),
            messages: MessageConfig::default(),
        }
    }
}

impl GeoQueryConfig {
    /// Full URL the query is POSTed to
    pub fn query_url(&self) -> String {
        format!(
            "{}{}",
            self.endpoint.trim_end_matches('/'),
            constants::QUERY_PATH
        )
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(Box::new(Error::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            ))));
        }
        if !self.initial_view.center.is_valid() {
            return Err(Box::new(Error::InvalidCoordinates(format!(
                "initial center {:?}",
                self.initial_view.center
            ))));
        }
        if self.initial_view.zoom < 0.0 {
            return Err(Box::new(Error::Config(format!(
                "initial zoom must not be negative, got {}",
                self.initial_view.zoom
            ))));
        }
        if !self.tiles.url_template.contains("{z}") {
            return Err(Box::new(Error::Config(
                "tile url template needs a {z} placeholder".to_string(),
            )));
        }
        self.boundary_style.validate()?;
        if self.scroll.frame_interval_ms == 0 {
            return Err(Box::new(Error::Config(
                "frame interval must be at least 1ms".to_string(),
            )));
        }
        Ok(())
    }
}

/// Where the map starts before any query has been answered
#[derive(Debug, Clone, PartialEq)]
pub struct InitialView {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            center: constants::DEFAULT_CENTER.into(),
            zoom: constants::DEFAULT_ZOOM,
        }
    }
}

/// Base tile layer source
#[derive(Debug, Clone, PartialEq)]
pub struct TileSourceConfig {
    pub url_template: String,
    pub attribution: String,
    pub subdomains: Vec<char>,
}

impl Default for TileSourceConfig {
    fn default() -> Self {
        Self {
            url_template: constants::OSM_TILE_URL.to_string(),
            attribution: constants::OSM_ATTRIBUTION.to_string(),
            subdomains: vec!['a', 'b', 'c'],
        }
    }
}

/// Stroke and fill applied to every boundary overlay
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryStyle {
    pub color: String,
    pub weight: f32,
    pub opacity: f32,
    pub fill_color: String,
    pub fill_opacity: f32,
}

impl Default for BoundaryStyle {
    fn default() -> Self {
        Self {
            color: constants::BOUNDARY_COLOR.to_string(),
            weight: constants::BOUNDARY_WEIGHT,
            opacity: constants::BOUNDARY_OPACITY,
            fill_color: constants::BOUNDARY_COLOR.to_string(),
            fill_opacity: constants::BOUNDARY_FILL_OPACITY,
        }
    }
}

impl BoundaryStyle {
    fn validate(&self) -> Result<()> {
        for (name, value) in [("opacity", self.opacity), ("fill_opacity", self.fill_opacity)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Box::new(Error::Config(format!(
                    "boundary {} must be within 0..=1, got {}",
                    name, value
                ))));
            }
        }
        if self.weight < 0.0 {
            return Err(Box::new(Error::Config(format!(
                "boundary weight must not be negative, got {}",
                self.weight
            ))));
        }
        Ok(())
    }
}

/// Smooth scroll settings
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
    /// Zero disables the animation: the first frame lands on the target
    pub duration_ms: u64,
    pub easing: EasingFunction,
    /// Period of the tokio frame clock
    pub frame_interval_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: constants::SCROLL_DURATION_MS,
            easing: EasingFunction::EaseInOutQuad,
            frame_interval_ms: constants::FRAME_INTERVAL_MS,
        }
    }
}

/// User-facing strings
#[derive(Debug, Clone, PartialEq)]
pub struct MessageConfig {
    pub validation: String,
    pub failure: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            validation: constants::VALIDATION_MESSAGE.to_string(),
            failure: constants::FAILURE_MESSAGE.to_string(),
        }
    }
}

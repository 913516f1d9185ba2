//! # geoquery
//!
//! Sends free-text geospatial queries to a query endpoint and renders the
//! structured answer: text regions and location lists on a page surface,
//! markers and boundary overlays on a headless map model, and a smooth
//! scroll that brings the map into view.
//!
//! The host page and the pixel rendering of the map are external; they are
//! reached through [`page::PageSurface`] and the layer model in [`layers`].

pub mod animation;
pub mod client;
pub mod controller;
pub mod core;
pub mod data;
pub mod layers;
pub mod page;
pub mod prelude;
pub mod render;
mod sync;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::GeoQueryBuilder,
    config::GeoQueryConfig,
    geo::{LatLng, LatLngBounds},
    map::Map,
    viewport::Viewport,
};

pub use layers::{base::LayerTrait, marker::Marker, tile::TileLayer};

pub use animation::{
    clock::FrameClock,
    interpolation::EasingFunction,
    scroll::{Animator, ScrollAnimation},
};

pub use client::{
    model::{Boundary, Location, MapData, QueryRequest, QueryResponse},
    transport::{HttpTransport, QueryTransport},
};

pub use controller::{QueryController, SubmitOutcome};

pub use data::geojson::{GeoJson, GeoJsonLayer};

pub use page::{headless::HeadlessPage, ElementId, PageSurface};

pub use render::{presenter::ResponsePresenter, renderer::MapRenderer};

/// Installs `env_logger` with `info` as the default level. Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GeoQueryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Query endpoint responded with status {status}{}", status_detail(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Page element not found: {0}")]
    MissingElement(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

fn status_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {}", detail))
        .unwrap_or_default()
}

/// Error type alias for convenience
pub type Error = GeoQueryError;

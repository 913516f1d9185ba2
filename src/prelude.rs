//! Prelude module for common geoquery types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use geoquery::prelude::*;`

pub use crate::core::{
    builder::GeoQueryBuilder,
    config::{
        BoundaryStyle, ConfigPreset, GeoQueryConfig, InitialView, MessageConfig, ScrollConfig,
        TileSourceConfig,
    },
    geo::{LatLng, LatLngBounds},
    map::Map,
    viewport::Viewport,
};

pub use crate::layers::{
    base::{LayerProperties, LayerTrait, LayerType},
    manager::LayerManager,
    marker::Marker,
    tile::TileLayer,
};

pub use crate::data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry, GeoJsonLayer};

pub use crate::animation::{
    clock::FrameClock,
    interpolation::{EasingFunction, Interpolation},
    scroll::{Animator, ScrollAnimation, ScrollFrame},
};

#[cfg(feature = "tokio-runtime")]
pub use crate::animation::clock::TokioFrameClock;

pub use crate::client::{
    model::{Boundary, Location, MapData, QueryRequest, QueryResponse},
    transport::{HttpTransport, QueryTransport},
};

pub use crate::page::{headless::HeadlessPage, ElementId, LocationList, PageSurface, TextRegion};

pub use crate::render::{presenter::ResponsePresenter, renderer::MapRenderer};

pub use crate::controller::{QueryController, SubmitOutcome};

pub use crate::{Error as GeoQueryError, Result};

pub use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

pub use futures::Future;
pub use std::pin::Pin;

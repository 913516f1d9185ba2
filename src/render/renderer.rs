//! Map side of a query response
//!
//! [`MapRenderer`] owns the map for the lifetime of the page. It remembers
//! the id of every marker and boundary layer it adds so that [`MapRenderer::clear`]
//! removes exactly those, leaving the base tiles alone.

use crate::{
    client::model::{Boundary, MapData},
    core::{
        config::GeoQueryConfig,
        constants::{CITY_ZOOM, COUNTRY_ZOOM, REGION_ZOOM},
        map::Map,
    },
    data::geojson::{FeatureStyle, GeoJson, GeoJsonLayer},
    layers::{
        base::LayerType,
        marker::Marker,
        tile::{TileLayer, TileLayerOptions},
    },
    Result,
};

pub const BASE_TILE_LAYER_ID: &str = "base-tiles";

/// Zoom for a location type, by case-insensitive substring in priority order
pub fn zoom_for_location_type(location_type: &str, fallback: f64) -> f64 {
    let location_type = location_type.to_lowercase();
    if location_type.contains("country") {
        COUNTRY_ZOOM
    } else if location_type.contains("state") || location_type.contains("province") {
        REGION_ZOOM
    } else if location_type.contains("city") || location_type.contains("town") {
        CITY_ZOOM
    } else {
        fallback
    }
}

pub struct MapRenderer {
    map: Map,
    boundary_style: FeatureStyle,
    owned_layers: Vec<String>,
    next_layer_id: u64,
}

impl MapRenderer {
    /// Creates the map at the configured initial view with its base tile layer
    pub fn initialize(config: &GeoQueryConfig) -> Result<Self> {
        let mut map = Map::new(config.initial_view.center, config.initial_view.zoom);
        map.add_layer(Box::new(TileLayer::with_options(
            BASE_TILE_LAYER_ID.to_string(),
            "Base tiles".to_string(),
            TileLayerOptions::from(config.tiles.clone()),
        )))?;
        log::info!(
            "map initialized at ({}, {}) zoom {}",
            config.initial_view.center.lat,
            config.initial_view.center.lng,
            config.initial_view.zoom
        );

        Ok(Self {
            map,
            boundary_style: FeatureStyle::from(&config.boundary_style),
            owned_layers: Vec::new(),
            next_layer_id: 0,
        })
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Ids of the result layers currently on the map, in insertion order
    pub fn owned_layers(&self) -> &[String] {
        &self.owned_layers
    }

    pub fn marker_count(&self) -> usize {
        self.map.layers_of_type(LayerType::Marker).len()
    }

    pub fn boundary_count(&self) -> usize {
        self.map.layers_of_type(LayerType::Vector).len()
    }

    /// Removes every marker and boundary this renderer added
    pub fn clear(&mut self) -> Result<()> {
        let count = self.owned_layers.len();
        for id in std::mem::take(&mut self.owned_layers) {
            self.map.remove_layer(&id)?;
        }
        if count > 0 {
            log::debug!("cleared {} result layers", count);
        }
        Ok(())
    }

    /// Recenters on the markers and draws markers and boundaries
    pub fn update(&mut self, map_data: &MapData) -> Result<()> {
        if let Some(first) = map_data.markers.first() {
            let zoom = zoom_for_location_type(&first.location_type, map_data.zoom);
            if let Err(e) = self.map.set_view(map_data.center(), zoom) {
                log::warn!("keeping the current view: {}", e);
            }

            for marker in &map_data.markers {
                let id = self.allocate_id("marker");
                let layer = Marker::new(id.clone(), marker.lat_lng())
                    .with_name(marker.name.clone())
                    .with_popup(format!("{} ({})", marker.name, marker.location_type));
                self.map.add_layer(Box::new(layer))?;
                self.owned_layers.push(id);
            }
        }

        if let Some(boundaries) = &map_data.boundaries {
            for boundary in boundaries {
                self.add_boundary(boundary)?;
            }
        }
        Ok(())
    }

    /// `clear` followed by `update`
    pub fn render(&mut self, map_data: &MapData) -> Result<()> {
        self.clear()?;
        self.update(map_data)
    }

    fn add_boundary(&mut self, boundary: &Boundary) -> Result<()> {
        let data = match GeoJson::from_value(boundary.geojson.clone()) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("skipping boundary '{}': {}", boundary.name, e);
                return Ok(());
            }
        };

        let id = self.allocate_id("boundary");
        let layer = GeoJsonLayer::new(id.clone(), data)
            .with_name(boundary.name.clone())
            .with_style(self.boundary_style.clone())
            .with_popup(boundary.name.clone());
        self.map.add_layer(Box::new(layer))?;
        self.owned_layers.push(id);
        Ok(())
    }

    fn allocate_id(&mut self, kind: &str) -> String {
        self.next_layer_id += 1;
        format!("{}-{}", kind, self.next_layer_id)
    }
}

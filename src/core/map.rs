use crate::{
    core::{geo::LatLng, viewport::Viewport},
    layers::{
        base::{LayerTrait, LayerType},
        manager::LayerManager,
        tile::TileLayer,
    },
    Error, Result,
};

#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Report tile attributions through [`Map::attributions`]
    pub attribution_control: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            attribution_control: true,
        }
    }
}

/// Headless map widget state: the view and the layers stacked on it.
///
/// Pixel rendering is left to whatever host draws the map; this type is the
/// single source of truth about what should be drawn.
pub struct Map {
    viewport: Viewport,
    layer_manager: LayerManager,
    options: MapOptions,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self::with_options(Viewport::new(center, zoom), MapOptions::default())
    }

    pub fn with_options(viewport: Viewport, options: MapOptions) -> Self {
        Self {
            viewport,
            layer_manager: LayerManager::new(),
            options,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn center(&self) -> LatLng {
        self.viewport.center
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    /// Pans and zooms to a center + zoom pair. Like a slippy map, any finite
    /// pair is accepted, including one outside the usual lat/lng ranges.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) -> Result<()> {
        if !center.is_finite() || !zoom.is_finite() {
            return Err(Box::new(Error::InvalidCoordinates(format!(
                "cannot center map on ({}, {}) at zoom {}",
                center.lat, center.lng, zoom
            ))));
        }
        self.viewport.set_view(center, zoom);
        log::debug!(
            "map view set to ({:.4}, {:.4}) @ zoom {}",
            center.lat,
            center.lng,
            self.viewport.zoom
        );
        Ok(())
    }

    /// Adds a layer; ids must be unique within the map
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        if self.layer_manager.get_layer(layer.id()).is_some() {
            return Err(Box::new(Error::Layer(format!(
                "layer '{}' is already on the map",
                layer.id()
            ))));
        }
        log::debug!("adding {} layer '{}'", layer.layer_type(), layer.id());
        self.layer_manager.add_layer(layer)
    }

    pub fn remove_layer(&mut self, layer_id: &str) -> Result<Option<Box<dyn LayerTrait>>> {
        let removed = self.layer_manager.remove_layer(layer_id)?;
        if removed.is_some() {
            log::debug!("removed layer '{}'", layer_id);
        }
        Ok(removed)
    }

    pub fn has_layer(&self, layer_id: &str) -> bool {
        self.layer_manager.get_layer(layer_id).is_some()
    }

    pub fn layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layer_manager.get_layer(layer_id)
    }

    /// All layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.layer_manager.layers()
    }

    pub fn layers_of_type(&self, layer_type: LayerType) -> Vec<&dyn LayerTrait> {
        self.layer_manager
            .layers()
            .into_iter()
            .filter(|layer| layer.layer_type() == layer_type)
            .collect()
    }

    pub fn layer_count(&self) -> usize {
        self.layer_manager.len()
    }

    /// Popups a click at `point` would open, topmost first
    pub fn popups_at(&self, point: &LatLng) -> Vec<&str> {
        let mut popups: Vec<&str> = self
            .layer_manager
            .layers()
            .into_iter()
            .filter(|layer| layer.is_visible() && layer.hit_test(point))
            .filter_map(|layer| layer.popup())
            .collect();
        popups.reverse();
        popups
    }

    /// Attribution strings of the visible tile layers
    pub fn attributions(&self) -> Vec<String> {
        if !self.options.attribution_control {
            return Vec::new();
        }
        self.layers_of_type(LayerType::Tile)
            .into_iter()
            .filter(|layer| layer.is_visible())
            .filter_map(|layer| layer.as_any().downcast_ref::<TileLayer>())
            .map(|tile| tile.attribution().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::marker::Marker;

    #[test]
    fn test_set_view_accepts_any_finite_center() {
        let mut map = Map::new(LatLng::default(), 2.0);
        map.set_view(LatLng::new(48.8566, 2.3522), 7.0).unwrap();
        assert_eq!(map.center(), LatLng::new(48.8566, 2.3522));
        assert_eq!(map.zoom(), 7.0);

        map.set_view(LatLng::new(95.0, 190.0), 4.0).unwrap();
        assert_eq!(map.center(), LatLng::new(95.0, 190.0));
        assert_eq!(map.zoom(), 4.0);
    }

    #[test]
    fn test_set_view_rejects_non_finite_values() {
        let mut map = Map::new(LatLng::default(), 2.0);
        assert!(map.set_view(LatLng::new(f64::NAN, 0.0), 5.0).is_err());
        assert!(map.set_view(LatLng::new(0.0, 0.0), f64::INFINITY).is_err());
        assert_eq!(map.center(), LatLng::default());
        assert_eq!(map.zoom(), 2.0);
    }

    #[test]
    fn test_duplicate_layer_ids_are_rejected() {
        let mut map = Map::new(LatLng::default(), 2.0);
        map.add_layer(Box::new(Marker::new("m1".into(), LatLng::default())))
            .unwrap();
        let second = map.add_layer(Box::new(Marker::new("m1".into(), LatLng::new(1.0, 1.0))));
        assert!(second.is_err());
        assert_eq!(map.layer_count(), 1);
    }

    #[test]
    fn test_popups_at_marker_position() {
        let mut map = Map::new(LatLng::default(), 2.0);
        let paris = LatLng::new(48.8566, 2.3522);
        map.add_layer(Box::new(
            Marker::new("paris".into(), paris).with_popup("Paris (City)".into()),
        ))
        .unwrap();

        assert_eq!(map.popups_at(&paris), vec!["Paris (City)"]);
        assert!(map.popups_at(&LatLng::new(0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_attributions_follow_tile_layers() {
        let mut map = Map::new(LatLng::default(), 2.0);
        map.add_layer(Box::new(TileLayer::openstreetmap("osm".into())))
            .unwrap();
        assert_eq!(map.attributions(), vec!["© OpenStreetMap contributors"]);
    }
}

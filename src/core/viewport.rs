use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Manages the current view of the map: center and zoom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        let mut viewport = Self {
            center,
            zoom,
            min_zoom: 0.0,
            max_zoom: 18.0,
        };
        viewport.zoom = viewport.clamp_zoom(zoom);
        viewport
    }

    /// Sets center and zoom in one step, clamping zoom to the allowed range
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = self.clamp_zoom(zoom);
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::default(), 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_view_clamps_zoom() {
        let mut viewport = Viewport::default();
        viewport.set_view(LatLng::new(48.8566, 2.3522), 25.0);
        assert_eq!(viewport.zoom, 18.0);
        assert_eq!(viewport.center.lat, 48.8566);

        viewport.set_view(LatLng::default(), -1.0);
        assert_eq!(viewport.zoom, 0.0);
    }
}

use crate::{
    core::{config::TileSourceConfig, constants::TILE_Z_INDEX},
    layers::base::{LayerProperties, LayerTrait, LayerType},
};

/// Configuration for a tile layer
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TileLayerOptions {
    /// URL template for tiles (e.g., "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
    pub url_template: String,
    /// Available subdomains for load balancing
    pub subdomains: Vec<char>,
    /// Attribution text
    pub attribution: String,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        TileSourceConfig::default().into()
    }
}

impl From<TileSourceConfig> for TileLayerOptions {
    fn from(config: TileSourceConfig) -> Self {
        Self {
            url_template: config.url_template,
            subdomains: config.subdomains,
            attribution: config.attribution,
            max_zoom: 18,
            min_zoom: 0,
        }
    }
}

/// Base raster layer. Only describes where tiles come from; fetching and
/// drawing them is up to the host that paints the map.
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
}

impl TileLayer {
    pub fn with_options(id: String, name: String, options: TileLayerOptions) -> Self {
        let properties =
            LayerProperties::new(id, name, LayerType::Tile).with_z_index(TILE_Z_INDEX);
        Self {
            properties,
            options,
        }
    }

    /// Create a tile layer for OpenStreetMap
    pub fn openstreetmap(id: String) -> Self {
        Self::with_options(id, "OpenStreetMap".to_string(), TileLayerOptions::default())
    }

    pub fn attribution(&self) -> &str {
        &self.options.attribution
    }

    pub fn url_template(&self) -> &str {
        &self.options.url_template
    }

    /// Resolves the URL of one tile; subdomains rotate by tile position
    pub fn tile_url(&self, x: u32, y: u32, z: u8) -> Option<String> {
        if z < self.options.min_zoom || z > self.options.max_zoom {
            return None;
        }
        let mut url = self
            .options
            .url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string());
        if !self.options.subdomains.is_empty() {
            let index = (x as usize + y as usize) % self.options.subdomains.len();
            url = url.replace("{s}", &self.options.subdomains[index].to_string());
        }
        Some(url)
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn options(&self) -> serde_json::Value {
        serde_json::to_value(&self.options).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_url_resolution() {
        let layer = TileLayer::openstreetmap("osm".into());
        assert_eq!(
            layer.tile_url(1, 2, 3).as_deref(),
            Some("https://a.tile.openstreetmap.org/3/1/2.png")
        );
        assert_eq!(
            layer.tile_url(2, 2, 3).as_deref(),
            Some("https://b.tile.openstreetmap.org/3/2/2.png")
        );
        assert!(layer.tile_url(0, 0, 19).is_none());
    }

    #[test]
    fn test_tile_layer_is_base_layer() {
        let layer = TileLayer::openstreetmap("osm".into());
        assert_eq!(layer.layer_type(), LayerType::Tile);
        assert_eq!(layer.z_index(), 0);
        assert_eq!(layer.attribution(), "© OpenStreetMap contributors");
        assert!(layer.popup().is_none());
    }
}

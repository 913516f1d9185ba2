use crate::{layers::base::LayerTrait, prelude::HashMap, Result};

/// Manages layers for the map, handling ordering
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Ordered list of layer IDs for rendering (sorted by z-index)
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
        }
    }

    /// Adds a layer to the manager
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        let z_index = layer.z_index();

        if self.layers.insert(layer_id.clone(), layer).is_some() {
            self.render_order.retain(|id| id != &layer_id);
        }

        // Insert in sorted order by z-index; equal z-indices keep insertion order
        let insert_pos = self
            .render_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.render_order.len());

        self.render_order.insert(insert_pos, layer_id);
        Ok(())
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Result<Option<Box<dyn LayerTrait>>> {
        self.render_order.retain(|id| id != layer_id);
        Ok(self.layers.remove(layer_id))
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Gets all layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::geo::LatLng, layers::marker::Marker, layers::tile::TileLayer};

    #[test]
    fn test_render_order_follows_z_index() {
        let mut manager = LayerManager::new();
        manager
            .add_layer(Box::new(Marker::new("m".into(), LatLng::default())))
            .unwrap();
        manager
            .add_layer(Box::new(TileLayer::openstreetmap("osm".into())))
            .unwrap();

        let ids: Vec<&str> = manager.layers().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["osm", "m"]);
    }

    #[test]
    fn test_remove_layer() {
        let mut manager = LayerManager::new();
        manager
            .add_layer(Box::new(Marker::new("m".into(), LatLng::default())))
            .unwrap();
        assert!(manager.remove_layer("m").unwrap().is_some());
        assert!(manager.remove_layer("m").unwrap().is_none());
        assert!(manager.is_empty());
        assert!(manager.layers().is_empty());
    }
}

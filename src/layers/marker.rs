use crate::{
    core::{
        constants::MARKER_Z_INDEX,
        geo::{LatLng, LatLngBounds},
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
};

/// A point annotation with an optional popup label
pub struct Marker {
    properties: LayerProperties,
    position: LatLng,
    popup_text: Option<String>,
}

impl Marker {
    pub fn new(id: String, position: LatLng) -> Self {
        let properties = LayerProperties::new(id, "Marker".to_string(), LayerType::Marker)
            .with_z_index(MARKER_Z_INDEX);
        Self {
            properties,
            position,
            popup_text: None,
        }
    }

    pub fn with_popup(mut self, text: String) -> Self {
        self.popup_text = Some(text);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.properties.name = name;
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }
}

impl LayerTrait for Marker {
    crate::impl_layer_trait!(Marker, properties);

    fn popup(&self) -> Option<&str> {
        self.popup_text.as_deref()
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "popup": self.popup_text
        })
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(LatLngBounds::new(self.position, self.position))
    }
}

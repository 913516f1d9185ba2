//! Wire model of the query endpoint

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Request body: `{"query": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// A named place. `coordinates` is `[lat, lon]`; any other length fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(rename = "type")]
    pub location_type: String,
    pub coordinates: [f64; 2],
    /// Only sent for implicit locations: `HIGH`, `MEDIUM` or `LOW`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, location_type: impl Into<String>, coordinates: [f64; 2]) -> Self {
        Self {
            name: name.into(),
            location_type: location_type.into(),
            coordinates,
            confidence: None,
            reason: None,
        }
    }

    pub fn lat_lng(&self) -> LatLng {
        self.coordinates.into()
    }
}

/// Map markers share the location shape
pub type Marker = Location;

/// A region to outline, as raw GeoJSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub name: String,
    pub geojson: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub center: [f64; 2],
    pub zoom: f64,
    pub markers: Vec<Marker>,
    /// `null` and absent both mean "no boundaries"
    #[serde(default)]
    pub boundaries: Option<Vec<Boundary>>,
}

impl MapData {
    pub fn center(&self) -> LatLng {
        self.center.into()
    }
}

/// Answer to one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub query_response: Option<String>,
    #[serde(default)]
    pub geospatial_context: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    /// Intent classification of the query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    pub explicit_locations: Vec<Location>,
    pub implicit_locations: Vec<Location>,
    pub map_data: MapData,
}

/// Body the server sends alongside a failure status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "query_response": "Paris is the capital of France.",
            "geospatial_context": "Western Europe",
            "additional_info": null,
            "intent": "information",
            "explicit_locations": [
                {"name": "Paris", "type": "City", "coordinates": [48.8566, 2.3522]}
            ],
            "implicit_locations": [
                {"name": "France", "type": "COUNTRY", "coordinates": [46.2276, 2.2137],
                 "confidence": "HIGH", "reason": "Paris is in France"}
            ],
            "map_data": {
                "center": [48.8566, 2.3522],
                "zoom": 10,
                "markers": [
                    {"name": "Paris", "type": "City", "coordinates": [48.8566, 2.3522]}
                ],
                "boundaries": null
            }
        })
    }

    #[test]
    fn test_response_decoding() {
        let response: QueryResponse = serde_json::from_value(sample()).unwrap();

        assert_eq!(response.additional_info, None);
        assert_eq!(response.intent.as_deref(), Some("information"));
        assert_eq!(response.explicit_locations[0].location_type, "City");
        assert_eq!(
            response.explicit_locations[0].lat_lng(),
            LatLng::new(48.8566, 2.3522)
        );
        assert_eq!(
            response.implicit_locations[0].confidence.as_deref(),
            Some("HIGH")
        );
        assert_eq!(response.map_data.zoom, 10.0);
        assert!(response.map_data.boundaries.is_none());
    }

    #[test]
    fn test_coordinates_must_be_a_pair() {
        let mut value = sample();
        value["explicit_locations"][0]["coordinates"] = serde_json::json!([48.8566, 2.3522, 35.0]);
        assert!(serde_json::from_value::<QueryResponse>(value).is_err());

        let mut value = sample();
        value["map_data"]["markers"][0]["coordinates"] = serde_json::json!([48.8566]);
        assert!(serde_json::from_value::<QueryResponse>(value).is_err());
    }

    #[test]
    fn test_missing_lists_fail_to_decode() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("explicit_locations");
        assert!(serde_json::from_value::<QueryResponse>(value).is_err());
    }

    #[test]
    fn test_request_encoding() {
        let body = serde_json::to_string(&QueryRequest::new("Where is Paris?")).unwrap();
        assert_eq!(body, r#"{"query":"Where is Paris?"}"#);
    }
}

use crate::{
    core::{
        config::BoundaryStyle,
        constants::OVERLAY_Z_INDEX,
        geo::{LatLng, LatLngBounds},
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
};
use geo::{BoundingRect, Contains};
use geo_types::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use serde::{Deserialize, Serialize};

/// GeoJSON geometry objects. Positions are `[lng, lat]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPoint {
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FeatureTag {
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FeatureCollectionTag {
    FeatureCollection,
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(rename = "type")]
    pub tag: FeatureTag,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}

impl GeoJsonFeature {
    pub fn new(geometry: GeoJsonGeometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            id: None,
            geometry: Some(geometry),
            properties: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeatureCollection {
    #[serde(rename = "type")]
    pub tag: FeatureCollectionTag,
    pub features: Vec<GeoJsonFeature>,
}

/// Root GeoJSON object: a bare geometry, a Feature or a FeatureCollection.
/// Boundary lookups usually hand back a bare Polygon or MultiPolygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoJson {
    Geometry(GeoJsonGeometry),
    FeatureCollection(GeoJsonFeatureCollection),
    Feature(GeoJsonFeature),
}

impl GeoJson {
    pub fn from_value(value: serde_json::Value) -> crate::Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)).into())
    }

    /// All geometries carried by this object, features without geometry skipped
    pub fn geometries(&self) -> Vec<&GeoJsonGeometry> {
        match self {
            GeoJson::Geometry(geometry) => vec![geometry],
            GeoJson::Feature(feature) => feature.geometry.iter().collect(),
            GeoJson::FeatureCollection(collection) => collection
                .features
                .iter()
                .filter_map(|f| f.geometry.as_ref())
                .collect(),
        }
    }
}

/// Style information for rendering GeoJSON features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStyle {
    pub stroke: String,
    pub stroke_width: f32,
    pub stroke_opacity: f32,
    pub fill: String,
    pub fill_opacity: f32,
}

impl Default for FeatureStyle {
    fn default() -> Self {
        Self {
            stroke: "#3388ff".to_string(),
            stroke_width: 3.0,
            stroke_opacity: 1.0,
            fill: "#3388ff".to_string(),
            fill_opacity: 0.2,
        }
    }
}

impl From<&BoundaryStyle> for FeatureStyle {
    fn from(style: &BoundaryStyle) -> Self {
        Self {
            stroke: style.color.clone(),
            stroke_width: style.weight,
            stroke_opacity: style.opacity,
            fill: style.fill_color.clone(),
            fill_opacity: style.fill_opacity,
        }
    }
}

/// Styled GeoJSON overlay on the map
pub struct GeoJsonLayer {
    properties: LayerProperties,
    data: GeoJson,
    shapes: Vec<Geometry<f64>>,
    style: FeatureStyle,
    popup_text: Option<String>,
}

impl GeoJsonLayer {
    pub fn new(id: String, data: GeoJson) -> Self {
        let shapes = data.geometries().into_iter().map(to_geometry).collect();
        let properties = LayerProperties::new(id, "GeoJSON".to_string(), LayerType::Vector)
            .with_z_index(OVERLAY_Z_INDEX);
        Self {
            properties,
            data,
            shapes,
            style: FeatureStyle::default(),
            popup_text: None,
        }
    }

    /// Sets the style for all features
    pub fn with_style(mut self, style: FeatureStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_popup(mut self, text: String) -> Self {
        self.popup_text = Some(text);
        self
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.properties.name = name;
        self
    }

    pub fn data(&self) -> &GeoJson {
        &self.data
    }

    pub fn style(&self) -> &FeatureStyle {
        &self.style
    }
}

impl LayerTrait for GeoJsonLayer {
    crate::impl_layer_trait!(GeoJsonLayer, properties);

    fn popup(&self) -> Option<&str> {
        self.popup_text.as_deref()
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for rect in self.shapes.iter().filter_map(|shape| shape.bounding_rect()) {
            let rect_bounds = LatLngBounds::from_coords(
                rect.min().y,
                rect.min().x,
                rect.max().y,
                rect.max().x,
            );
            bounds = Some(match bounds {
                Some(b) => b.union(&rect_bounds),
                None => rect_bounds,
            });
        }
        bounds
    }

    fn hit_test(&self, point: &LatLng) -> bool {
        let probe = Point::new(point.lng, point.lat);
        self.shapes.iter().any(|shape| match shape {
            Geometry::Polygon(polygon) => polygon.contains(&probe),
            Geometry::MultiPolygon(polygons) => polygons.0.iter().any(|p| p.contains(&probe)),
            other => other
                .bounding_rect()
                .map(|rect| {
                    probe.x() >= rect.min().x
                        && probe.x() <= rect.max().x
                        && probe.y() >= rect.min().y
                        && probe.y() <= rect.max().y
                })
                .unwrap_or(false),
        })
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "style": self.style,
            "popup": self.popup_text,
        })
    }
}

fn ring(coordinates: &[[f64; 2]]) -> LineString<f64> {
    LineString::from(
        coordinates
            .iter()
            .map(|c| (c[0], c[1]))
            .collect::<Vec<(f64, f64)>>(),
    )
}

fn polygon(rings: &[Vec<[f64; 2]>]) -> Polygon<f64> {
    match rings.split_first() {
        Some((exterior, interiors)) => Polygon::new(
            ring(exterior),
            interiors.iter().map(|r| ring(r)).collect(),
        ),
        None => Polygon::new(LineString::new(Vec::new()), Vec::new()),
    }
}

fn to_geometry(geometry: &GeoJsonGeometry) -> Geometry<f64> {
    match geometry {
        GeoJsonGeometry::Point { coordinates } => {
            Geometry::Point(Point::new(coordinates[0], coordinates[1]))
        }
        GeoJsonGeometry::LineString { coordinates } => Geometry::LineString(ring(coordinates)),
        GeoJsonGeometry::Polygon { coordinates } => Geometry::Polygon(polygon(coordinates)),
        GeoJsonGeometry::MultiPoint { coordinates } => Geometry::MultiPoint(MultiPoint(
            coordinates
                .iter()
                .map(|c| Point::new(c[0], c[1]))
                .collect(),
        )),
        GeoJsonGeometry::MultiLineString { coordinates } => Geometry::MultiLineString(
            MultiLineString(coordinates.iter().map(|line| ring(line)).collect()),
        ),
        GeoJsonGeometry::MultiPolygon { coordinates } => Geometry::MultiPolygon(MultiPolygon(
            coordinates.iter().map(|rings| polygon(rings)).collect(),
        )),
        GeoJsonGeometry::GeometryCollection { geometries } => Geometry::GeometryCollection(
            GeometryCollection(geometries.iter().map(to_geometry).collect()),
        ),
    }
}

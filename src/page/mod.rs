//! Page surface the pipeline writes into
//!
//! The host page (browser DOM, terminal, test double) is external. Everything
//! the pipeline needs from it goes through [`PageSurface`], addressed by the
//! element ids the page markup is expected to provide.

pub mod headless;

use std::fmt;

/// Elements the page is expected to provide, by DOM id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    QueryInput,
    SubmitQuery,
    Loading,
    QueryResponse,
    GeospatialContext,
    AdditionalInfo,
    ExplicitLocations,
    ImplicitLocations,
    MapSection,
    Map,
}

impl ElementId {
    pub const ALL: [ElementId; 10] = [
        ElementId::QueryInput,
        ElementId::SubmitQuery,
        ElementId::Loading,
        ElementId::QueryResponse,
        ElementId::GeospatialContext,
        ElementId::AdditionalInfo,
        ElementId::ExplicitLocations,
        ElementId::ImplicitLocations,
        ElementId::MapSection,
        ElementId::Map,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::QueryInput => "query-input",
            ElementId::SubmitQuery => "submit-query",
            ElementId::Loading => "loading",
            ElementId::QueryResponse => "query-response",
            ElementId::GeospatialContext => "geospatial-context",
            ElementId::AdditionalInfo => "additional-info",
            ElementId::ExplicitLocations => "explicit-locations",
            ElementId::ImplicitLocations => "implicit-locations",
            ElementId::MapSection => "map-section",
            ElementId::Map => "map",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|element| element.as_str() == id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar text regions filled from a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRegion {
    QueryResponse,
    GeospatialContext,
    AdditionalInfo,
}

impl TextRegion {
    pub const ALL: [TextRegion; 3] = [
        TextRegion::QueryResponse,
        TextRegion::GeospatialContext,
        TextRegion::AdditionalInfo,
    ];

    pub fn element(&self) -> ElementId {
        match self {
            TextRegion::QueryResponse => ElementId::QueryResponse,
            TextRegion::GeospatialContext => ElementId::GeospatialContext,
            TextRegion::AdditionalInfo => ElementId::AdditionalInfo,
        }
    }
}

/// The two location list displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationList {
    Explicit,
    Implicit,
}

impl LocationList {
    pub fn element(&self) -> ElementId {
        match self {
            LocationList::Explicit => ElementId::ExplicitLocations,
            LocationList::Implicit => ElementId::ImplicitLocations,
        }
    }
}

/// Host page operations.
///
/// List items and text are plain text; implementations must insert them as
/// text content, never as markup.
pub trait PageSurface: Send {
    /// Current value of the query input
    fn query_text(&self) -> String;

    /// Blocking, user-facing notice
    fn alert(&mut self, message: &str);

    fn set_loading(&mut self, visible: bool);

    /// Replaces the content of a text region
    fn set_text(&mut self, region: TextRegion, text: &str);

    /// Replaces the items of a list display; an empty slice clears it
    fn set_list_items(&mut self, list: LocationList, items: &[String]);

    /// Vertical page scroll offset in pixels
    fn scroll_offset(&self) -> f64;

    fn scroll_to(&mut self, offset: f64);

    /// Top edge of an element relative to the viewport, if the element exists
    fn element_top(&self, element: ElementId) -> Option<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_ids_round_trip() {
        for element in ElementId::ALL {
            assert_eq!(ElementId::from_dom_id(element.as_str()), Some(element));
        }
        assert_eq!(ElementId::from_dom_id("sidebar"), None);
        assert_eq!(ElementId::MapSection.to_string(), "map-section");
    }

    #[test]
    fn test_regions_map_to_elements() {
        assert_eq!(TextRegion::AdditionalInfo.element(), ElementId::AdditionalInfo);
        assert_eq!(LocationList::Implicit.element(), ElementId::ImplicitLocations);
    }
}

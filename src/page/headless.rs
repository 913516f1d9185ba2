use crate::{
    page::{ElementId, LocationList, PageSurface, TextRegion},
    prelude::HashMap,
};

/// In-memory page. Used by the terminal front end and by tests; keeps a
/// history of the side effects a real page would show.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    query: String,
    loading: bool,
    loading_history: Vec<bool>,
    alerts: Vec<String>,
    texts: HashMap<TextRegion, String>,
    lists: HashMap<LocationList, Vec<String>>,
    scroll_offset: f64,
    scroll_history: Vec<f64>,
    /// Absolute page offsets of laid-out elements
    layout: HashMap<ElementId, f64>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with the map section laid out at `offset` from the top
    pub fn with_map_section_at(offset: f64) -> Self {
        let mut page = Self::new();
        page.place_element(ElementId::MapSection, offset);
        page
    }

    pub fn set_query_text(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn place_element(&mut self, element: ElementId, absolute_top: f64) {
        self.layout.insert(element, absolute_top);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Every loading-indicator change, in order
    pub fn loading_history(&self) -> &[bool] {
        &self.loading_history
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn text(&self, region: TextRegion) -> &str {
        self.texts.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn list_items(&self, list: LocationList) -> &[String] {
        self.lists.get(&list).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every scroll position written, in order
    pub fn scroll_history(&self) -> &[f64] {
        &self.scroll_history
    }
}

impl PageSurface for HeadlessPage {
    fn query_text(&self) -> String {
        self.query.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        self.loading_history.push(visible);
    }

    fn set_text(&mut self, region: TextRegion, text: &str) {
        self.texts.insert(region, text.to_string());
    }

    fn set_list_items(&mut self, list: LocationList, items: &[String]) {
        self.lists.insert(list, items.to_vec());
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
        self.scroll_history.push(self.scroll_offset);
    }

    fn element_top(&self, element: ElementId) -> Option<f64> {
        self.layout
            .get(&element)
            .map(|absolute| absolute - self.scroll_offset)
    }
}

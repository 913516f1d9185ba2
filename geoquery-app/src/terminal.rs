use geoquery::{
    page::{ElementId, LocationList, PageSurface, TextRegion},
    LayerTrait, MapRenderer,
};

/// Virtual page height above the map section, in pixels
const MAP_SECTION_TOP: f64 = 720.0;

/// Page surface that writes everything to stdout
#[derive(Default)]
pub struct TerminalPage {
    query: String,
    scroll_offset: f64,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

impl PageSurface for TerminalPage {
    fn query_text(&self) -> String {
        self.query.clone()
    }

    fn alert(&mut self, message: &str) {
        eprintln!("! {}", message);
    }

    fn set_loading(&mut self, visible: bool) {
        if visible {
            println!("… asking");
        }
    }

    fn set_text(&mut self, region: TextRegion, text: &str) {
        if text.is_empty() {
            return;
        }
        println!("[{}]", region.element());
        println!("{}", text);
        println!();
    }

    fn set_list_items(&mut self, list: LocationList, items: &[String]) {
        if items.is_empty() {
            return;
        }
        println!("[{}]", list.element());
        for (i, item) in items.iter().enumerate() {
            println!("{:>3}. {}", i + 1, item);
        }
        println!();
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn scroll_to(&mut self, offset: f64) {
        log::trace!("scroll {:.0}px", offset);
        self.scroll_offset = offset;
    }

    fn element_top(&self, element: ElementId) -> Option<f64> {
        match element {
            ElementId::MapSection => Some(MAP_SECTION_TOP - self.scroll_offset),
            _ => None,
        }
    }
}

/// Prints the map view and every visible result layer
pub fn print_map(renderer: &MapRenderer) {
    let map = renderer.map();
    println!(
        "[map] ({:.4}, {:.4}) zoom {}",
        map.center().lat,
        map.center().lng,
        map.zoom()
    );
    for layer in map.layers() {
        if let Some(popup) = layer.popup() {
            println!("  {:<6} {}", layer.layer_type(), popup);
        }
    }
    for attribution in map.attributions() {
        println!("  {}", attribution);
    }
}

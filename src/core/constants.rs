//! Constants shared by the query pipeline, the map model and the page binding.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// Path of the query endpoint, relative to the configured base URL.
pub const QUERY_PATH: &str = "/process_query";

/// Base URL used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Initial map view: whole world.
pub const DEFAULT_CENTER: [f64; 2] = [0.0, 0.0];
pub const DEFAULT_ZOOM: f64 = 2.0;

/// OpenStreetMap raster tiles.
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Zoom picked from the first marker's location type.
pub const COUNTRY_ZOOM: f64 = 3.0;
pub const REGION_ZOOM: f64 = 5.0;
pub const CITY_ZOOM: f64 = 7.0;

/// Boundary overlay style.
pub const BOUNDARY_COLOR: &str = "#0000FF";
pub const BOUNDARY_WEIGHT: f32 = 2.0;
pub const BOUNDARY_OPACITY: f32 = 0.6;
pub const BOUNDARY_FILL_OPACITY: f32 = 0.2;

/// Smooth scroll to the map section.
pub const SCROLL_DURATION_MS: u64 = 1500;

/// ~60 Hz display refresh.
pub const FRAME_INTERVAL_MS: u64 = 16;

pub const VALIDATION_MESSAGE: &str = "Please enter a query before submitting. You can ask about countries, cities, landmarks, or any geographical features!";
pub const FAILURE_MESSAGE: &str = "An error occurred while processing your query.";

/// Marker and overlay stacking above the base tile layer.
pub const TILE_Z_INDEX: i32 = 0;
pub const OVERLAY_Z_INDEX: i32 = 200;
pub const MARKER_Z_INDEX: i32 = 600;

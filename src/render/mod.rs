pub mod presenter;
pub mod renderer;

pub use presenter::ResponsePresenter;
pub use renderer::{zoom_for_location_type, MapRenderer, BASE_TILE_LAYER_ID};

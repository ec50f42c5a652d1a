//! Map widget: projection math and the egui canvas

mod canvas;
pub mod projection;

pub use canvas::{MapCanvas, MapResponse, layer_colors};
pub use projection::MapView;

pub mod config;
pub mod derivation;
pub mod diagram;
pub mod format;
pub mod inputs;
pub mod points;

pub use config::CanvasSpec;
pub use derivation::{
    centimeter_per_degree, diagonal, diagonal_pixels, diagonal_screen_size, pixels_per_centimeter,
    pixels_per_degree, screen_size_in_degrees, truthy, DisplayMetrics, MetricKind,
};
pub use diagram::{project, Diagram, DrawCommand, Projection};
pub use format::{format_metric, parse_field, PLACEHOLDER};
pub use inputs::{DisplayInputs, InputField};
pub use points::Point;

mod use_display_metrics;
mod use_image;

pub use use_display_metrics::{use_display_metrics, DisplayMetricsMemos};
pub use use_image::use_image;

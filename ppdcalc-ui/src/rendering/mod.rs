pub mod canvas_utils;

pub use canvas_utils::draw_diagram;

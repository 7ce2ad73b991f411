//! Diagram canvas configuration.
//!
//! Geometry constants for the viewing-triangle diagram. The UI crate
//! builds its `<canvas>` from these values.

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 300;
/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;
/// Vertical room kept free below the apex for the eye icon.
pub const DEFAULT_APEX_MARGIN: f64 = 50.0;
/// Radius of the visual-angle arc drawn at the apex.
pub const DEFAULT_ARC_RADIUS: f64 = 30.0;
/// Edge length of the square eye icon.
pub const DEFAULT_ICON_SIZE: f64 = 30.0;

/// Fixed drawing surface the diagram is projected onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSpec {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Pixels reserved below the apex
    pub apex_margin: f64,
    /// Radius of the angle arc in pixels
    pub arc_radius: f64,
    /// Width and height of the eye icon in pixels
    pub icon_size: f64,
}

impl CanvasSpec {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Height available to the triangle once the apex margin is taken out.
    pub fn drawable_height(&self) -> f64 {
        self.height as f64 - self.apex_margin
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            apex_margin: DEFAULT_APEX_MARGIN,
            arc_radius: DEFAULT_ARC_RADIUS,
            icon_size: DEFAULT_ICON_SIZE,
        }
    }
}

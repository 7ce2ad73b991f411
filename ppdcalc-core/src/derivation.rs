//! Derivation chain from raw display geometry to pixels per degree.
//!
//! Every function here is pure. A derived value is `None` whenever one of
//! its direct inputs is `None`, zero or NaN, so absence cascades forward
//! through the chain:
//!
//! ```text
//! height_px, width_px ─────────► diagonal_pixels ──┐
//!                                                  ├─► pixels_per_centimeter ─┐
//! screen_height, screen_width ─► diagonal_screen ──┤                          ├─► pixels_per_degree
//!                                                  └─► screen_size_in_degrees │
//! distance ────────────────────► centimeter_per_degree ───────────────────────┘
//! ```

use crate::inputs::DisplayInputs;

/// Half of the one-degree visual angle used by [`centimeter_per_degree`].
const HALF_DEGREE: f64 = 0.5;

/// Keep a measurement only if it is "provided".
///
/// Zero and NaN are treated exactly like an empty field.
#[inline]
pub fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Euclidean diagonal of a `a × b` rectangle.
///
/// Both sides must be strictly positive.
pub fn diagonal(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) if a > 0.0 && b > 0.0 => Some(a.hypot(b)),
        _ => None,
    }
}

/// Diagonal resolution in pixels.
pub fn diagonal_pixels(inputs: &DisplayInputs) -> Option<f64> {
    diagonal(inputs.height_px, inputs.width_px)
}

/// Diagonal physical size in centimeters.
pub fn diagonal_screen_size(inputs: &DisplayInputs) -> Option<f64> {
    diagonal(inputs.screen_height_cm, inputs.screen_width_cm)
}

/// Pixel density along the diagonal, in pixels per centimeter.
pub fn pixels_per_centimeter(
    diagonal_pixels: Option<f64>,
    diagonal_screen_size: Option<f64>,
) -> Option<f64> {
    Some(truthy(diagonal_pixels)? / truthy(diagonal_screen_size)?)
}

/// Physical width (cm) subtended by one degree of visual field at `distance_cm`.
pub fn centimeter_per_degree(distance_cm: Option<f64>) -> Option<f64> {
    let distance = truthy(distance_cm)?;
    Some(2.0 * HALF_DEGREE.to_radians().tan() * distance)
}

/// Pixels per degree of visual field.
pub fn pixels_per_degree(
    pixels_per_centimeter: Option<f64>,
    centimeter_per_degree: Option<f64>,
) -> Option<f64> {
    Some(truthy(pixels_per_centimeter)? * truthy(centimeter_per_degree)?)
}

/// Full visual angle (degrees) subtended by the screen diagonal.
pub fn screen_size_in_degrees(
    diagonal_screen_size: Option<f64>,
    distance_cm: Option<f64>,
) -> Option<f64> {
    let diagonal = truthy(diagonal_screen_size)?;
    let distance = truthy(distance_cm)?;
    Some((diagonal / 2.0 / distance).atan().to_degrees() * 2.0)
}

/// All derived quantities for one set of inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayMetrics {
    pub diagonal_pixels: Option<f64>,
    pub diagonal_screen_size: Option<f64>,
    pub pixels_per_centimeter: Option<f64>,
    pub centimeter_per_degree: Option<f64>,
    pub screen_size_in_degrees: Option<f64>,
    pub pixels_per_degree: Option<f64>,
}

impl DisplayMetrics {
    /// Run the whole derivation chain.
    pub fn from_inputs(inputs: &DisplayInputs) -> Self {
        let diagonal_pixels = diagonal_pixels(inputs);
        let diagonal_screen_size = diagonal_screen_size(inputs);
        let pixels_per_centimeter = pixels_per_centimeter(diagonal_pixels, diagonal_screen_size);
        let centimeter_per_degree = centimeter_per_degree(inputs.distance_cm);

        Self {
            diagonal_pixels,
            diagonal_screen_size,
            pixels_per_centimeter,
            centimeter_per_degree,
            screen_size_in_degrees: screen_size_in_degrees(diagonal_screen_size, inputs.distance_cm),
            pixels_per_degree: pixels_per_degree(pixels_per_centimeter, centimeter_per_degree),
        }
    }

    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::DiagonalPixels => self.diagonal_pixels,
            MetricKind::DiagonalScreenSize => self.diagonal_screen_size,
            MetricKind::PixelsPerCentimeter => self.pixels_per_centimeter,
            MetricKind::CentimeterPerDegree => self.centimeter_per_degree,
            MetricKind::ScreenSizeInDegrees => self.screen_size_in_degrees,
            MetricKind::PixelsPerDegree => self.pixels_per_degree,
        }
    }
}

/// Result rows, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    DiagonalPixels,
    DiagonalScreenSize,
    PixelsPerCentimeter,
    CentimeterPerDegree,
    ScreenSizeInDegrees,
    PixelsPerDegree,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::DiagonalPixels,
        MetricKind::DiagonalScreenSize,
        MetricKind::PixelsPerCentimeter,
        MetricKind::CentimeterPerDegree,
        MetricKind::ScreenSizeInDegrees,
        MetricKind::PixelsPerDegree,
    ];

    /// Row label shown in the results table.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::DiagonalPixels => "対角線上のピクセル数",
            MetricKind::DiagonalScreenSize => "対角線上のスクリーンサイズ",
            MetricKind::PixelsPerCentimeter => "1cm当たりのピクセル数",
            MetricKind::CentimeterPerDegree => "視野角1度あたりのcm",
            MetricKind::ScreenSizeInDegrees => "スクリーンが占める視野角",
            MetricKind::PixelsPerDegree => "PPD (pixel per degree)",
        }
    }
}

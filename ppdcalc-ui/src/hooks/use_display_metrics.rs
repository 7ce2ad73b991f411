//! Reactive derivation graph.
//!
//! One memo per raw field and one per derived quantity, each reading only
//! its declared dependencies. Editing the distance therefore never reruns
//! the diagonal computations, and the diagram effect only wakes up when
//! distance or diagonal screen size actually change.

use leptos::*;
use ppdcalc_core::{derivation, DisplayInputs, InputField, MetricKind};

/// Memoized derived quantities.
#[derive(Clone, Copy)]
pub struct DisplayMetricsMemos {
    pub distance_cm: Memo<Option<f64>>,
    pub diagonal_pixels: Memo<Option<f64>>,
    pub diagonal_screen_size: Memo<Option<f64>>,
    pub pixels_per_centimeter: Memo<Option<f64>>,
    pub centimeter_per_degree: Memo<Option<f64>>,
    pub screen_size_in_degrees: Memo<Option<f64>>,
    pub pixels_per_degree: Memo<Option<f64>>,
}

impl DisplayMetricsMemos {
    pub fn get(&self, kind: MetricKind) -> Memo<Option<f64>> {
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

fn field_memo(inputs: RwSignal<DisplayInputs>, field: InputField) -> Memo<Option<f64>> {
    create_memo(move |_| inputs.with(|i| i.get(field)))
}

/// Wire the derivation chain to the raw input signal.
pub fn use_display_metrics(inputs: RwSignal<DisplayInputs>) -> DisplayMetricsMemos {
    let height_px = field_memo(inputs, InputField::HeightPx);
    let width_px = field_memo(inputs, InputField::WidthPx);
    let screen_height_cm = field_memo(inputs, InputField::ScreenHeightCm);
    let screen_width_cm = field_memo(inputs, InputField::ScreenWidthCm);
    let distance_cm = field_memo(inputs, InputField::DistanceCm);

    let diagonal_pixels =
        create_memo(move |_| derivation::diagonal(height_px.get(), width_px.get()));
    let diagonal_screen_size =
        create_memo(move |_| derivation::diagonal(screen_height_cm.get(), screen_width_cm.get()));
    let pixels_per_centimeter = create_memo(move |_| {
        derivation::pixels_per_centimeter(diagonal_pixels.get(), diagonal_screen_size.get())
    });
    let centimeter_per_degree =
        create_memo(move |_| derivation::centimeter_per_degree(distance_cm.get()));
    let screen_size_in_degrees = create_memo(move |_| {
        derivation::screen_size_in_degrees(diagonal_screen_size.get(), distance_cm.get())
    });
    let pixels_per_degree = create_memo(move |_| {
        derivation::pixels_per_degree(pixels_per_centimeter.get(), centimeter_per_degree.get())
    });

    DisplayMetricsMemos {
        distance_cm,
        diagonal_pixels,
        diagonal_screen_size,
        pixels_per_centimeter,
        centimeter_per_degree,
        screen_size_in_degrees,
        pixels_per_degree,
    }
}

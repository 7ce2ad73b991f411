//! Compile-time UI configuration.
//!
//! Inputs are never persisted, so everything the page needs is fixed here.

use ppdcalc_core::CanvasSpec;

/// Title shown in the header bar.
pub const APP_TITLE: &str = "PPD Calculator";

/// Caption above the resolution inputs.
pub const RESOLUTION_CAPTION: &str = "解像度";
/// Caption above the physical screen size inputs.
pub const SCREEN_SIZE_CAPTION: &str = "スクリーンサイズ";
/// Caption above the results table.
pub const RESULTS_CAPTION: &str = "結果";
/// Results table column headers.
pub const RESULTS_HEADERS: (&str, &str) = ("項目", "数値");

/// Eye icon drawn at the viewer's position, as an inline SVG data URL.
pub const EYE_ICON_SRC: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='black' \
stroke-width='2' stroke-linecap='round' stroke-linejoin='round'>\
<path d='M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z'/>\
<circle cx='12' cy='12' r='3'/></svg>";

/// Canvas the viewing diagram is drawn on.
pub fn diagram_canvas() -> CanvasSpec {
    CanvasSpec::default()
}

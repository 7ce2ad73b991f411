use crate::rendering::draw_diagram;
use leptos::*;
use ppdcalc_core::{CanvasSpec, Diagram};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

/// Canvas showing the viewer, the screen and the angle between them.
#[component]
pub fn ViewingDiagram(
    /// Viewer-to-screen distance in cm
    distance_cm: Signal<Option<f64>>,
    /// Screen diagonal in cm
    diagonal_screen_size: Signal<Option<f64>>,
    /// Eye icon, once loaded
    icon: Signal<Option<HtmlImageElement>>,
    /// Canvas geometry
    canvas: CanvasSpec,
    /// Callback fired with each frame after it is drawn
    #[prop(optional)]
    on_draw: Option<Callback<Diagram>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();

    // Redraw only when the geometry or the icon changes
    create_effect(move |_| {
        let distance = distance_cm.get();
        let diagonal = diagonal_screen_size.get();
        let icon = icon.get();

        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas_el = canvas_el.unchecked_ref::<HtmlCanvasElement>();

        let diagram = Diagram::build(distance, diagonal, &canvas, icon.is_some());
        if let Err(e) = draw_diagram(canvas_el, &diagram, icon.as_ref()) {
            log::warn!("Failed to draw viewing diagram: {:?}", e);
            return;
        }

        if let Some(callback) = on_draw {
            callback.call(diagram);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width=canvas.width
            height=canvas.height
        />
    }
}

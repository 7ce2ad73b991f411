use ppdcalc_core::{Diagram, DrawCommand};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// Get 2D rendering context from canvas.
fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    Ok(canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?)
}

/// Replay a diagram frame onto the canvas.
///
/// `Icon` commands are skipped when `icon` is `None`.
pub fn draw_diagram(
    canvas: &HtmlCanvasElement,
    diagram: &Diagram,
    icon: Option<&HtmlImageElement>,
) -> Result<(), JsValue> {
    let ctx = get_2d_context(canvas)?;
    for command in &diagram.commands {
        draw_command(&ctx, command, icon)?;
    }
    Ok(())
}

fn draw_command(
    ctx: &CanvasRenderingContext2d,
    command: &DrawCommand,
    icon: Option<&HtmlImageElement>,
) -> Result<(), JsValue> {
    match command {
        DrawCommand::Clear { width, height } => {
            ctx.clear_rect(0.0, 0.0, *width, *height);
        }
        DrawCommand::ClosedPath { points } => {
            ctx.begin_path();
            if let Some((first, rest)) = points.split_first() {
                ctx.move_to(first.x, first.y);
                for p in rest {
                    ctx.line_to(p.x, p.y);
                }
            }
            ctx.close_path();
            ctx.stroke();
        }
        DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => {
            ctx.begin_path();
            ctx.arc(center.x, center.y, *radius, *start_angle, *end_angle)?;
            ctx.stroke();
        }
        DrawCommand::Icon {
            x,
            y,
            width,
            height,
        } => {
            if let Some(img) = icon {
                ctx.draw_image_with_html_image_element_and_dw_and_dh(img, *x, *y, *width, *height)?;
            }
        }
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use ppdcalc_core::CanvasSpec;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_canvas(spec: &CanvasSpec) -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(spec.width);
        canvas.set_height(spec.height);
        canvas
    }

    fn painted_pixels(canvas: &HtmlCanvasElement) -> usize {
        let ctx = get_2d_context(canvas).unwrap();
        let data = ctx
            .get_image_data(0.0, 0.0, canvas.width() as f64, canvas.height() as f64)
            .unwrap()
            .data();
        data.chunks_exact(4).filter(|px| px[3] > 0).count()
    }

    #[wasm_bindgen_test]
    fn draws_triangle_for_complete_geometry() {
        let spec = CanvasSpec::default();
        let canvas = test_canvas(&spec);
        let diagram = Diagram::build(Some(60.0), Some(61.34), &spec, false);

        draw_diagram(&canvas, &diagram, None).unwrap();

        assert!(painted_pixels(&canvas) > 0);
    }

    #[wasm_bindgen_test]
    fn blank_frame_clears_previous_drawing() {
        let spec = CanvasSpec::default();
        let canvas = test_canvas(&spec);
        let full = Diagram::build(Some(60.0), Some(61.34), &spec, false);
        draw_diagram(&canvas, &full, None).unwrap();

        let blank = Diagram::build(None, Some(61.34), &spec, false);
        draw_diagram(&canvas, &blank, None).unwrap();

        assert_eq!(painted_pixels(&canvas), 0);
    }

    #[wasm_bindgen_test]
    fn icon_command_without_image_is_skipped() {
        let spec = CanvasSpec::default();
        let canvas = test_canvas(&spec);
        let diagram = Diagram::build(Some(60.0), Some(61.34), &spec, true);

        assert!(draw_diagram(&canvas, &diagram, None).is_ok());
    }
}

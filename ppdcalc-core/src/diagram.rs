//! Projection of the viewing triangle onto a fixed-size canvas.
//!
//! The screen diagonal lies along the top edge of the canvas and the
//! viewer's eye is the apex below it:
//!
//! ```text
//! (0,0) ───────────── (screen_px, 0)
//!      \             /
//!       \           /
//!        \  arc    /
//!         \  ◡    /
//!          \     /
//!            eye          (screen_px / 2, distance_px)
//! ```
//!
//! A single uniform scale maps centimeters to pixels so the triangle fits
//! both canvas axes.

use crate::config::CanvasSpec;
use crate::derivation::truthy;
use crate::points::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// One drawing instruction for a 2D canvas context.
///
/// Angles are in radians using the canvas convention (y down, clockwise).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    /// Clear the rectangle `(0, 0, width, height)`.
    Clear { width: f64, height: f64 },

    /// Stroke a closed polyline through `points`.
    ClosedPath { points: Vec<Point> },

    /// Stroke a circular arc.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },

    /// Draw the eye icon with its top-left corner at `(x, y)`.
    Icon {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// Scaled geometry of the viewing triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Pixels per centimeter applied to both axes
    pub scale: f64,
    /// Viewer distance in canvas pixels
    pub distance_px: f64,
    /// Screen diagonal in canvas pixels
    pub screen_px: f64,
    /// Viewer position
    pub apex: Point,
    /// Half of the visual angle, in radians
    pub half_angle: f64,
}

impl Projection {
    /// Triangle vertices: left screen edge, apex, right screen edge.
    pub fn triangle(&self) -> [Point; 3] {
        [Point::origin(), self.apex, Point::new(self.screen_px, 0.0)]
    }
}

/// Fit the viewing triangle into `canvas`.
///
/// Returns `None` if either quantity is missing (or zero).
pub fn project(
    distance_to_screen: Option<f64>,
    diagonal_screen_size: Option<f64>,
    canvas: &CanvasSpec,
) -> Option<Projection> {
    let distance = truthy(distance_to_screen)?;
    let diagonal = truthy(diagonal_screen_size)?;

    let scale = f64::min(
        canvas.drawable_height() / distance,
        canvas.width as f64 / diagonal,
    );
    let distance_px = distance * scale;
    let screen_px = diagonal * scale;

    Some(Projection {
        scale,
        distance_px,
        screen_px,
        apex: Point::new(screen_px / 2.0, distance_px),
        half_angle: (screen_px / 2.0 / distance_px).atan(),
    })
}

/// Ordered draw commands for one frame of the diagram.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub commands: Vec<DrawCommand>,
}

impl Diagram {
    /// Build the full frame.
    ///
    /// The frame always starts by clearing the canvas. When the geometry is
    /// incomplete that clear is the whole frame. The eye icon is appended
    /// only once `icon_ready` is true.
    pub fn build(
        distance_to_screen: Option<f64>,
        diagonal_screen_size: Option<f64>,
        canvas: &CanvasSpec,
        icon_ready: bool,
    ) -> Self {
        let mut commands = vec![DrawCommand::Clear {
            width: canvas.width as f64,
            height: canvas.height as f64,
        }];

        let Some(projection) = project(distance_to_screen, diagonal_screen_size, canvas) else {
            return Self { commands };
        };

        log::debug!(
            "distance_px={} screen_px={} icon_ready={}",
            projection.distance_px,
            projection.screen_px,
            icon_ready
        );

        commands.push(DrawCommand::ClosedPath {
            points: projection.triangle().to_vec(),
        });

        commands.push(DrawCommand::Arc {
            center: projection.apex,
            radius: canvas.arc_radius,
            start_angle: -FRAC_PI_2 - projection.half_angle,
            end_angle: -FRAC_PI_2 + projection.half_angle,
        });

        if icon_ready {
            let corner = projection.apex.offset(-canvas.icon_size / 2.0, 0.0);
            commands.push(DrawCommand::Icon {
                x: corner.x,
                y: corner.y,
                width: canvas.icon_size,
                height: canvas.icon_size,
            });
        }

        Self { commands }
    }

    /// True when the frame only clears the canvas.
    pub fn is_blank(&self) -> bool {
        self.commands
            .iter()
            .all(|c| matches!(c, DrawCommand::Clear { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn project_height_limited() {
        // Distance dominates: 350 / 100 = 3.5 < 300 / 50 = 6
        let p = project(Some(100.0), Some(50.0), &CanvasSpec::default()).unwrap();
        assert!((p.scale - 3.5).abs() < EPS);
        assert!((p.distance_px - 350.0).abs() < EPS);
        assert!((p.screen_px - 175.0).abs() < EPS);
    }

    #[test]
    fn project_width_limited() {
        // Diagonal dominates: 300 / 150 = 2 < 350 / 60
        let p = project(Some(60.0), Some(150.0), &CanvasSpec::default()).unwrap();
        assert!((p.scale - 2.0).abs() < EPS);
        assert!((p.screen_px - 300.0).abs() < EPS);
        assert!((p.distance_px - 120.0).abs() < EPS);
    }

    #[test]
    fn project_apex_is_bottom_center() {
        let p = project(Some(100.0), Some(50.0), &CanvasSpec::default()).unwrap();
        assert_eq!(p.apex, Point::new(p.screen_px / 2.0, p.distance_px));
        let [left, apex, right] = p.triangle();
        assert_eq!(left, Point::origin());
        assert_eq!(apex, p.apex);
        assert_eq!(right, Point::new(p.screen_px, 0.0));
    }

    #[test]
    fn project_half_angle() {
        // Half-diagonal equals distance -> 45 degrees
        let p = project(Some(60.0), Some(120.0), &CanvasSpec::default()).unwrap();
        assert!((p.half_angle - std::f64::consts::FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn project_absent_inputs() {
        let canvas = CanvasSpec::default();
        assert!(project(None, Some(50.0), &canvas).is_none());
        assert!(project(Some(60.0), None, &canvas).is_none());
        assert!(project(Some(0.0), Some(50.0), &canvas).is_none());
    }

    #[test]
    fn build_incomplete_geometry_is_single_clear() {
        let diagram = Diagram::build(Some(60.0), None, &CanvasSpec::default(), true);
        assert_eq!(
            diagram.commands,
            vec![DrawCommand::Clear {
                width: 300.0,
                height: 400.0
            }]
        );
        assert!(diagram.is_blank());
    }

    #[test]
    fn build_without_icon() {
        let diagram = Diagram::build(Some(60.0), Some(61.34), &CanvasSpec::default(), false);
        assert_eq!(diagram.commands.len(), 3);
        assert!(matches!(diagram.commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(diagram.commands[1], DrawCommand::ClosedPath { .. }));
        assert!(matches!(diagram.commands[2], DrawCommand::Arc { .. }));
        assert!(!diagram.is_blank());
    }

    #[test]
    fn build_with_icon_hangs_below_apex() {
        let canvas = CanvasSpec::default();
        let diagram = Diagram::build(Some(100.0), Some(50.0), &canvas, true);
        assert_eq!(diagram.commands.len(), 4);
        assert_eq!(
            diagram.commands[3],
            DrawCommand::Icon {
                x: 87.5 - 15.0,
                y: 350.0,
                width: 30.0,
                height: 30.0,
            }
        );
    }

    #[test]
    fn arc_spans_visual_angle_around_upward_direction() {
        let diagram = Diagram::build(Some(60.0), Some(120.0), &CanvasSpec::default(), false);
        let DrawCommand::Arc {
            radius,
            start_angle,
            end_angle,
            ..
        } = diagram.commands[2]
        else {
            panic!("expected arc, got {:?}", diagram.commands[2]);
        };
        assert_eq!(radius, 30.0);
        assert!((start_angle - (-3.0 * std::f64::consts::FRAC_PI_4)).abs() < EPS);
        assert!((end_angle - (-std::f64::consts::FRAC_PI_4)).abs() < EPS);
    }
}

use serde::{Deserialize, Serialize};

/// Center of the 200x200 chart canvas, shared by every slice path.
pub const CENTER_X: f64 = 100.0;
pub const CENTER_Y: f64 = 100.0;

/// Radius of the outer ring edge.
pub const OUTER_RADIUS: f64 = 90.0;

/// A point on the chart canvas in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPoint {
    pub x: f64,
    pub y: f64,
}

impl ArcPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the canvas center along `angle_rad`.
    ///
    /// Angles grow clockwise from 3 o'clock because SVG's y axis points down.
    #[must_use]
    pub fn on_circle(radius: f64, angle_rad: f64) -> Self {
        Self {
            x: CENTER_X + radius * angle_rad.cos(),
            y: CENTER_Y + radius * angle_rad.sin(),
        }
    }
}

#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Chart-level inner radius: the ring hole for donuts, zero for pies.
///
/// Thickness outside `0..=90` is tolerated by clamping the result at zero.
#[must_use]
pub fn ring_inner_radius(is_donut: bool, thickness: i32) -> i32 {
    if is_donut {
        90_i32.saturating_sub(thickness).max(0)
    } else {
        0
    }
}

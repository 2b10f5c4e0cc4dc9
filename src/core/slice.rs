use serde::{Deserialize, Serialize};

use crate::core::path::build_path;

/// One rendered sector. Immutable once built; layouts are rebuilt in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: i64,
    /// Degrees, clockwise from 3 o'clock.
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub color: String,
    pub path_data: String,
}

impl Slice {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        value: i64,
        start_angle: f64,
        sweep_angle: f64,
        outer_radius: f64,
        inner_radius: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            start_angle,
            sweep_angle,
            outer_radius,
            inner_radius,
            color: color.into(),
            path_data: build_path(start_angle, sweep_angle, outer_radius, inner_radius),
        }
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    #[must_use]
    pub fn is_donut_segment(&self) -> bool {
        self.inner_radius > 0.0
    }
}

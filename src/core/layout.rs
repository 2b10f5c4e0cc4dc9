use serde::{Deserialize, Serialize};

use crate::core::color::ColorResolver;
use crate::core::geometry::{OUTER_RADIUS, ring_inner_radius};
use crate::core::input::ChartInput;
use crate::core::slice::Slice;

/// Legend row derived from a built slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub value: i64,
    pub display_value: String,
    pub color: String,
}

/// Result of one layout pass: ordered slices plus chart-level ring geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceLayout {
    pub slices: Vec<Slice>,
    pub inner_radius: i32,
}

impl Default for SliceLayout {
    fn default() -> Self {
        Self::build(&ChartInput::default())
    }
}

impl SliceLayout {
    #[must_use]
    pub fn build(input: &ChartInput) -> Self {
        Self {
            slices: build_slices(input),
            inner_radius: ring_inner_radius(input.is_donut, input.thickness),
        }
    }

    /// Sum of the built slice values, i.e. after filtering.
    #[must_use]
    pub fn total_value(&self) -> i64 {
        self.slices
            .iter()
            .fold(0_i64, |acc, slice| acc.saturating_add(slice.value))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[must_use]
    pub fn slice(&self, label: &str) -> Option<&Slice> {
        self.slices.iter().find(|slice| slice.label == label)
    }

    /// Slices sorted by label (ordinal), independent of draw order.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let mut entries: Vec<LegendEntry> = self
            .slices
            .iter()
            .map(|slice| LegendEntry {
                label: slice.label.clone(),
                value: slice.value,
                display_value: format_quantity(slice.value),
                color: slice.color.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.label.cmp(&b.label));
        entries
    }
}

/// Converts the input mapping into draw-ordered slices.
///
/// Labels outside `include_labels` and non-positive quantities are dropped.
/// An empty or non-positive total yields no slices. Sweeps are
/// `value / total * 360` and accumulate from zero in the data's insertion
/// order.
#[must_use]
pub fn build_slices(input: &ChartInput) -> Vec<Slice> {
    let Some(data) = input.data.as_ref() else {
        return Vec::new();
    };

    let source: Vec<(&String, i64)> = data
        .iter()
        .filter(|(label, _)| input.includes(label))
        .filter(|(_, value)| **value > 0)
        .map(|(label, value)| (label, *value))
        .collect();

    let total = source
        .iter()
        .fold(0_i64, |acc, (_, value)| acc.saturating_add(*value));
    if total < 1 {
        return Vec::new();
    }

    let inner_radius = f64::from(ring_inner_radius(input.is_donut, input.thickness));
    let mut colors = ColorResolver::new(
        input.status_colors.as_ref(),
        input.default_colors.as_deref(),
    );

    let mut slices = Vec::with_capacity(source.len());
    let mut start_angle = 0.0;
    for (label, value) in source {
        let sweep_angle = value as f64 / total as f64 * 360.0;
        let color = colors.resolve(label);
        slices.push(Slice::new(
            label.as_str(),
            value,
            start_angle,
            sweep_angle,
            OUTER_RADIUS,
            inner_radius,
            color,
        ));
        start_angle += sweep_angle;
    }

    slices
}

/// Formats a quantity with comma thousands separators, e.g. `1,234,567`.
#[must_use]
pub fn format_quantity(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::format_quantity;

    #[test]
    fn format_quantity_groups_thousands() {
        assert_eq!(format_quantity(0), "0");
        assert_eq!(format_quantity(50), "50");
        assert_eq!(format_quantity(1_000), "1,000");
        assert_eq!(format_quantity(1_000_000), "1,000,000");
        assert_eq!(format_quantity(-12_345), "-12,345");
        assert_eq!(format_quantity(i64::MIN), "-9,223,372,036,854,775,808");
    }
}

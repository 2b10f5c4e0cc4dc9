use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::core::{ChartInput, Slice, SliceLayout};

/// Donut/pie chart widget state.
///
/// Holds the last input and the layout built from it. Every setter rebuilds
/// the layout in full.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonutChart {
    input: ChartInput,
    layout: SliceLayout,
}

impl DonutChart {
    #[must_use]
    pub fn new(input: ChartInput) -> Self {
        let mut chart = Self {
            input,
            layout: SliceLayout::default(),
        };
        chart.rebuild();
        chart
    }

    #[must_use]
    pub fn input(&self) -> &ChartInput {
        &self.input
    }

    #[must_use]
    pub fn layout(&self) -> &SliceLayout {
        &self.layout
    }

    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        &self.layout.slices
    }

    #[must_use]
    pub fn slice_at(&self, index: usize) -> Option<&Slice> {
        self.layout.slices.get(index)
    }

    #[must_use]
    pub fn total_value(&self) -> i64 {
        self.layout.total_value()
    }

    #[must_use]
    pub fn inner_radius(&self) -> i32 {
        self.layout.inner_radius
    }

    pub fn set_input(&mut self, input: ChartInput) {
        self.input = input;
        self.rebuild();
    }

    pub fn set_data(&mut self, data: Option<IndexMap<String, i64>>) {
        self.input.data = data;
        self.rebuild();
    }

    pub fn set_include_labels(&mut self, labels: Option<IndexSet<String>>) {
        self.input.include_labels = labels;
        self.rebuild();
    }

    pub fn set_status_colors(&mut self, colors: Option<IndexMap<String, String>>) {
        self.input.status_colors = colors;
        self.rebuild();
    }

    pub fn set_default_colors(&mut self, colors: Option<Vec<String>>) {
        self.input.default_colors = colors;
        self.rebuild();
    }

    pub fn set_ring(&mut self, is_donut: bool, thickness: i32) {
        self.input.is_donut = is_donut;
        self.input.thickness = thickness;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.layout = SliceLayout::build(&self.input);
        debug!(
            input_count = self.input.data.as_ref().map_or(0, IndexMap::len),
            slice_count = self.layout.len(),
            total = self.layout.total_value(),
            inner_radius = self.layout.inner_radius,
            "rebuilt chart slices"
        );
    }
}

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Everything the slice layout reads.
///
/// This type is serializable so hosts can persist/load chart setup as JSON.
/// Missing optional fields mean "no restriction" or "no override".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// Label to quantity, iterated in insertion order.
    #[serde(default)]
    pub data: Option<IndexMap<String, i64>>,
    #[serde(default)]
    pub include_labels: Option<IndexSet<String>>,
    #[serde(default)]
    pub status_colors: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub default_colors: Option<Vec<String>>,
    #[serde(default = "default_is_donut")]
    pub is_donut: bool,
    #[serde(default = "default_thickness")]
    pub thickness: i32,
}

fn default_is_donut() -> bool {
    true
}

fn default_thickness() -> i32 {
    20
}

impl Default for ChartInput {
    fn default() -> Self {
        Self {
            data: None,
            include_labels: None,
            status_colors: None,
            default_colors: None,
            is_donut: default_is_donut(),
            thickness: default_thickness(),
        }
    }
}

impl ChartInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data map from `(label, quantity)` pairs, keeping their order.
    #[must_use]
    pub fn with_data<I, L>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = (L, i64)>,
        L: Into<String>,
    {
        self.data = Some(data.into_iter().map(|(label, value)| (label.into(), value)).collect());
        self
    }

    #[must_use]
    pub fn with_include_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.include_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_status_colors<I, L, C>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: Into<String>,
    {
        self.status_colors = Some(
            colors
                .into_iter()
                .map(|(label, color)| (label.into(), color.into()))
                .collect(),
        );
        self
    }

    #[must_use]
    pub fn with_default_colors<I, C>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.default_colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Switches to donut rendering with the given ring thickness.
    #[must_use]
    pub fn donut(mut self, thickness: i32) -> Self {
        self.is_donut = true;
        self.thickness = thickness;
        self
    }

    #[must_use]
    pub fn pie(mut self) -> Self {
        self.is_donut = false;
        self
    }

    #[must_use]
    pub fn includes(&self, label: &str) -> bool {
        self.include_labels
            .as_ref()
            .is_none_or(|labels| labels.contains(label))
    }
}

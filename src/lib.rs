//! donut-widgets: framework-free engines behind a checkbox-list widget and a
//! donut/pie chart widget.
//!
//! `selection` keeps a multi-select checkbox state consistent across its key,
//! label and map views. `core` turns a label to quantity mapping into SVG
//! sector geometry. `api` wraps both in stateful widget types a UI host can
//! bind to.

pub mod api;
pub mod core;
pub mod error;
pub mod selection;
pub mod telemetry;

pub use api::{CheckBoxList, DonutChart};
pub use crate::core::{ChartInput, Slice, SliceLayout, build_path, build_slices};
pub use error::{WidgetError, WidgetResult};
pub use selection::{SelectionState, SourceKind};

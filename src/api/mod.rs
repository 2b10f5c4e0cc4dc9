//! Stateful widget facades over the pure engines.

mod checkbox_list;
mod donut_chart;
mod json_contract;

pub use checkbox_list::{CheckBoxList, CheckBoxRow};
pub use donut_chart::DonutChart;
pub use json_contract::{SLICE_LAYOUT_JSON_SCHEMA_V1, SliceLayoutJsonContractV1};

use serde::{Deserialize, Serialize};

use crate::core::{ChartInput, SliceLayout, build_path};
use crate::error::{WidgetError, WidgetResult};

pub const SLICE_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: SliceLayout,
}

impl SliceLayout {
    pub fn to_json_contract_v1_pretty(&self) -> WidgetResult<String> {
        let payload = SliceLayoutJsonContractV1 {
            schema_version: SLICE_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            WidgetError::Serialization(format!("failed to serialize slice layout contract v1: {e}"))
        })
    }

    /// Accepts either a bare layout or the versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> WidgetResult<Self> {
        if let Ok(layout) = serde_json::from_str::<SliceLayout>(input) {
            return layout.validate();
        }
        let payload: SliceLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            WidgetError::Serialization(format!("failed to parse slice layout json payload: {e}"))
        })?;
        if payload.schema_version != SLICE_LAYOUT_JSON_SCHEMA_V1 {
            return Err(WidgetError::InvalidData(format!(
                "unsupported slice layout schema version: {}",
                payload.schema_version
            )));
        }
        payload.layout.validate()
    }

    /// Rejects slices that no layout pass could have produced.
    fn validate(self) -> WidgetResult<Self> {
        for slice in &self.slices {
            if slice.value <= 0 {
                return Err(WidgetError::InvalidData(format!(
                    "slice `{}` value must be > 0, got {}",
                    slice.label, slice.value
                )));
            }
            let expected = build_path(
                slice.start_angle,
                slice.sweep_angle,
                slice.outer_radius,
                slice.inner_radius,
            );
            if slice.path_data != expected {
                return Err(WidgetError::InvalidData(format!(
                    "slice `{}` path_data does not match its angles and radii",
                    slice.label
                )));
            }
        }
        Ok(self)
    }
}

impl ChartInput {
    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            WidgetError::Serialization(format!("failed to parse chart input json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> WidgetResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            WidgetError::Serialization(format!("failed to serialize chart input json: {e}"))
        })
    }
}

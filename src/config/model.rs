use crate::{
    axis::adapter::Axis,
    foundation::core::{Length, RawLength},
    foundation::error::{StackError, StackResult},
};

/// Stacking configuration, fixed for the lifetime of one attach.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawStackConfig")]
pub struct StackConfig {
    /// Axis items stack along.
    pub axis: Axis,
    /// Spacing inserted after every item except the last, in pixels.
    pub item_distance: f64,
    /// Extra target scale added per stacking index.
    pub item_scale: f64,
    /// Pixel offset per stacking index, for both pin start and fanning.
    pub item_stack_distance: f64,
    /// Viewport position where items pin. Resolved on every pass.
    pub stack_position: Length,
    /// Viewport position where shrinking completes. Resolved on every pass.
    pub scale_end_position: Length,
    /// Target scale of the first item.
    pub base_scale: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Block,
            item_distance: 100.0,
            item_scale: 0.03,
            item_stack_distance: 30.0,
            stack_position: Length::Percent(20.0),
            scale_end_position: Length::Percent(10.0),
            base_scale: 0.85,
        }
    }
}

/// Wire form of [`StackConfig`]. Lengths stay unparsed so a bad length
/// surfaces as [`StackError::Config`] rather than a JSON error.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
struct RawStackConfig {
    axis: Axis,
    item_distance: f64,
    item_scale: f64,
    item_stack_distance: f64,
    stack_position: RawLength,
    scale_end_position: RawLength,
    base_scale: f64,
}

impl Default for RawStackConfig {
    fn default() -> Self {
        let cfg = StackConfig::default();
        Self {
            axis: cfg.axis,
            item_distance: cfg.item_distance,
            item_scale: cfg.item_scale,
            item_stack_distance: cfg.item_stack_distance,
            stack_position: cfg.stack_position.into(),
            scale_end_position: cfg.scale_end_position.into(),
            base_scale: cfg.base_scale,
        }
    }
}

impl TryFrom<RawStackConfig> for StackConfig {
    type Error = StackError;

    fn try_from(raw: RawStackConfig) -> StackResult<Self> {
        let cfg = Self {
            axis: raw.axis,
            item_distance: raw.item_distance,
            item_scale: raw.item_scale,
            item_stack_distance: raw.item_stack_distance,
            stack_position: named_length("stackPosition", raw.stack_position)?,
            scale_end_position: named_length("scaleEndPosition", raw.scale_end_position)?,
            base_scale: raw.base_scale,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

fn named_length(name: &str, raw: RawLength) -> StackResult<Length> {
    Length::try_from(raw).map_err(|err| match err {
        StackError::Config(msg) => StackError::config(format!("{name}: {msg}")),
        other => other,
    })
}

impl StackConfig {
    /// Parse from JSON and validate.
    ///
    /// Malformed JSON and unknown fields are [`StackError::Serde`]; an
    /// unparseable length or a non-finite number is [`StackError::Config`].
    pub fn from_json(s: &str) -> StackResult<Self> {
        let raw: RawStackConfig = serde_json::from_str(s)?;
        Self::try_from(raw)
    }

    /// Reject non-finite values. Overlapping or inverted thresholds are
    /// accepted: the progress clamp absorbs them.
    pub fn validate(&self) -> StackResult<()> {
        let numbers = [
            ("itemDistance", self.item_distance),
            ("itemScale", self.item_scale),
            ("itemStackDistance", self.item_stack_distance),
            ("baseScale", self.base_scale),
        ];
        for (name, v) in numbers {
            if !v.is_finite() {
                return Err(StackError::config(format!("{name} must be finite")));
            }
        }
        if !self.stack_position.is_finite() {
            return Err(StackError::config("stackPosition must be finite"));
        }
        if !self.scale_end_position.is_finite() {
            return Err(StackError::config("scaleEndPosition must be finite"));
        }
        Ok(())
    }

    /// Target scale for stacking index `index`, kept within `[0, 1]`.
    pub fn target_scale(&self, index: usize) -> f64 {
        (self.base_scale + index as f64 * self.item_scale).clamp(0.0, 1.0)
    }

    /// Fan-out offset for stacking index `index`.
    pub fn stack_offset(&self, index: usize) -> f64 {
        self.item_stack_distance * index as f64
    }

    /// Set the stacking axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the spacing between items.
    pub fn with_item_distance(mut self, px: f64) -> Self {
        self.item_distance = px;
        self
    }

    /// Set the per-index scale increment.
    pub fn with_item_scale(mut self, step: f64) -> Self {
        self.item_scale = step;
        self
    }

    /// Set the per-index stacking offset.
    pub fn with_item_stack_distance(mut self, px: f64) -> Self {
        self.item_stack_distance = px;
        self
    }

    /// Set the pin position.
    pub fn with_stack_position(mut self, len: Length) -> Self {
        self.stack_position = len;
        self
    }

    /// Set the position where scaling ends.
    pub fn with_scale_end_position(mut self, len: Length) -> Self {
        self.scale_end_position = len;
        self
    }

    /// Set the first item's target scale.
    pub fn with_base_scale(mut self, scale: f64) -> Self {
        self.base_scale = scale;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;

use crate::{axis::adapter::Axis, config::model::StackConfig, host::ScrollContainer};

/// Which container measurements were absent when a [`FrameGeometry`] was
/// sampled. Absent values read as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MissingGeometry {
    /// Scroll offset was unavailable.
    pub scroll: bool,
    /// Viewport size was unavailable.
    pub viewport: bool,
    /// End sentinel was unavailable.
    pub end_sentinel: bool,
}

impl MissingGeometry {
    /// True when nothing was missing.
    pub fn is_empty(self) -> bool {
        !(self.scroll || self.viewport || self.end_sentinel)
    }
}

/// Container measurements along the active axis for one recompute pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameGeometry {
    /// Scroll offset.
    pub scroll_pos: f64,
    /// Visible size.
    pub viewport_size: f64,
    /// Offset of the end sentinel.
    pub end_sentinel: f64,
    /// Measurements that defaulted to zero.
    pub missing: MissingGeometry,
}

impl FrameGeometry {
    /// Geometry from explicit values; nothing missing.
    pub fn new(scroll_pos: f64, viewport_size: f64, end_sentinel: f64) -> Self {
        Self {
            scroll_pos,
            viewport_size,
            end_sentinel,
            missing: MissingGeometry::default(),
        }
    }

    /// Read live measurements from `container`.
    pub fn sample<C: ScrollContainer + ?Sized>(axis: Axis, container: &C) -> Self {
        let scroll = axis.scroll_pos(container);
        let viewport = axis.viewport_size(container);
        let end = axis.end_sentinel(container);
        Self {
            scroll_pos: scroll.unwrap_or(0.0),
            viewport_size: viewport.unwrap_or(0.0),
            end_sentinel: end.unwrap_or(0.0),
            missing: MissingGeometry {
                scroll: scroll.is_none(),
                viewport: viewport.is_none(),
                end_sentinel: end.is_none(),
            },
        }
    }
}

/// Scroll-offset boundaries for a single item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Boundaries {
    /// Captured leading-edge offset of the item.
    pub leading_offset: f64,
    /// `stackPosition` in pixels for this pass.
    pub stack_position_px: f64,
    /// `scaleEndPosition` in pixels for this pass.
    pub scale_end_position_px: f64,
    /// Shrinking starts here.
    pub trigger_start: f64,
    /// Shrinking reaches the target scale here.
    pub trigger_end: f64,
    /// Pinning starts here (same as `trigger_start`).
    pub pin_start: f64,
    /// Pinning ends and the item freezes.
    pub pin_end: f64,
}

/// Resolve the trigger and pin boundaries of item `index`.
///
/// Percentages are resolved against `frame.viewport_size` on every call;
/// `leading_offset` is the value captured at attach.
pub fn resolve_boundaries(
    leading_offset: f64,
    index: usize,
    frame: &FrameGeometry,
    config: &StackConfig,
) -> Boundaries {
    let stack_position_px = config.stack_position.resolve(frame.viewport_size);
    let scale_end_position_px = config.scale_end_position.resolve(frame.viewport_size);

    let trigger_start = leading_offset - stack_position_px - config.stack_offset(index);
    let trigger_end = leading_offset - scale_end_position_px;

    Boundaries {
        leading_offset,
        stack_position_px,
        scale_end_position_px,
        trigger_start,
        trigger_end,
        // Pinning and shrinking share a start boundary.
        pin_start: trigger_start,
        pin_end: frame.end_sentinel - frame.viewport_size / 2.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolver.rs"]
mod tests;

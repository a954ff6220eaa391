use crate::{
    config::model::StackConfig,
    foundation::core::StackTransform,
    foundation::math::clamp_progress,
    geometry::resolver::Boundaries,
};

/// Where an item sits in its approach → pinned → released progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// Before the pin zone; the item scrolls normally (and may be shrinking).
    Idle,
    /// Inside the pin zone; the item rides 1:1 with scroll.
    Pinned,
    /// Past the pin zone; the item stays frozen at the release offset.
    Released,
}

/// Phase of an item with `boundaries` at `scroll_pos`.
pub fn phase_at(boundaries: &Boundaries, scroll_pos: f64) -> Phase {
    if scroll_pos < boundaries.pin_start {
        Phase::Idle
    } else if scroll_pos <= boundaries.pin_end {
        Phase::Pinned
    } else {
        Phase::Released
    }
}

/// Compute the rounded transform of item `index` at `scroll_pos`.
///
/// Pure: the result depends only on the arguments.
pub fn compute_transform(
    index: usize,
    boundaries: &Boundaries,
    scroll_pos: f64,
    config: &StackConfig,
) -> StackTransform {
    let progress = clamp_progress(scroll_pos, boundaries.trigger_start, boundaries.trigger_end);
    let scale = 1.0 - progress * (1.0 - config.target_scale(index));

    // Offset that keeps the item's leading edge at its stack slot.
    let slot =
        boundaries.stack_position_px + config.stack_offset(index) - boundaries.leading_offset;
    let translate = match phase_at(boundaries, scroll_pos) {
        Phase::Idle => 0.0,
        Phase::Pinned => scroll_pos + slot,
        Phase::Released => boundaries.pin_end + slot,
    };

    StackTransform { translate, scale }.quantized()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/computer.rs"]
mod tests;

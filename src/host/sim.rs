//! Deterministic in-memory host.
//!
//! Items are laid out one after another along the axis, starting after a
//! leading padding, with the end sentinel right after the last item. Frames
//! are queued until [`SimHost::pump_frame`] hands them back, and every write
//! is kept in a log for inspection.

use std::collections::{BTreeSet, VecDeque};

use crate::{
    axis::adapter::Axis,
    foundation::core::{Point, Size, Vec2},
    foundation::error::{StackError, StackResult},
    host::{AppliedTransform, FrameClock, FrameToken, ItemPrep, ListenerId, ScrollContainer},
};

/// Static description of a simulated scroll container.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SimLayout {
    /// Scrollport size.
    pub viewport: Size,
    /// Space before the first item along the axis.
    #[serde(default)]
    pub leading_padding: f64,
    /// Item extents along the axis, in stacking order.
    pub item_extents: Vec<f64>,
    /// Item extent across the axis.
    #[serde(default)]
    pub cross_extent: f64,
}

impl SimLayout {
    /// Reject negative or non-finite sizes.
    pub fn validate(&self) -> StackResult<()> {
        let finite_non_neg = |v: f64| v.is_finite() && v >= 0.0;
        if !finite_non_neg(self.viewport.width) || !finite_non_neg(self.viewport.height) {
            return Err(StackError::layout("viewport must be finite and >= 0"));
        }
        if !self.leading_padding.is_finite() {
            return Err(StackError::layout("leadingPadding must be finite"));
        }
        if !finite_non_neg(self.cross_extent) {
            return Err(StackError::layout("crossExtent must be finite and >= 0"));
        }
        if let Some(i) = self.item_extents.iter().position(|&e| !finite_non_neg(e)) {
            return Err(StackError::layout(format!(
                "itemExtents[{i}] must be finite and >= 0"
            )));
        }
        Ok(())
    }
}

/// Handle to a simulated item: its position in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SimItem(pub usize);

/// One logged transform write.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SimWrite {
    /// Scroll offset along the axis when the write happened.
    pub scroll: f64,
    /// Target item.
    pub item: usize,
    /// CSS form of the transform.
    pub css: String,
    /// Written transform.
    pub transform: AppliedTransform,
}

/// In-memory [`ScrollContainer`] + [`FrameClock`].
#[derive(Clone, Debug)]
pub struct SimHost {
    axis: Axis,
    layout: SimLayout,
    spacing: Vec<f64>,
    prepared: Vec<Option<ItemPrep>>,
    scroll: f64,
    connected: bool,
    has_viewport: bool,
    has_sentinel: bool,
    listeners: BTreeSet<u64>,
    next_listener: u64,
    frames: VecDeque<FrameToken>,
    next_frame: u64,
    cancelled: usize,
    writes: Vec<SimWrite>,
}

impl SimHost {
    /// Host for `layout`, stacking along `axis`, scrolled to the start.
    pub fn new(axis: Axis, layout: SimLayout) -> Self {
        let n = layout.item_extents.len();
        Self {
            axis,
            layout,
            spacing: vec![0.0; n],
            prepared: vec![None; n],
            scroll: 0.0,
            connected: true,
            has_viewport: true,
            has_sentinel: true,
            listeners: BTreeSet::new(),
            next_listener: 0,
            frames: VecDeque::new(),
            next_frame: 0,
            cancelled: 0,
            writes: Vec::new(),
        }
    }

    /// Item handles in layout order.
    pub fn items(&self) -> Vec<SimItem> {
        (0..self.layout.item_extents.len()).map(SimItem).collect()
    }

    /// Axis the host lays items out along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Scroll offset along the axis.
    pub fn scroll_pos(&self) -> f64 {
        self.scroll
    }

    /// Move the scrollport. The host does not clamp; callers stay in range.
    pub fn scroll_to(&mut self, pos: f64) {
        self.scroll = pos;
    }

    /// Size of item `i` in 2D.
    pub fn item_size(&self, i: usize) -> Size {
        let along = self.layout.item_extents.get(i).copied().unwrap_or(0.0);
        match self.axis {
            Axis::Block => Size::new(self.layout.cross_extent, along),
            Axis::Inline => Size::new(along, self.layout.cross_extent),
        }
    }

    /// Simulate the container going away (all geometry reads as absent).
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Simulate a missing viewport measurement.
    pub fn set_viewport_available(&mut self, available: bool) {
        self.has_viewport = available;
    }

    /// Simulate a missing end sentinel.
    pub fn set_sentinel_present(&mut self, present: bool) {
        self.has_sentinel = present;
    }

    /// Resize the scrollport without notifying anyone.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.layout.viewport = viewport;
    }

    /// Deliver the oldest pending frame.
    pub fn pump_frame(&mut self) -> Option<FrameToken> {
        self.frames.pop_front()
    }

    /// Number of frames requested and not yet delivered or cancelled.
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of successful cancellations.
    pub fn cancelled_frames(&self) -> usize {
        self.cancelled
    }

    /// Number of registered scroll listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Attach-time preparation recorded for item `i`.
    pub fn prep(&self, i: usize) -> Option<&ItemPrep> {
        self.prepared.get(i).and_then(Option::as_ref)
    }

    /// Every write so far, oldest first.
    pub fn writes(&self) -> &[SimWrite] {
        &self.writes
    }

    /// Drain the write log.
    pub fn take_writes(&mut self) -> Vec<SimWrite> {
        std::mem::take(&mut self.writes)
    }

    /// Writes that targeted item `i`.
    pub fn writes_for(&self, i: usize) -> impl Iterator<Item = &SimWrite> {
        self.writes.iter().filter(move |w| w.item == i)
    }

    fn offset_along(&self, i: usize) -> f64 {
        let before: f64 = self.layout.item_extents[..i]
            .iter()
            .zip(&self.spacing)
            .map(|(extent, gap)| extent + gap)
            .sum();
        self.layout.leading_padding + before
    }

    fn point_along(&self, d: f64) -> Point {
        self.axis.vector(d).to_point()
    }
}

impl ScrollContainer for SimHost {
    type Item = SimItem;

    fn scroll_offset(&self) -> Option<Vec2> {
        self.connected.then(|| self.axis.vector(self.scroll))
    }

    fn viewport_size(&self) -> Option<Size> {
        (self.connected && self.has_viewport).then_some(self.layout.viewport)
    }

    fn end_sentinel_offset(&self) -> Option<Point> {
        if !self.connected || !self.has_sentinel {
            return None;
        }
        Some(self.point_along(self.offset_along(self.layout.item_extents.len())))
    }

    fn item_offset(&self, item: &SimItem) -> Option<Point> {
        if !self.connected || item.0 >= self.layout.item_extents.len() {
            return None;
        }
        Some(self.point_along(self.offset_along(item.0)))
    }

    fn prepare_item(&mut self, item: &SimItem, prep: &ItemPrep) {
        let Some(slot) = self.prepared.get_mut(item.0) else {
            return;
        };
        *slot = Some(*prep);
        self.spacing[item.0] = prep.spacing.map_or(0.0, |s| s.px);
    }

    fn apply_transform(&mut self, item: &SimItem, transform: &AppliedTransform) {
        self.writes.push(SimWrite {
            scroll: self.scroll,
            item: item.0,
            css: transform.css(),
            transform: *transform,
        });
    }

    fn add_scroll_listener(&mut self) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.insert(id);
        ListenerId(id)
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id.0);
    }
}

impl FrameClock for SimHost {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_frame);
        self.next_frame += 1;
        self.frames.push_back(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let before = self.frames.len();
        self.frames.retain(|&t| t != token);
        if self.frames.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/sim.rs"]
mod tests;

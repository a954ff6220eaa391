//! Seams between the engine and whatever owns the real scroll container.
//!
//! The engine reads geometry through [`ScrollContainer`], writes transforms
//! back through it, and asks a [`FrameClock`] for frame-aligned callbacks.
//! Hosts deliver scroll events and fired frames by calling
//! [`ScrollStack::on_scroll`](crate::ScrollStack::on_scroll) and
//! [`ScrollStack::on_frame`](crate::ScrollStack::on_frame).

pub mod sim;

use std::fmt;

use crate::{
    axis::adapter::{Axis, Edge, TransformOrigin},
    foundation::core::{Affine, Point, Size, StackTransform, Vec2},
};

/// Identifies a registered scroll listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ListenerId(pub u64);

/// Identifies a requested animation-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct FrameToken(pub u64);

/// Scrollable container holding the stacked items.
///
/// Geometry getters return `None` when the value is unavailable (detached
/// node, missing sentinel). The engine reads `None` as zero.
pub trait ScrollContainer {
    /// Opaque handle to one stacked item.
    type Item;

    /// Current scroll offset (x = inline, y = block).
    fn scroll_offset(&self) -> Option<Vec2>;

    /// Visible size of the scrollport.
    fn viewport_size(&self) -> Option<Size>;

    /// Offset of the marker placed after the last item.
    fn end_sentinel_offset(&self) -> Option<Point>;

    /// Leading-edge offset of `item` relative to the scrollable content.
    fn item_offset(&self, item: &Self::Item) -> Option<Point>;

    /// One-time preparation performed at attach.
    fn prepare_item(&mut self, item: &Self::Item, prep: &ItemPrep);

    /// Write a composed transform to `item`.
    fn apply_transform(&mut self, item: &Self::Item, transform: &AppliedTransform);

    /// Register a passive scroll listener.
    fn add_scroll_listener(&mut self) -> ListenerId;

    /// Remove a listener previously returned by [`Self::add_scroll_listener`].
    fn remove_scroll_listener(&mut self, id: ListenerId);
}

/// Frame-aligned callback primitive (an animation-frame pump).
pub trait FrameClock {
    /// Schedule a callback for the next frame.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a pending callback. Cancelling a fired or unknown token is a no-op.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Spacing inserted after an item along the stacking axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Spacing {
    /// Edge receiving the spacing.
    pub edge: Edge,
    /// Spacing in pixels.
    pub px: f64,
}

/// Attach-time preparation for a single item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ItemPrep {
    /// Item index in stacking order.
    pub index: usize,
    /// Trailing spacing; `None` for the last item.
    pub spacing: Option<Spacing>,
    /// Pivot for scaling.
    pub origin: TransformOrigin,
    /// Hint the host to promote the item to its own compositing layer
    /// (`will-change: transform`, hidden backface).
    pub compositor_hints: bool,
}

/// A transform ready to be written to an item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AppliedTransform {
    /// Axis the translation runs along.
    pub axis: Axis,
    /// Rounded translate/scale pair.
    pub transform: StackTransform,
    /// Translate-then-scale matrix relative to the transform origin.
    pub affine: Affine,
}

impl AppliedTransform {
    /// Matrix in item-local coordinates, pivoting about `pivot`.
    pub fn affine_about(&self, pivot: Point) -> Affine {
        let v = pivot.to_vec2();
        Affine::translate(v) * self.affine * Affine::translate(-v)
    }

    /// Matrix for an item of `size`, using the axis' leading-edge origin.
    pub fn affine_for_item(&self, size: Size) -> Affine {
        self.affine_about(self.axis.transform_origin().pivot(size))
    }

    /// CSS `transform` value.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AppliedTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let StackTransform { translate, scale } = self.transform;
        match self.axis {
            Axis::Block => write!(f, "translate3d(0, {translate}px, 0) scale({scale})"),
            Axis::Inline => write!(f, "translate3d({translate}px, 0, 0) scale({scale})"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/mod.rs"]
mod tests;

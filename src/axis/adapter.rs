//! Axis selection.
//!
//! The stacking algorithm is written once against scalar positions along a
//! single axis. [`Axis`] is the only place that knows whether that scalar is
//! the vertical (block) or horizontal (inline) component of the host's 2D
//! geometry.

use crate::{
    foundation::core::{Affine, Point, Size, StackTransform, Vec2},
    host::{AppliedTransform, ScrollContainer},
};

/// Scroll direction along which items stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Vertical stacking (scroll top, heights, `margin-bottom`).
    #[default]
    Block,
    /// Horizontal stacking (scroll left, widths, `margin-right`).
    Inline,
}

/// Edge of an item that receives the inter-item spacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Edge {
    /// Below the item.
    Bottom,
    /// Right of the item.
    Right,
}

/// Pivot for the composed transform: the item's leading edge, centered on
/// the cross axis. Scaling shrinks toward that edge, never the center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TransformOrigin {
    /// `top center`
    TopCenter,
    /// `left center`
    LeftCenter,
}

impl TransformOrigin {
    /// CSS `transform-origin` keyword pair.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::TopCenter => "top center",
            Self::LeftCenter => "left center",
        }
    }

    /// Pivot point in item-local coordinates for an item of `size`.
    pub fn pivot(self, size: Size) -> Point {
        match self {
            Self::TopCenter => Point::new(size.width / 2.0, 0.0),
            Self::LeftCenter => Point::new(0.0, size.height / 2.0),
        }
    }
}

impl Axis {
    /// Component of `v` along this axis.
    #[inline]
    pub fn along(self, v: Vec2) -> f64 {
        match self {
            Self::Block => v.y,
            Self::Inline => v.x,
        }
    }

    /// Vector of length `d` pointing along this axis.
    #[inline]
    pub fn vector(self, d: f64) -> Vec2 {
        match self {
            Self::Block => Vec2::new(0.0, d),
            Self::Inline => Vec2::new(d, 0.0),
        }
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Block => size.height,
            Self::Inline => size.width,
        }
    }

    /// Current scroll offset of `container` along this axis.
    pub fn scroll_pos<C: ScrollContainer + ?Sized>(self, container: &C) -> Option<f64> {
        container.scroll_offset().map(|v| self.along(v))
    }

    /// Visible size of `container` along this axis.
    pub fn viewport_size<C: ScrollContainer + ?Sized>(self, container: &C) -> Option<f64> {
        container.viewport_size().map(|s| self.extent(s))
    }

    /// Leading-edge offset of `item` inside `container` along this axis.
    pub fn leading_offset<C: ScrollContainer + ?Sized>(
        self,
        container: &C,
        item: &C::Item,
    ) -> Option<f64> {
        container.item_offset(item).map(|p| self.along(p.to_vec2()))
    }

    /// Offset of the end sentinel along this axis.
    pub fn end_sentinel<C: ScrollContainer + ?Sized>(self, container: &C) -> Option<f64> {
        container.end_sentinel_offset().map(|p| self.along(p.to_vec2()))
    }

    /// Translate-then-scale along this axis only. The matrix is expressed
    /// relative to the item's [`TransformOrigin`].
    pub fn compose_transform(self, t: StackTransform) -> AppliedTransform {
        let affine = Affine::translate(self.vector(t.translate)) * Affine::scale(t.scale);
        AppliedTransform {
            axis: self,
            transform: t,
            affine,
        }
    }

    /// Edge that receives the spacing between consecutive items.
    pub fn trailing_edge(self) -> Edge {
        match self {
            Self::Block => Edge::Bottom,
            Self::Inline => Edge::Right,
        }
    }

    /// Transform origin pinned to the leading edge.
    pub fn transform_origin(self) -> TransformOrigin {
        match self {
            Self::Block => TransformOrigin::TopCenter,
            Self::Inline => TransformOrigin::LeftCenter,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/axis/adapter.rs"]
mod tests;

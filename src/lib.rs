//! scroll-stack is a scroll-linked stacking/pinning transform engine.
//!
//! Given a scroll container and an ordered list of items, it derives a
//! `{translate, scale}` pair for every item as a pure function of the scroll
//! offset: items shrink and stick in place as later items scroll over them,
//! then release and stay frozen behind.
//!
//! # Pipeline overview
//!
//! 1. **Attach**: insert spacing, capture each item's leading offset, register a scroll listener.
//! 2. **Schedule**: scroll events set a dirty mark and request at most one frame.
//! 3. **Resolve**: live viewport size + captured offsets + config -> per-item [`Boundaries`].
//! 4. **Compute**: boundaries + scroll offset -> rounded [`StackTransform`] per item.
//! 5. **Filter**: only transforms that moved past the change thresholds reach the host.
//!
//! The key design constraints:
//!
//! - **One algorithm, two axes**: [`Axis`] is the only code that knows vertical from horizontal.
//! - **Deterministic**: recomputing at the same scroll offset always yields the same transforms;
//!   the change cache only suppresses writes.
//! - **Host-agnostic**: geometry, writes and frame callbacks go through [`ScrollContainer`]
//!   and [`FrameClock`]. [`SimHost`] is an in-memory implementation.
//! - **Never fails while scrolling**: degenerate thresholds are clamped and missing geometry
//!   reads as zero. Errors only come from loading configuration or layouts.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod axis;
mod config;
mod foundation;
mod geometry;
mod host;
mod schedule;
mod transform;

pub use axis::adapter::{Axis, Edge, TransformOrigin};
pub use config::model::StackConfig;
pub use foundation::core::{
    Affine, Length, Point, SCALE_DECIMALS, Size, StackTransform, TRANSLATE_DECIMALS, Vec2,
};
pub use foundation::error::{StackError, StackResult};
pub use foundation::math::{clamp_progress, round_to};
pub use geometry::resolver::{Boundaries, FrameGeometry, MissingGeometry, resolve_boundaries};
pub use host::sim::{SimHost, SimItem, SimLayout, SimWrite};
pub use host::{
    AppliedTransform, FrameClock, FrameToken, ItemPrep, ListenerId, ScrollContainer, Spacing,
};
pub use schedule::scheduler::{ItemReport, RecomputeStats, SchedulerState, ScrollStack, StackItem};
pub use transform::computer::{Phase, compute_transform, phase_at};
pub use transform::filter::{SCALE_EPSILON, TRANSLATE_EPSILON, TransformCache};

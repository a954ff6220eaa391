use crate::{
    axis::adapter::Axis,
    config::model::StackConfig,
    foundation::core::StackTransform,
    geometry::resolver::{Boundaries, FrameGeometry, MissingGeometry, resolve_boundaries},
    host::{FrameClock, FrameToken, ItemPrep, ListenerId, ScrollContainer, Spacing},
    transform::computer::{Phase, compute_transform, phase_at},
    transform::filter::TransformCache,
};

/// An attached item with the geometry captured at attach.
#[derive(Clone, Debug)]
pub struct StackItem<I> {
    /// Host handle.
    pub item: I,
    /// Stacking index, fixed at attach.
    pub index: usize,
    /// Leading-edge offset along the axis, measured once at attach.
    pub leading_offset: f64,
}

/// Scheduling state of an attached stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SchedulerState {
    /// No recompute pending.
    Idle,
    /// A recompute will run when this frame fires.
    Scheduled(FrameToken),
}

/// Counters from one recompute pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RecomputeStats {
    /// Items visited.
    pub items: usize,
    /// Transforms written to the host.
    pub applied: usize,
    /// Transforms dropped by the change filter.
    pub suppressed: usize,
    /// Container measurements that read as zero.
    pub missing: MissingGeometry,
}

/// Read-only view of one item at the current scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ItemReport {
    /// Stacking index.
    pub index: usize,
    /// Resolved boundaries.
    pub boundaries: Boundaries,
    /// Current phase.
    pub phase: Phase,
    /// Computed transform (whether or not it would be written).
    pub transform: StackTransform,
}

/// An attached stacking engine.
///
/// Dropping a `ScrollStack` without [`ScrollStack::detach`] leaves the
/// listener and any pending frame registered with the host.
#[derive(Debug)]
pub struct ScrollStack<I> {
    config: StackConfig,
    items: Vec<StackItem<I>>,
    cache: TransformCache,
    listener: ListenerId,
    pending: Option<FrameToken>,
}

impl<I> ScrollStack<I> {
    /// Attach to `host`: insert spacing, capture item offsets, run one
    /// synchronous pass and start listening for scroll.
    #[tracing::instrument(skip_all, fields(items = items.len(), axis = ?config.axis))]
    pub fn attach<H>(host: &mut H, items: Vec<I>, config: StackConfig) -> Self
    where
        H: ScrollContainer<Item = I> + FrameClock,
    {
        let axis = config.axis;
        let count = items.len();

        for (index, item) in items.iter().enumerate() {
            let spacing = (index + 1 < count).then(|| Spacing {
                edge: axis.trailing_edge(),
                px: config.item_distance,
            });
            let prep = ItemPrep {
                index,
                spacing,
                origin: axis.transform_origin(),
                compositor_hints: true,
            };
            host.prepare_item(item, &prep);
        }

        // Offsets are read after spacing so they reflect the final layout.
        let items: Vec<StackItem<I>> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let leading_offset = axis.leading_offset(&*host, &item).unwrap_or_else(|| {
                    tracing::warn!(index, "item offset unavailable, using 0");
                    0.0
                });
                StackItem {
                    item,
                    index,
                    leading_offset,
                }
            })
            .collect();

        let listener = host.add_scroll_listener();
        let mut stack = Self {
            config,
            items,
            cache: TransformCache::with_capacity(count),
            listener,
            pending: None,
        };
        let stats = stack.recompute(host);
        tracing::debug!(?listener, applied = stats.applied, "attached");
        stack
    }

    /// Handle a scroll event: schedule one frame unless one is pending.
    /// Returns true when a new frame was requested.
    pub fn on_scroll<H: FrameClock + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.pending.is_some() {
            return false;
        }
        let token = host.request_frame();
        tracing::trace!(?token, "recompute scheduled");
        self.pending = Some(token);
        true
    }

    /// Handle a fired frame. Runs the pass only for the frame this stack
    /// requested; anything else is ignored and returns `None`.
    pub fn on_frame<H>(&mut self, host: &mut H, token: FrameToken) -> Option<RecomputeStats>
    where
        H: ScrollContainer<Item = I> + ?Sized,
    {
        if self.pending != Some(token) {
            tracing::debug!(?token, pending = ?self.pending, "ignoring foreign frame");
            return None;
        }
        self.pending = None;
        Some(self.recompute(host))
    }

    /// Run a full pass over every item in index order, writing only the
    /// transforms that moved past the change thresholds.
    #[tracing::instrument(level = "trace", skip_all, fields(items = self.items.len()))]
    pub fn recompute<H>(&mut self, host: &mut H) -> RecomputeStats
    where
        H: ScrollContainer<Item = I> + ?Sized,
    {
        let axis = self.config.axis;
        let frame = FrameGeometry::sample(axis, &*host);
        if !frame.missing.is_empty() {
            tracing::debug!(missing = ?frame.missing, "container geometry missing, using 0");
        }

        let mut stats = RecomputeStats {
            items: self.items.len(),
            missing: frame.missing,
            ..RecomputeStats::default()
        };
        for it in &self.items {
            let b = resolve_boundaries(it.leading_offset, it.index, &frame, &self.config);
            let t = compute_transform(it.index, &b, frame.scroll_pos, &self.config);
            if self.cache.should_apply(it.index, t) {
                tracing::trace!(index = it.index, translate = t.translate, scale = t.scale);
                host.apply_transform(&it.item, &axis.compose_transform(t));
                stats.applied += 1;
            } else {
                stats.suppressed += 1;
            }
        }
        stats
    }

    /// Boundaries, phase and transform of every item at the host's current
    /// geometry. Does not write or touch the change cache.
    pub fn report<H>(&self, host: &H) -> Vec<ItemReport>
    where
        H: ScrollContainer<Item = I> + ?Sized,
    {
        let frame = FrameGeometry::sample(self.config.axis, host);
        self.items
            .iter()
            .map(|it| {
                let boundaries =
                    resolve_boundaries(it.leading_offset, it.index, &frame, &self.config);
                ItemReport {
                    index: it.index,
                    boundaries,
                    phase: phase_at(&boundaries, frame.scroll_pos),
                    transform: compute_transform(
                        it.index,
                        &boundaries,
                        frame.scroll_pos,
                        &self.config,
                    ),
                }
            })
            .collect()
    }

    /// Stop listening, cancel any pending frame and drop the cache.
    /// Hands the items back to the caller.
    #[tracing::instrument(skip_all, fields(items = self.items.len()))]
    pub fn detach<H>(mut self, host: &mut H) -> Vec<I>
    where
        H: ScrollContainer<Item = I> + FrameClock + ?Sized,
    {
        host.remove_scroll_listener(self.listener);
        if let Some(token) = self.pending.take() {
            host.cancel_frame(token);
        }
        self.cache.clear();
        tracing::debug!(listener = ?self.listener, "detached");
        self.items.into_iter().map(|it| it.item).collect()
    }

    /// Current scheduling state.
    pub fn state(&self) -> SchedulerState {
        match self.pending {
            Some(token) => SchedulerState::Scheduled(token),
            None => SchedulerState::Idle,
        }
    }

    /// Configuration fixed at attach.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Active axis.
    pub fn axis(&self) -> Axis {
        self.config.axis
    }

    /// Attached items in index order.
    pub fn items(&self) -> &[StackItem<I>] {
        &self.items
    }

    /// Last written transforms.
    pub fn cache(&self) -> &TransformCache {
        &self.cache
    }

    /// Listener registered at attach.
    pub fn listener(&self) -> ListenerId {
        self.listener
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;

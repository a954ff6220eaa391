use crate::foundation::core::StackTransform;

/// Translate changes at or below this many pixels are not written.
pub const TRANSLATE_EPSILON: f64 = 0.1;
/// Scale changes at or below this are not written.
pub const SCALE_EPSILON: f64 = 0.001;

/// Last transform written per item index.
///
/// Only suppresses redundant writes; it never feeds back into what gets
/// computed. Owned by one attach and dropped with it.
#[derive(Clone, Debug, Default)]
pub struct TransformCache {
    last: Vec<Option<StackTransform>>,
}

impl TransformCache {
    /// Cache sized for `items` entries.
    pub fn with_capacity(items: usize) -> Self {
        Self {
            last: vec![None; items],
        }
    }

    /// Record `next` for `index` and return true if it differs enough from
    /// the last written value (or nothing was written yet).
    pub fn should_apply(&mut self, index: usize, next: StackTransform) -> bool {
        if index >= self.last.len() {
            self.last.resize(index + 1, None);
        }
        let slot = &mut self.last[index];
        let changed = match slot {
            None => true,
            Some(prev) => {
                (prev.translate - next.translate).abs() > TRANSLATE_EPSILON
                    || (prev.scale - next.scale).abs() > SCALE_EPSILON
            }
        };
        if changed {
            *slot = Some(next);
        }
        changed
    }

    /// Last written transform for `index`.
    pub fn get(&self, index: usize) -> Option<StackTransform> {
        self.last.get(index).copied().flatten()
    }

    /// Number of items with a written transform.
    pub fn len(&self) -> usize {
        self.last.iter().filter(|t| t.is_some()).count()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.last.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/filter.rs"]
mod tests;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::TickItem;
use crate::render::ViewHost;

/// One view operation observed by [`NullViewHost`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewOp {
    Create { scale_id: String, handle: u64, index: i64 },
    Update { scale_id: String, handle: u64, index: i64 },
    Destroy { scale_id: String, handle: u64 },
}

/// Headless view host used by tests and engine usage without a UI layer.
///
/// Handles are sequential integers. It tracks live views so tests can catch
/// leaked, double-destroyed or stale views.
#[derive(Debug, Default)]
pub struct NullViewHost {
    pub created: usize,
    pub updated: usize,
    pub destroyed: usize,
    /// Operations that referenced a handle that was not live.
    pub stale_ops: usize,
    next_handle: u64,
    live: IndexMap<u64, (String, i64)>,
    op_log: Option<Vec<ViewOp>>,
}

impl NullViewHost {
    /// Host that also records every operation in order.
    #[must_use]
    pub fn with_op_log() -> Self {
        Self {
            op_log: Some(Vec::new()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn live_count_for(&self, scale_id: &str) -> usize {
        self.live.values().filter(|(scale, _)| scale == scale_id).count()
    }

    /// Indices of the live views of a scale, in creation order.
    #[must_use]
    pub fn live_indices_for(&self, scale_id: &str) -> Vec<i64> {
        self.live
            .values()
            .filter(|(scale, _)| scale == scale_id)
            .map(|(_, index)| *index)
            .collect()
    }

    #[must_use]
    pub fn ops(&self) -> &[ViewOp] {
        self.op_log.as_deref().unwrap_or(&[])
    }

    pub fn take_ops(&mut self) -> Vec<ViewOp> {
        self.op_log.as_mut().map(std::mem::take).unwrap_or_default()
    }

    pub fn reset_counters(&mut self) {
        self.created = 0;
        self.updated = 0;
        self.destroyed = 0;
        self.stale_ops = 0;
    }

    fn record(&mut self, op: ViewOp) {
        if let Some(log) = &mut self.op_log {
            log.push(op);
        }
    }
}

impl ViewHost for NullViewHost {
    type Handle = u64;

    fn create_view(&mut self, scale_id: &str, item: &TickItem) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.created += 1;
        self.live.insert(handle, (scale_id.to_owned(), item.index));
        self.record(ViewOp::Create {
            scale_id: scale_id.to_owned(),
            handle,
            index: item.index,
        });
        handle
    }

    fn update_view(&mut self, scale_id: &str, handle: &mut u64, item: &TickItem) {
        self.updated += 1;
        match self.live.get_mut(handle) {
            Some(entry) => entry.1 = item.index,
            None => self.stale_ops += 1,
        }
        self.record(ViewOp::Update {
            scale_id: scale_id.to_owned(),
            handle: *handle,
            index: item.index,
        });
    }

    fn destroy_view(&mut self, scale_id: &str, handle: u64) {
        self.destroyed += 1;
        if self.live.shift_remove(&handle).is_none() {
            self.stale_ops += 1;
        }
        self.record(ViewOp::Destroy {
            scale_id: scale_id.to_owned(),
            handle,
        });
    }
}

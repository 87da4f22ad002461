mod null_host;
mod recycler;

pub use null_host::{NullViewHost, ViewOp};
pub use recycler::{IndexRun, ReconcileStats, TickChanges, TickRecycler, detect_tick_changes};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{TickItem, TickLabel};

/// Contract implemented by the UI layer that materializes tick views.
///
/// The engine never paints; it only creates, updates and destroys views
/// through this seam. Handles are opaque to the engine.
pub trait ViewHost {
    type Handle;

    fn create_view(&mut self, scale_id: &str, item: &TickItem) -> Self::Handle;
    fn update_view(&mut self, scale_id: &str, handle: &mut Self::Handle, item: &TickItem);
    fn destroy_view(&mut self, scale_id: &str, handle: Self::Handle);
}

/// Data bound to a rendered view, rewritten in place when the view is recycled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickContext {
    pub index: i64,
    pub position: f64,
    pub value: DateTime<Utc>,
    pub width: f64,
    pub label: TickLabel,
    /// Number of in-place updates since the view was created.
    pub revision: u64,
}

impl TickContext {
    #[must_use]
    pub fn new(item: &TickItem) -> Self {
        Self {
            index: item.index,
            position: item.position,
            value: item.value,
            width: item.width,
            label: item.label.clone(),
            revision: 0,
        }
    }

    pub fn update(&mut self, item: &TickItem) {
        self.index = item.index;
        self.position = item.position;
        self.value = item.value;
        self.width = item.width;
        self.label.clone_from(&item.label);
        self.revision += 1;
    }
}

/// A tick item together with the view materialized for it.
#[derive(Debug)]
pub struct RenderedTick<Hd> {
    item: TickItem,
    handle: Hd,
    context: TickContext,
}

impl<Hd> RenderedTick<Hd> {
    pub(crate) fn create<H>(host: &mut H, scale_id: &str, item: TickItem) -> Self
    where
        H: ViewHost<Handle = Hd>,
    {
        let handle = host.create_view(scale_id, &item);
        let context = TickContext::new(&item);
        Self {
            item,
            handle,
            context,
        }
    }

    pub(crate) fn update<H>(&mut self, host: &mut H, scale_id: &str, item: TickItem)
    where
        H: ViewHost<Handle = Hd>,
    {
        self.context.update(&item);
        host.update_view(scale_id, &mut self.handle, &item);
        self.item = item;
    }

    pub(crate) fn into_handle(self) -> Hd {
        self.handle
    }

    #[must_use]
    pub fn item(&self) -> &TickItem {
        &self.item
    }

    #[must_use]
    pub fn handle(&self) -> &Hd {
        &self.handle
    }

    #[must_use]
    pub fn context(&self) -> &TickContext {
        &self.context
    }
}

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::TickItem;
use crate::render::{RenderedTick, ViewHost};

/// Edit script turning one contiguous run of tick indices into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickChanges {
    /// Old and new runs do not overlap (or one is empty).
    pub replace_all: bool,
    pub add_prefix: usize,
    pub add_suffix: usize,
    pub remove_prefix: usize,
    pub remove_suffix: usize,
    /// Views kept on screen whose data is rewritten in place.
    pub update_count: usize,
}

/// Inclusive index run `(first, last)` of a contiguous tick list.
pub type IndexRun = (i64, i64);

/// Diffs two contiguous index runs.
///
/// A positive prefix delta (`old_first - new_first`) means the new run
/// extends further left; a positive suffix delta (`new_last - old_last`)
/// means it extends further right.
#[must_use]
pub fn detect_tick_changes(old: Option<IndexRun>, new: Option<IndexRun>) -> TickChanges {
    let (Some((old_first, old_last)), Some((new_first, new_last))) = (old, new) else {
        return TickChanges {
            replace_all: true,
            ..TickChanges::default()
        };
    };

    if new_first > old_last || new_last < old_first {
        return TickChanges {
            replace_all: true,
            ..TickChanges::default()
        };
    }

    let prefix_delta = old_first - new_first;
    let suffix_delta = new_last - old_last;
    let update_count = (old_last.min(new_last) - old_first.max(new_first) + 1) as usize;

    TickChanges {
        replace_all: false,
        add_prefix: prefix_delta.max(0) as usize,
        remove_prefix: (-prefix_delta).max(0) as usize,
        add_suffix: suffix_delta.max(0) as usize,
        remove_suffix: (-suffix_delta).max(0) as usize,
        update_count,
    }
}

/// View operations performed by one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReconcileStats {
    pub created: usize,
    pub updated: usize,
    pub destroyed: usize,
    pub replaced_all: bool,
}

/// Rendered views of one tick scale, recycled across virtualization passes.
///
/// The view list always mirrors the last item list handed to
/// [`TickRecycler::reconcile`]: same length, same order.
#[derive(Debug)]
pub struct TickRecycler<Hd> {
    views: Vec<RenderedTick<Hd>>,
}

impl<Hd> Default for TickRecycler<Hd> {
    fn default() -> Self {
        Self { views: Vec::new() }
    }
}

impl<Hd> TickRecycler<Hd> {
    #[must_use]
    pub fn views(&self) -> &[RenderedTick<Hd>] {
        &self.views
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &TickItem> {
        self.views.iter().map(RenderedTick::item)
    }

    #[must_use]
    pub fn index_run(&self) -> Option<IndexRun> {
        index_run(self.views.iter().map(RenderedTick::item))
    }

    /// Brings the rendered views in line with `items`, reusing every view
    /// whose index is still present.
    ///
    /// Incremental diffing needs ascending contiguous indices on both the
    /// current views and `items`. Anything else falls back to a full replace.
    pub fn reconcile<H>(
        &mut self,
        host: &mut H,
        scale_id: &str,
        items: Vec<TickItem>,
    ) -> ReconcileStats
    where
        H: ViewHost<Handle = Hd>,
    {
        let views_contiguous = is_contiguous(self.views.iter().map(RenderedTick::item));
        if !views_contiguous || !is_contiguous(items.iter()) {
            warn!(scale_id, "non-contiguous tick indices; replacing every view");
            return self.replace_all(host, scale_id, items);
        }

        let changes = detect_tick_changes(self.index_run(), index_run(items.iter()));
        trace!(scale_id, ?changes, "reconcile ticks");
        if changes.replace_all {
            return self.replace_all(host, scale_id, items);
        }

        let mut middle = items;
        let suffix_items = middle.split_off(middle.len() - changes.add_suffix);
        let prefix_items: Vec<TickItem> = middle.drain(..changes.add_prefix).collect();

        // Back before front: splicing the front shifts every later index.
        let mut stats = ReconcileStats::default();
        if changes.remove_suffix > 0 {
            let keep = self.views.len() - changes.remove_suffix;
            stats.destroyed += destroy_views(host, scale_id, self.views.drain(keep..));
        }
        if !suffix_items.is_empty() {
            stats.created += suffix_items.len();
            self.views.extend(create_views(host, scale_id, suffix_items));
        }

        if changes.remove_prefix > 0 {
            let removed = self.views.drain(..changes.remove_prefix);
            stats.destroyed += destroy_views(host, scale_id, removed);
        }
        if !prefix_items.is_empty() {
            stats.created += prefix_items.len();
            let mut views = create_views(host, scale_id, prefix_items);
            views.append(&mut self.views);
            self.views = views;
        }

        debug_assert_eq!(middle.len(), changes.update_count);
        let survivors = &mut self.views[changes.add_prefix..changes.add_prefix + middle.len()];
        for (view, item) in survivors.iter_mut().zip(middle) {
            view.update(host, scale_id, item);
            stats.updated += 1;
        }

        stats
    }

    /// Destroys every rendered view. Returns the number destroyed.
    pub fn unrender<H>(&mut self, host: &mut H, scale_id: &str) -> usize
    where
        H: ViewHost<Handle = Hd>,
    {
        destroy_views(host, scale_id, self.views.drain(..))
    }

    fn replace_all<H>(
        &mut self,
        host: &mut H,
        scale_id: &str,
        items: Vec<TickItem>,
    ) -> ReconcileStats
    where
        H: ViewHost<Handle = Hd>,
    {
        let destroyed = self.unrender(host, scale_id);
        let created = items.len();
        self.views = create_views(host, scale_id, items);
        ReconcileStats {
            created,
            updated: 0,
            destroyed,
            replaced_all: true,
        }
    }
}

fn create_views<H: ViewHost>(
    host: &mut H,
    scale_id: &str,
    items: Vec<TickItem>,
) -> Vec<RenderedTick<H::Handle>> {
    items
        .into_iter()
        .map(|item| RenderedTick::create(host, scale_id, item))
        .collect()
}

fn destroy_views<H: ViewHost>(
    host: &mut H,
    scale_id: &str,
    views: impl Iterator<Item = RenderedTick<H::Handle>>,
) -> usize {
    let mut destroyed = 0;
    for view in views {
        host.destroy_view(scale_id, view.into_handle());
        destroyed += 1;
    }
    destroyed
}

fn index_run<'a>(mut items: impl DoubleEndedIterator<Item = &'a TickItem>) -> Option<IndexRun> {
    let first = items.next()?.index;
    let last = items.next_back().map_or(first, |item| item.index);
    Some((first, last))
}

fn is_contiguous<'a>(items: impl Iterator<Item = &'a TickItem>) -> bool {
    let mut previous: Option<i64> = None;
    items.map(|item| item.index).all(|index| {
        let follows = previous.is_none_or(|prev| prev.checked_add(1) == Some(index));
        previous = Some(index);
        follows
    })
}

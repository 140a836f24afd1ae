use std::sync::atomic::{AtomicU64, Ordering};

pub type ViewId = u64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-unique widget id. `0` is never returned.
pub fn next_view_id() -> ViewId {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

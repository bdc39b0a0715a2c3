use std::sync::atomic::{AtomicU64, Ordering};

/// Per-process launch sequence, used to tell launches apart in logs.
static LAUNCH_SEQ: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_launch_id() -> u64 {
    LAUNCH_SEQ.fetch_add(1, Ordering::Relaxed)
}

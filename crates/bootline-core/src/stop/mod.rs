//! Out-of-band stop of the running entry point.
//!
//! A launch publishes a [`StopHandle`] before calling `main`. Any other call
//! path (a signal handler, an admin command) can then call [`request_stop`]
//! without holding a reference to the launch.
//!
//! One launch per process is assumed: a second launch replaces the handle
//! of the first.
mod error;
pub use error::StopError;

use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::{debug, info, warn};

use crate::entry::NullaryFn;

/// The stop operation captured for one launch.
pub struct StopHandle {
    entry: String,
    launch_id: u64,
    op: Option<NullaryFn>,
}

impl StopHandle {
    pub(crate) fn working(entry: &str, launch_id: u64, op: NullaryFn) -> Self {
        Self {
            entry: entry.to_string(),
            launch_id,
            op: Some(op),
        }
    }

    /// Handle for an entry point without a stop procedure.
    pub(crate) fn unsupported(entry: &str, launch_id: u64) -> Self {
        Self {
            entry: entry.to_string(),
            launch_id,
            op: None,
        }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn launch_id(&self) -> u64 {
        self.launch_id
    }

    pub fn is_supported(&self) -> bool {
        self.op.is_some()
    }

    /// Call the captured stop procedure.
    pub fn invoke(&self) -> Result<(), StopError> {
        let Some(op) = &self.op else {
            return Err(StopError::Unsupported(self.entry.clone()));
        };
        op().map_err(|source| StopError::Failed {
            entry: self.entry.clone(),
            source,
        })
    }
}

impl fmt::Debug for StopHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopHandle")
            .field("entry", &self.entry)
            .field("launch_id", &self.launch_id)
            .field("supported", &self.is_supported())
            .finish()
    }
}

/// Holds the most recently published [`StopHandle`].
///
/// Publication and reads go through a lock, so a handle published on the
/// launching thread is visible to a stop request from any other thread.
#[derive(Debug, Default)]
pub struct StopSlot {
    current: RwLock<Option<Arc<StopHandle>>>,
}

impl StopSlot {
    pub const fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    pub(crate) fn publish(&self, handle: StopHandle) {
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.as_ref() {
            warn!(
                previous = previous.launch_id(),
                next = handle.launch_id(),
                "stop handle replaced by a later launch"
            );
        }
        debug!(entry = handle.entry(), launch = handle.launch_id(), "stop handle published");
        *slot = Some(Arc::new(handle));
    }

    /// The published handle, if a launch has happened.
    pub fn current(&self) -> Option<Arc<StopHandle>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Invoke the published handle.
    ///
    /// Fails with [`StopError::NotRunning`] before any launch. The lock is not
    /// held while the stop procedure runs.
    pub fn request_stop(&self) -> Result<(), StopError> {
        let handle = self.current().ok_or(StopError::NotRunning)?;
        info!(entry = handle.entry(), launch = handle.launch_id(), "stop requested");
        handle.invoke()
    }
}

static GLOBAL_STOP: StopSlot = StopSlot::new();

/// The process-wide slot used by [`crate::Launcher::new`].
pub fn global_stop_slot() -> &'static StopSlot {
    &GLOBAL_STOP
}

/// Stop whatever the process launched.
pub fn request_stop() -> Result<(), StopError> {
    GLOBAL_STOP.request_stop()
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::entry::TargetResult;

    #[test]
    fn empty_slot_is_not_running() {
        let slot = StopSlot::new();
        assert!(slot.current().is_none());
        assert!(matches!(slot.request_stop(), Err(StopError::NotRunning)));
    }

    #[test]
    fn placeholder_reports_unsupported() {
        let slot = StopSlot::new();
        slot.publish(StopHandle::unsupported("demo.Main", 7));

        match slot.request_stop() {
            Err(StopError::Unsupported(entry)) => assert_eq!(entry, "demo.Main"),
            other => panic!("expected Unsupported, got {other:?}"),
        }
    }

    #[test]
    fn working_handle_runs_operation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let slot = StopSlot::new();
        slot.publish(StopHandle::working(
            "demo.Main",
            1,
            Arc::new(move || -> TargetResult {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        ));

        slot.request_stop().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failing_stop_keeps_cause() {
        let slot = StopSlot::new();
        slot.publish(StopHandle::working(
            "demo.Main",
            1,
            Arc::new(|| -> TargetResult { Err("busy".into()) }),
        ));

        let err = slot.request_stop().unwrap_err();
        assert!(matches!(&err, StopError::Failed { entry, .. } if entry == "demo.Main"));
        assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "busy");
    }

    #[test]
    fn later_publish_replaces_earlier() {
        let slot = StopSlot::new();
        slot.publish(StopHandle::unsupported("first", 1));
        slot.publish(StopHandle::unsupported("second", 2));
        assert_eq!(slot.current().unwrap().entry(), "second");
    }

    #[test]
    fn published_handle_is_visible_from_other_threads() {
        static SLOT: StopSlot = StopSlot::new();
        std::thread::spawn(|| SLOT.publish(StopHandle::unsupported("threaded", 3)))
            .join()
            .unwrap();
        assert_eq!(SLOT.current().unwrap().launch_id(), 3);
    }
}

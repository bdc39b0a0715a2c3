//! The calling thread's current loading scope.
//!
//! Hosted programs that need to see the resources they were launched with
//! read [`current`]. The launcher installs its scope with [`enter`] and the
//! returned guard puts the previous one back when dropped, on every exit path.
use std::{cell::RefCell, marker::PhantomData, sync::Arc};

use crate::scope::LoadingScope;

thread_local! {
    static AMBIENT: RefCell<Option<Arc<LoadingScope>>> = const { RefCell::new(None) };
}

/// The scope installed on this thread, if any.
pub fn current() -> Option<Arc<LoadingScope>> {
    AMBIENT.with(|slot| slot.borrow().clone())
}

/// Install `scope` on this thread until the guard is dropped.
#[must_use = "the previous scope is restored when the guard is dropped"]
pub fn enter(scope: Arc<LoadingScope>) -> AmbientGuard {
    let previous = AMBIENT.with(|slot| slot.replace(Some(scope)));
    AmbientGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// Restores the previously installed scope on drop.
///
/// Tied to the thread that created it.
pub struct AmbientGuard {
    previous: Option<Arc<LoadingScope>>,
    _not_send: PhantomData<*const ()>,
}

impl Drop for AmbientGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        AMBIENT.with(|slot| *slot.borrow_mut() = previous);
    }
}

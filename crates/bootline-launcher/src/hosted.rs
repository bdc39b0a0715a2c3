//! Programs compiled into the launcher itself.
use std::sync::{Arc, Condvar, Mutex, PoisonError};

use bootline_core::{EntryPoint, EntryTable, LaunchError, scope::ambient};
use bootline_model::DEFAULT_MAIN_ENTRY;
use tracing::info;

/// Register every built-in program in `table`.
pub fn register(table: &mut EntryTable) -> Result<(), LaunchError> {
    table.register(parking_main(DEFAULT_MAIN_ENTRY))
}

/// Logs what it was launched with, then waits until stopped.
fn parking_main(name: &str) -> EntryPoint {
    let park = Arc::new(Park::default());
    let stopper = Arc::clone(&park);

    EntryPoint::new(name)
        .with_main(move |args| {
            match ambient::current() {
                Some(scope) => {
                    info!(scope = scope.name(), resources = scope.resources().len(), "running");
                    for resource in scope.resources().iter() {
                        info!(resource = %resource.display(), "resource");
                    }
                }
                None => info!("running without an ambient scope"),
            }
            info!(?args, "arguments");

            park.wait();
            info!("stopped");
            Ok(())
        })
        .with_stop(move || {
            stopper.release();
            Ok(())
        })
}

#[derive(Default)]
struct Park {
    released: Mutex<bool>,
    cv: Condvar,
}

impl Park {
    fn wait(&self) {
        let mut released = self.released.lock().unwrap_or_else(PoisonError::into_inner);
        while !*released {
            released = self.cv.wait(released).unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn release(&self) {
        *self.released.lock().unwrap_or_else(PoisonError::into_inner) = true;
        self.cv.notify_all();
    }
}

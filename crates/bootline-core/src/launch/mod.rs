//! Runs a named entry point inside an isolated loading scope.
mod id;

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use bootline_model::{MAIN_PROCEDURE, STOP_PROCEDURE};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::{
    entry::{ArgsFn, EntryPoint, Procedure},
    error::LaunchError,
    scope::{LoadingScope, ambient},
    stop::{StopHandle, StopSlot, global_stop_slot},
};

/// A hosted `main` that panicked instead of returning an error.
#[derive(Debug, Error)]
#[error("entry point panicked: {0}")]
pub struct TargetPanic(pub String);

/// Everything needed to run one entry point. Immutable once built.
pub struct Launcher {
    scope: Arc<LoadingScope>,
    entry: String,
    args: Vec<String>,
    stop_slot: &'static StopSlot,
}

impl Launcher {
    /// Launch target publishing its stop handle to the process-wide slot.
    pub fn new(scope: Arc<LoadingScope>, entry: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            scope,
            entry: entry.into(),
            args,
            stop_slot: global_stop_slot(),
        }
    }

    /// Publish the stop handle to `slot` instead of the process-wide one.
    pub fn with_stop_slot(mut self, slot: &'static StopSlot) -> Self {
        self.stop_slot = slot;
        self
    }

    pub fn scope(&self) -> &Arc<LoadingScope> {
        &self.scope
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Resolve the entry point and run its `main`.
    ///
    /// Steps:
    /// 1. install the scope as this thread's ambient scope;
    /// 2. resolve the entry point and its `main(&[String])`;
    /// 3. probe for `stop()` and publish a stop handle, a placeholder
    ///    reporting unsupported when there is none;
    /// 4. call `main`, which usually returns only once the hosted program is
    ///    done.
    ///
    /// The previous ambient scope is restored on every exit path. Errors and
    /// panics from `main` come back as [`LaunchError::Invocation`].
    #[instrument(level = "info", skip(self), fields(entry = %self.entry, launch = tracing::field::Empty))]
    pub fn launch(&self) -> Result<(), LaunchError> {
        let launch_id = id::next_launch_id();
        tracing::Span::current().record("launch", launch_id);

        let _ambient = ambient::enter(Arc::clone(&self.scope));
        debug!(scope = %self.scope, "ambient scope installed");

        let entry = self
            .scope
            .resolve(&self.entry)
            .ok_or_else(|| LaunchError::EntryPointNotFound(self.entry.clone()))?;
        debug!(
            procedures = ?entry.procedure_names().collect::<Vec<_>>(),
            "entry point resolved"
        );
        let main = main_procedure(&entry)?;

        let handle = stop_handle(&entry, launch_id);
        if !handle.is_supported() {
            debug!("entry point has no stop procedure");
        }
        self.stop_slot.publish(handle);

        info!(args = self.args.len(), "invoking entry point");
        match panic::catch_unwind(AssertUnwindSafe(|| main(&self.args))) {
            Ok(Ok(())) => {
                info!("entry point returned");
                Ok(())
            }
            Ok(Err(source)) => Err(LaunchError::Invocation {
                entry: self.entry.clone(),
                source,
            }),
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                warn!(panic = %msg, "entry point panicked");
                Err(LaunchError::Invocation {
                    entry: self.entry.clone(),
                    source: Box::new(TargetPanic(msg)),
                })
            }
        }
    }
}

fn main_procedure(entry: &EntryPoint) -> Result<ArgsFn, LaunchError> {
    match entry.procedure(MAIN_PROCEDURE) {
        Some(Procedure::Args(f)) => Ok(Arc::clone(f)),
        Some(other) => Err(LaunchError::WrongSignature {
            entry: entry.name().to_string(),
            procedure: MAIN_PROCEDURE,
            expected: "fn(&[String])",
            actual: other.signature(),
        }),
        None => Err(LaunchError::MethodNotFound {
            entry: entry.name().to_string(),
            procedure: MAIN_PROCEDURE,
        }),
    }
}

/// Only a nullary `stop` counts; anything else under that name is ignored.
fn stop_handle(entry: &EntryPoint, launch_id: u64) -> StopHandle {
    match entry.procedure(STOP_PROCEDURE) {
        Some(Procedure::Nullary(f)) => StopHandle::working(entry.name(), launch_id, Arc::clone(f)),
        _ => StopHandle::unsupported(entry.name(), launch_id),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fmt,
        sync::{
            Mutex,
            atomic::{AtomicBool, Ordering},
        },
    };

    use super::*;
    use crate::{classpath::ClassPath, entry::EntryTable, stop::StopError};

    fn fresh_slot() -> &'static StopSlot {
        Box::leak(Box::new(StopSlot::new()))
    }

    fn scope_with(entries: Vec<EntryPoint>) -> Arc<LoadingScope> {
        let mut table = EntryTable::new();
        for e in entries {
            table.register(e).unwrap();
        }
        let mut resources = ClassPath::new();
        resources.push(std::path::Path::new("/opt/bootline/lib/app.jar")).unwrap();
        LoadingScope::builder("test launcher")
            .with_resources(resources)
            .with_entries(table)
            .build()
    }

    fn launcher(scope: Arc<LoadingScope>, entry: &str, args: &[&str]) -> (Launcher, &'static StopSlot) {
        let slot = fresh_slot();
        let args = args.iter().map(|s| s.to_string()).collect();
        (Launcher::new(scope, entry, args).with_stop_slot(slot), slot)
    }

    fn current_scope_name() -> Option<String> {
        ambient::current().map(|s| s.name().to_string())
    }

    #[derive(Debug)]
    struct Exploded(u32);

    impl fmt::Display for Exploded {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "exploded with code {}", self.0)
        }
    }

    impl std::error::Error for Exploded {}

    #[test]
    fn main_receives_args_and_sees_launch_scope() {
        let seen = Arc::new(Mutex::new(None));
        let record = Arc::clone(&seen);
        let entry = EntryPoint::new("demo.Main").with_main(move |args| {
            let scope = ambient::current().map(|s| s.resources().len());
            *record.lock().unwrap() = Some((args.to_vec(), scope));
            Ok(())
        });
        let (l, _) = launcher(scope_with(vec![entry]), "demo.Main", &["job.xml", "-v"]);

        l.launch().unwrap();

        let (args, resources) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(args, ["job.xml", "-v"]);
        assert_eq!(resources, Some(1));
    }

    #[test]
    fn ambient_scope_is_restored_after_success_and_failure() {
        let outer = LoadingScope::builder("outer").build();
        let _guard = ambient::enter(outer);

        let ok = EntryPoint::new("ok").with_main(|_| Ok(()));
        let bad = EntryPoint::new("bad").with_main(|_| Err(Exploded(3).into()));
        let scope = scope_with(vec![ok, bad]);

        launcher(Arc::clone(&scope), "ok", &[]).0.launch().unwrap();
        assert_eq!(current_scope_name().as_deref(), Some("outer"));

        assert!(launcher(Arc::clone(&scope), "bad", &[]).0.launch().is_err());
        assert_eq!(current_scope_name().as_deref(), Some("outer"));

        assert!(launcher(scope, "missing", &[]).0.launch().is_err());
        assert_eq!(current_scope_name().as_deref(), Some("outer"));
    }

    #[test]
    fn unknown_entry_point_is_reported() {
        let (l, slot) = launcher(scope_with(vec![]), "nope.Main", &[]);

        match l.launch() {
            Err(LaunchError::EntryPointNotFound(name)) => assert_eq!(name, "nope.Main"),
            other => panic!("expected EntryPointNotFound, got {other:?}"),
        }
        assert!(matches!(slot.request_stop(), Err(StopError::NotRunning)));
    }

    #[test]
    fn missing_or_mistyped_main_is_reported() {
        let no_main = EntryPoint::new("no.main").with_stop(|| Ok(()));
        let nullary_main =
            EntryPoint::new("nullary.main").with_procedure("main", Procedure::nullary(|| Ok(())));
        let scope = scope_with(vec![no_main, nullary_main]);

        let err = launcher(Arc::clone(&scope), "no.main", &[]).0.launch().unwrap_err();
        assert!(matches!(err, LaunchError::MethodNotFound { procedure: "main", .. }));

        let err = launcher(scope, "nullary.main", &[]).0.launch().unwrap_err();
        assert!(matches!(
            err,
            LaunchError::WrongSignature { actual: "fn()", .. }
        ));
    }

    #[test]
    fn main_error_is_wrapped_with_cause() {
        let entry = EntryPoint::new("bad").with_main(|_| Err(Exploded(42).into()));
        let (l, _) = launcher(scope_with(vec![entry]), "bad", &[]);

        let err = l.launch().unwrap_err();
        let LaunchError::Invocation { entry, source } = err else {
            panic!("expected Invocation");
        };
        assert_eq!(entry, "bad");
        assert_eq!(source.downcast_ref::<Exploded>().map(|e| e.0), Some(42));
    }

    #[test]
    fn main_panic_is_wrapped() {
        let entry = EntryPoint::new("boom").with_main(|_| panic!("kaboom"));
        let (l, _) = launcher(scope_with(vec![entry]), "boom", &[]);

        let err = l.launch().unwrap_err();
        let LaunchError::Invocation { source, .. } = err else {
            panic!("expected Invocation");
        };
        assert_eq!(source.to_string(), "entry point panicked: kaboom");
    }

    #[test]
    fn missing_stop_publishes_unsupported_placeholder() {
        let entry = EntryPoint::new("plain").with_main(|_| Ok(()));
        let (l, slot) = launcher(scope_with(vec![entry]), "plain", &[]);

        assert!(matches!(slot.request_stop(), Err(StopError::NotRunning)));
        l.launch().unwrap();
        assert!(matches!(slot.request_stop(), Err(StopError::Unsupported(_))));
    }

    #[test]
    fn stop_with_arguments_is_not_a_stop_procedure() {
        let entry = EntryPoint::new("odd")
            .with_main(|_| Ok(()))
            .with_procedure("stop", Procedure::args(|_| Ok(())));
        let (l, slot) = launcher(scope_with(vec![entry]), "odd", &[]);

        l.launch().unwrap();
        assert!(matches!(slot.request_stop(), Err(StopError::Unsupported(_))));
    }

    #[test]
    fn stop_handle_is_published_before_main_runs() {
        let slot = fresh_slot();
        let stopped = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stopped);

        let entry = EntryPoint::new("svc")
            .with_main(move |_| {
                slot.request_stop()?;
                Ok(())
            })
            .with_stop(move || {
                flag.store(true, Ordering::SeqCst);
                Ok(())
            });
        let l = Launcher::new(scope_with(vec![entry]), "svc", Vec::new()).with_stop_slot(slot);

        l.launch().unwrap();
        assert!(stopped.load(Ordering::SeqCst));
    }

    #[test]
    fn stop_from_another_thread_ends_main() {
        let slot = fresh_slot();
        let (tx, rx) = std::sync::mpsc::channel::<()>();
        let rx = Mutex::new(rx);
        let tx = Mutex::new(tx);

        let entry = EntryPoint::new("daemon")
            .with_main(move |_| {
                rx.lock().unwrap().recv()?;
                Ok(())
            })
            .with_stop(move || {
                tx.lock().unwrap().send(())?;
                Ok(())
            });
        let l = Launcher::new(scope_with(vec![entry]), "daemon", Vec::new()).with_stop_slot(slot);

        let stopper = std::thread::spawn(move || {
            while slot.current().is_none() {
                std::thread::yield_now();
            }
            slot.request_stop()
        });

        l.launch().unwrap();
        stopper.join().unwrap().unwrap();
    }

    #[test]
    fn entry_point_from_parent_scope_is_launched() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let mut app = EntryTable::new();
        app.register(EntryPoint::new("app.Main").with_main(move |_| {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }))
        .unwrap();
        let parent = LoadingScope::builder("application").with_entries(app).build();
        let child = LoadingScope::builder("launcher").with_parent(parent).build();

        let (l, _) = launcher(child, "app.Main", &[]);
        l.launch().unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }
}

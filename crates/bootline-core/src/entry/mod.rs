//! Entry points: named tables of procedures the launcher can call.
//!
//! An entry point always needs a `main` procedure taking the argument vector.
//! A `stop` procedure taking nothing is optional and probed for at launch.
mod table;
pub use table::EntryTable;

use std::{collections::BTreeMap, fmt, sync::Arc};

use bootline_model::{MAIN_PROCEDURE, STOP_PROCEDURE};

/// Error raised by a hosted procedure.
pub type TargetError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outcome of a hosted procedure.
pub type TargetResult = Result<(), TargetError>;

/// Procedure receiving the residual argument vector.
pub type ArgsFn = Arc<dyn Fn(&[String]) -> TargetResult + Send + Sync>;

/// Procedure receiving nothing.
pub type NullaryFn = Arc<dyn Fn() -> TargetResult + Send + Sync>;

/// A callable registered under a name on an [`EntryPoint`].
#[derive(Clone)]
pub enum Procedure {
    Args(ArgsFn),
    Nullary(NullaryFn),
}

impl Procedure {
    pub fn args<F>(f: F) -> Self
    where
        F: Fn(&[String]) -> TargetResult + Send + Sync + 'static,
    {
        Self::Args(Arc::new(f))
    }

    pub fn nullary<F>(f: F) -> Self
    where
        F: Fn() -> TargetResult + Send + Sync + 'static,
    {
        Self::Nullary(Arc::new(f))
    }

    /// Human-readable signature, used in diagnostics.
    pub fn signature(&self) -> &'static str {
        match self {
            Procedure::Args(_) => "fn(&[String])",
            Procedure::Nullary(_) => "fn()",
        }
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

/// Named set of procedures.
///
/// # Examples
/// ```
/// use bootline_core::EntryPoint;
///
/// let entry = EntryPoint::new("demo.Hello")
///     .with_main(|args| {
///         println!("hello {args:?}");
///         Ok(())
///     });
/// assert!(entry.procedure("main").is_some());
/// assert!(entry.procedure("stop").is_none());
/// ```
#[derive(Clone)]
pub struct EntryPoint {
    name: String,
    procedures: BTreeMap<String, Procedure>,
}

impl EntryPoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            procedures: BTreeMap::new(),
        }
    }

    /// Register `procedure` under `name`, replacing any previous one.
    pub fn with_procedure(mut self, name: impl Into<String>, procedure: Procedure) -> Self {
        self.procedures.insert(name.into(), procedure);
        self
    }

    /// Register the `main` procedure.
    pub fn with_main<F>(self, f: F) -> Self
    where
        F: Fn(&[String]) -> TargetResult + Send + Sync + 'static,
    {
        self.with_procedure(MAIN_PROCEDURE, Procedure::args(f))
    }

    /// Register the `stop` procedure.
    pub fn with_stop<F>(self, f: F) -> Self
    where
        F: Fn() -> TargetResult + Send + Sync + 'static,
    {
        self.with_procedure(STOP_PROCEDURE, Procedure::nullary(f))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look a procedure up by name.
    pub fn procedure(&self, name: &str) -> Option<&Procedure> {
        self.procedures.get(name)
    }

    pub fn procedure_names(&self) -> impl Iterator<Item = &str> {
        self.procedures.keys().map(String::as_str)
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPoint")
            .field("name", &self.name)
            .field("procedures", &self.procedures)
            .finish()
    }
}

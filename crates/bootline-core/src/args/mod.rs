//! Command-line pre-processing done before the hosted program sees its
//! arguments: `-Dkey=value` assignments first, then an optional leading
//! explicit path list.
mod error;
pub use error::ArgsError;

mod property;
pub use property::{PropertyArgs, parse_assignment, split_properties};

mod class_path;
pub use class_path::{ClassPathArgs, split_class_path};

use bootline_model::{Assignment, PathSpec};

use crate::settings::Settings;

/// Fully split command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    assignments: Vec<Assignment>,
    class_path: Vec<PathSpec>,
    residual: Vec<String>,
}

impl CommandLine {
    /// Run both splitters in order. After a consumed `--` the remaining
    /// tokens are the residual as given, with no path list recognized.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let props = split_properties(args);
        let assignments = props.assignments().to_vec();
        let (class_path, residual) = if props.terminated() {
            (Vec::new(), props.into_residual())
        } else {
            split_class_path(props.into_residual())?.into_parts()
        };

        Ok(Self {
            assignments,
            class_path,
            residual,
        })
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Explicit path list entries, empty when no flag was given.
    pub fn class_path(&self) -> &[PathSpec] {
        &self.class_path
    }

    /// Arguments handed to the hosted program.
    pub fn residual(&self) -> &[String] {
        &self.residual
    }

    /// Apply every assignment, in order, to `settings`.
    pub fn apply(&self, settings: &dyn Settings) {
        for a in &self.assignments {
            settings.apply(a);
        }
    }
}

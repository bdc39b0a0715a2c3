use std::{
    env, io,
    path::{Path, PathBuf},
};

use bootline_model::{
    ARCHIVE_PATTERN, LIB_DIR, OPT_CLASSES_DIR, OPT_LIB_DIR, PROP_HOME, PROP_RUN_ARTIFACT, PathSpec,
};
use tracing::{debug, instrument};

use crate::{classpath::ClassPath, error::LaunchError, settings::Settings};

/// Directory layout a launch is assembled from.
///
/// ```text
/// <home>/
///   <run artifact>
///   lib/*.jar
///   opt/classes/
///   opt/lib/*.jar
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    home: PathBuf,
    run_artifact: Option<PathBuf>,
}

impl HomeLayout {
    /// Layout rooted at `home`, without a run artifact.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            run_artifact: None,
        }
    }

    /// Put `artifact` at the head of every assembled class path.
    pub fn with_run_artifact(mut self, artifact: impl Into<PathBuf>) -> Self {
        self.run_artifact = Some(artifact.into());
        self
    }

    /// Layout of the running executable: home is its canonical parent.
    pub fn detect() -> io::Result<Self> {
        let artifact = env::current_exe()?.canonicalize()?;
        let home = artifact
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent"))?
            .to_path_buf();
        Ok(Self::new(home).with_run_artifact(artifact))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn run_artifact(&self) -> Option<&Path> {
        self.run_artifact.as_deref()
    }

    /// Record home and run artifact as process-wide settings.
    pub fn record(&self, settings: &dyn Settings) {
        settings.set(PROP_HOME, &self.home.to_string_lossy());
        if let Some(artifact) = &self.run_artifact {
            settings.set(PROP_RUN_ARTIFACT, &artifact.to_string_lossy());
        }
    }

    /// Specs in launch order: run artifact, `explicit`, `lib/*.jar`,
    /// `opt/classes`, `opt/lib/*.jar`.
    pub fn specs(&self, explicit: &[PathSpec]) -> Result<Vec<PathSpec>, LaunchError> {
        let mut specs = Vec::with_capacity(explicit.len() + 4);
        if let Some(artifact) = &self.run_artifact {
            specs.push(PathSpec::new(artifact)?);
        }
        specs.extend_from_slice(explicit);
        specs.push(PathSpec::new(self.home.join(LIB_DIR).join(ARCHIVE_PATTERN))?);
        specs.push(PathSpec::new(self.home.join(OPT_CLASSES_DIR))?);
        specs.push(PathSpec::new(self.home.join(OPT_LIB_DIR).join(ARCHIVE_PATTERN))?);
        Ok(specs)
    }

    /// Assemble the class path for this layout.
    ///
    /// `lib` and `opt/lib` must be listable; `opt/classes` need not exist.
    #[instrument(level = "debug", skip(self, explicit), fields(home = %self.home.display()))]
    pub fn assemble(&self, explicit: &[PathSpec]) -> Result<ClassPath, LaunchError> {
        let cp = ClassPath::assemble(&self.specs(explicit)?)?;
        debug!(class_path = %cp, "home layout assembled");
        Ok(cp)
    }
}

mod domain;
pub use domain::{Assignment, Properties};
pub use domain::{
    ARCHIVE_PATTERN, ARG_TERMINATOR, CLASS_PATH_FLAGS, DEFAULT_MAIN_ENTRY, LIB_DIR,
    MAIN_PROCEDURE, OPT_CLASSES_DIR, OPT_LIB_DIR, PROP_CLASS_PATH, PROP_HOME, PROP_MAIN_ENTRY,
    PROP_RUN_ARTIFACT, STOP_PROCEDURE,
};

mod error;
pub use error::{ModelError, ModelResult};

mod spec;
pub use spec::{PathSpec, is_wildcard};

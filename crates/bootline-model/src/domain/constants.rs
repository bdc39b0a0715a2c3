//! Well-known names shared by the launcher crates.
//!
//! Property keys, directory conventions of a launcher home and the
//! procedure names an entry point is probed for.

/// Canonical parent directory of the running artifact.
pub const PROP_HOME: &str = "bootline.home";

/// Canonical path of the running artifact itself.
pub const PROP_RUN_ARTIFACT: &str = "bootline.run.artifact";

/// Aggregate path list of every resource handed to the launch scope.
///
/// Readable from outside the isolated scope.
pub const PROP_CLASS_PATH: &str = "bootline.class.path";

/// Overrides the name of the entry point resolved at launch.
pub const PROP_MAIN_ENTRY: &str = "bootline.main";

/// Entry point resolved when [`PROP_MAIN_ENTRY`] is not set.
pub const DEFAULT_MAIN_ENTRY: &str = "bootline.Main";

/// Required procedure, takes the residual argument vector.
pub const MAIN_PROCEDURE: &str = "main";

/// Optional procedure, takes nothing.
pub const STOP_PROCEDURE: &str = "stop";

/// Library directory under home, wildcard-expanded.
pub const LIB_DIR: &str = "lib";

/// Loose resources under home, added literally.
pub const OPT_CLASSES_DIR: &str = "opt/classes";

/// Optional library directory under home, wildcard-expanded.
pub const OPT_LIB_DIR: &str = "opt/lib";

/// Archive pattern applied to the library directories.
pub const ARCHIVE_PATTERN: &str = "*.jar";

/// Flags introducing an explicit path list on the command line.
pub const CLASS_PATH_FLAGS: [&str; 2] = ["-cp", "-classpath"];

/// Stops `-D` recognition; everything after it is passed through.
pub const ARG_TERMINATOR: &str = "--";

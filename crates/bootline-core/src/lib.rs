pub mod args;
pub mod classpath;
pub mod entry;
pub mod error;
pub mod fileset;
pub mod launch;
pub mod pattern;
pub mod scope;
pub mod settings;
pub mod stop;

pub use args::{ArgsError, ClassPathArgs, CommandLine, PropertyArgs};
pub use classpath::{ClassPath, HomeLayout};
pub use entry::{EntryPoint, EntryTable, Procedure, TargetError, TargetResult};
pub use error::LaunchError;
pub use launch::Launcher;
pub use pattern::{CaseSensitivity, MatchToken, Pattern};
pub use scope::LoadingScope;
pub use settings::{Settings, SystemProperties, system_properties};
pub use stop::{StopError, StopHandle, StopSlot, request_stop};

pub mod prelude {
    pub use crate::classpath::{ClassPath, HomeLayout};
    pub use crate::entry::{EntryPoint, EntryTable};
    pub use crate::error::LaunchError;
    pub use crate::launch::Launcher;
    pub use crate::scope::LoadingScope;
    pub use crate::settings::{Settings, system_properties};
    pub use crate::stop::{StopError, request_stop};
}

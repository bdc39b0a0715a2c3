mod path;
pub use path::{PathSpec, is_wildcard};

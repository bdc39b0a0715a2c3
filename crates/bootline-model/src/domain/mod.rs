mod assignment;
pub use assignment::Assignment;

mod properties;
pub use properties::Properties;

mod constants;
pub use constants::*;

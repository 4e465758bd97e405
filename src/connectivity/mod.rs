pub mod config;
pub mod fixtures;
pub mod probe;
pub mod report;
pub mod scenario;

pub use config::*;
pub use fixtures::*;
pub use probe::*;
pub use report::*;
pub use scenario::*;

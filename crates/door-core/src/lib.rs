#![deny(warnings)]
pub mod belief;
pub mod error;
pub mod model;

pub use error::FilterError;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "door-belief"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

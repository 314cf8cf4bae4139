pub mod config;
pub mod dates;
pub mod records;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

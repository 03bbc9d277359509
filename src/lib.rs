pub mod baseline;
pub mod config;
pub mod logging;
pub mod tracker;
pub mod version;

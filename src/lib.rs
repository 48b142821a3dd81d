pub mod browser;
pub mod cli;
pub mod cluster;
pub mod config;
pub mod credentials;
pub mod dashboard;
pub mod errors;
pub mod logging;
pub mod service_util;

//! Operations console for geofenced duty assignment.
//!
//! Admins see the officer roster merged with duties and verification
//! status, a colored live map, and assign duties. Officers list their own
//! duties, report positions and check in.

pub mod aggregator;
pub mod app;
pub mod assign;
pub mod auth;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod officer;
pub mod render;
pub mod session;

pub use app::App;
pub use error::ConsoleError;

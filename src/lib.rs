//! office-shell: a native desktop window around the Microsoft Office web apps.
//!
//! The library holds everything except the binary entry point so that the
//! controller can be driven from integration tests without a browser engine.

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod shell;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;

// office-shell shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod office_app;
pub mod settings;
pub mod tab;

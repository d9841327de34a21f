//! Configuration management module
//!
//! Responsible for loading and managing application configuration from
//! environment variables and the local API key file.

pub mod settings;

pub use settings::Settings;

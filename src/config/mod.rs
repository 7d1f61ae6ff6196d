//! Configuration module for Money Tracker
//!
//! This module provides configuration management including:
//! - Platform-appropriate path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;

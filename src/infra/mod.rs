//! Infrastructure layer (adapters/implementations).
//!
//! The diff engine itself plus the filesystem and configuration plumbing around it.

pub mod app_config;
pub mod diff;
pub mod files;

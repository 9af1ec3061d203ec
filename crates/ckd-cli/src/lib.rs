//! CLI library components for the CKD screening service.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;

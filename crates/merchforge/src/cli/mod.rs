//! Command implementations for the merchforge CLI.

pub mod common;
pub mod config;
pub mod edit;
pub mod export;
pub mod generate;
pub mod mockup;
pub mod types;

//! Command-line driver for ormcheck.

pub mod args;
pub mod config;
pub mod driver;
pub mod input;
pub mod reporter;

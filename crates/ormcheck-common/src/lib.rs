//! Common types and utilities for the ormcheck crates.
//!
//! This crate provides foundational types used across all ormcheck crates:
//! - String interning (`Atom`, `Interner`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message templates)
//! - Checker limits and thresholds

// String interning for class names
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;

pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message, get_diagnostic_message, get_message_template,
};

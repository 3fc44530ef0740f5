//! Diagnostic types and message lookup for the association checker.
//!
//! Message templates use `{0}`, `{1}`, ... placeholders that are filled in
//! with `format_message`. Both mismatch directions share one identifier so a
//! host analyser can ignore them together.

use serde::Serialize;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Message = 2,
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub identifier: &'static str,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    /// The mapped type admits values the declared property type rejects.
    pub const DATABASE_CAN_CONTAIN: u32 = 9001;
    /// The declared property type admits values the mapping rejects.
    pub const PROPERTY_CAN_CONTAIN: u32 = 9002;
}

pub mod diagnostic_messages {
    pub const DATABASE_CAN_CONTAIN: &str =
        "Property {0}::${1} type mapping mismatch: database can contain {2} but property expects {3}.";
    pub const PROPERTY_CAN_CONTAIN: &str =
        "Property {0}::${1} type mapping mismatch: property can contain {2} but database expects {3}.";
}

/// Identifier attached to every association type mismatch.
pub const ASSOCIATION_TYPE_IDENTIFIER: &str = "doctrine.associationType";

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::DATABASE_CAN_CONTAIN,
        category: DiagnosticCategory::Error,
        identifier: ASSOCIATION_TYPE_IDENTIFIER,
        message: diagnostic_messages::DATABASE_CAN_CONTAIN,
    },
    DiagnosticMessage {
        code: diagnostic_codes::PROPERTY_CAN_CONTAIN,
        category: DiagnosticCategory::Error,
        identifier: ASSOCIATION_TYPE_IDENTIFIER,
        message: diagnostic_messages::PROPERTY_CAN_CONTAIN,
    },
];

/// A checker finding attached to a source line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub file: String,
    pub line: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub identifier: &'static str,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(
        file: impl Into<String>,
        line: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        let identifier = get_diagnostic_message(code)
            .map(|m| m.identifier)
            .unwrap_or(ASSOCIATION_TYPE_IDENTIFIER);
        Self {
            file: file.into(),
            line,
            message_text: message.into(),
            category: DiagnosticCategory::Error,
            code,
            identifier,
        }
    }

    /// Build a diagnostic from a registered message template.
    ///
    /// Returns `None` for an unknown code.
    #[must_use]
    pub fn from_template(file: impl Into<String>, line: u32, code: u32, args: &[&str]) -> Option<Self> {
        let definition = get_diagnostic_message(code)?;
        Some(Self {
            file: file.into(),
            line,
            message_text: format_message(definition.message, args),
            category: definition.category,
            code,
            identifier: definition.identifier,
        })
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;

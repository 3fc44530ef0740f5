use colored::Colorize;
use serde::Serialize;

use ormcheck_common::Diagnostic;

/// One entry of `--format json` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JsonDiagnostic<'a> {
    pub file: &'a str,
    pub line: u32,
    pub message: &'a str,
    pub identifier: &'a str,
}

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// `file:line: message` lines.
    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let file = if diagnostic.file.is_empty() {
            "<unknown>"
        } else {
            diagnostic.file.as_str()
        };
        let location = format!("{file}:{}", diagnostic.line);
        let location = if self.color {
            location.cyan().to_string()
        } else {
            location
        };
        format!("{location}: {}", diagnostic.message_text)
    }

    pub fn summary(&self, error_count: usize, classes_checked: usize) -> String {
        let classes = plural(classes_checked, "class", "classes");
        if error_count == 0 {
            let text = format!("No errors in {classes_checked} {classes}.");
            return if self.color {
                text.green().to_string()
            } else {
                text
            };
        }
        let errors = plural(error_count, "error", "errors");
        let text = format!("Found {error_count} {errors} in {classes_checked} {classes}.");
        if self.color {
            text.red().bold().to_string()
        } else {
            text
        }
    }

    pub fn render_json(diagnostics: &[Diagnostic]) -> serde_json::Result<String> {
        let entries: Vec<JsonDiagnostic<'_>> = diagnostics
            .iter()
            .map(|diagnostic| JsonDiagnostic {
                file: &diagnostic.file,
                line: diagnostic.line,
                message: &diagnostic.message_text,
                identifier: diagnostic.identifier,
            })
            .collect();
        serde_json::to_string_pretty(&entries)
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod tests;

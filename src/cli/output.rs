//! Output formatting for CLI commands

use std::fmt::Display;
use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
    color: bool,
}

impl Output {
    /// Colors are only used for text output on an interactive terminal
    pub fn new(format: OutputFormat, verbose: bool, no_color: bool) -> Self {
        let color = format == OutputFormat::Text && !no_color && std::io::stdout().is_terminal();
        Self {
            format,
            verbose,
            color,
        }
    }

    /// Prints a success message (text only, ignored in JSON mode)
    pub fn success(&self, message: &str) {
        if self.format == OutputFormat::Text {
            println!("{}", message);
        }
    }

    /// Prints structured data as a single JSON document (JSON only)
    pub fn data<T: Serialize>(&self, data: &T) {
        if self.format == OutputFormat::Json {
            if let Ok(json) = serde_json::to_string(data) {
                println!("{}", json);
            }
        }
    }

    /// Prints a text line in the given color (text only, ignored in JSON mode)
    pub fn line(&self, text: impl Display, color: Color) {
        if self.format != OutputFormat::Text {
            return;
        }
        if self.color {
            println!("{}", text.to_string().with(color));
        } else {
            println!("{}", text);
        }
    }

    /// Prints a bold text line in the given color (text only)
    pub fn heading(&self, text: impl Display, color: Color) {
        if self.format != OutputFormat::Text {
            return;
        }
        if self.color {
            println!("{}", text.to_string().with(color).bold());
        } else {
            println!("{}", text);
        }
    }

    /// Prints a blank line (text only)
    pub fn blank(&self) {
        if self.format == OutputFormat::Text {
            println!();
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Returns true if escape sequences will be written
    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_is_never_colored() {
        let output = Output::new(OutputFormat::Json, false, false);
        assert!(output.is_json());
        assert!(!output.is_colored());
    }

    #[test]
    fn no_color_disables_styling() {
        let output = Output::new(OutputFormat::Text, false, true);
        assert!(!output.is_json());
        assert!(!output.is_colored());
    }
}

//! Terminal emitter.
//!
//! Human-readable error output with optional ANSI color support. The
//! offending input is echoed with a caret line under the error span.

use std::io::{self, Write};

use crate::ExprError;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Emit one error against the input it was raised for.
    ///
    /// ```text
    /// error[E1002]: missing ')'.
    ///   |
    ///   | (1 + 2
    ///   |       ^
    /// ```
    pub fn emit(&mut self, error: &ExprError, source: &str) {
        self.write_colored("error", colors::ERROR);
        if self.colors {
            let _ = write!(self.writer, "{}[{}]{}", colors::BOLD, error.code(), colors::RESET);
        } else {
            let _ = write!(self.writer, "[{}]", error.code());
        }
        let _ = writeln!(self.writer, ": {error}");

        let Some(span) = error.span else {
            return;
        };

        self.write_gutter();
        let _ = writeln!(self.writer);
        self.write_gutter();
        let _ = writeln!(self.writer, " {source}");

        let (column, width) = caret_columns(source, span.to_range());
        self.write_gutter();
        let _ = write!(self.writer, " {}", " ".repeat(column));
        self.write_colored(&"^".repeat(width), colors::ERROR);
        let _ = writeln!(self.writer);
    }

    fn write_gutter(&mut self) {
        self.write_colored("  |", colors::GUTTER);
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Column (in chars) where the caret starts and how many carets to draw.
///
/// Byte offsets that do not fall on a char boundary are clamped to the
/// nearest earlier boundary. At least one caret is always drawn.
fn caret_columns(source: &str, range: std::ops::Range<usize>) -> (usize, usize) {
    let floor = |mut at: usize| {
        at = at.min(source.len());
        while !source.is_char_boundary(at) {
            at -= 1;
        }
        at
    };
    let start = floor(range.start);
    let end = floor(range.end).max(start);
    let column = source[..start].chars().count();
    let width = source[start..end].chars().count().max(1);
    (column, width)
}

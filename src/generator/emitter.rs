//! Dart code emitter - builds generated source text
//!
//! This module provides the indentation-tracking buffer the artifact templates write into.

use std::fmt::Write;

use crate::config::MAX_INDENT_WIDTH;

/// A buffer for building Dart source code with proper indentation
#[derive(Debug)]
pub struct DartEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: String,
}

impl Default for DartEmitter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl DartEmitter {
    /// Create an emitter indenting by `indent_width` spaces per level, capped at [`MAX_INDENT_WIDTH`].
    pub fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: " ".repeat(indent_width.min(MAX_INDENT_WIDTH)),
        }
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write formatted text as one indented line
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_emitter_empty_output() {
        let emitter = DartEmitter::default();
        assert!(emitter.is_empty());
        assert_eq!(emitter.finish(), "");
    }

    #[test]
    fn test_block_indents_body() {
        let mut emitter = DartEmitter::new(2);
        emitter.block("class A", |e| {
            e.line("final x = 1;");
            e.block("void f()", |e| e.line("x;"));
        });
        assert_eq!(
            emitter.finish(),
            "class A {\n  final x = 1;\n  void f() {\n    x;\n  }\n}\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_trailing_whitespace() {
        let mut emitter = DartEmitter::new(4);
        emitter.indent();
        emitter.blank_line();
        assert_eq!(emitter.finish(), "\n");
    }

    #[test]
    fn test_indent_width_is_capped() {
        let mut emitter = DartEmitter::new(usize::MAX);
        emitter.indent();
        emitter.line("x");
        assert_eq!(emitter.finish(), format!("{}x\n", " ".repeat(MAX_INDENT_WIDTH)));
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let mut emitter = DartEmitter::new(2);
        emitter.dedent();
        emitter.line("x");
        assert_eq!(emitter.finish(), "x\n");
    }

    #[test]
    fn test_linef_formats() {
        let mut emitter = DartEmitter::new(2);
        emitter.indent();
        emitter.linef(format_args!("final {} = {};", "a", 1));
        assert_eq!(emitter.finish(), "  final a = 1;\n");
    }
}

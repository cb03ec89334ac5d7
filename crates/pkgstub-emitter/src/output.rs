//! Indentation-aware output buffer.

use pkgstub_common::limits::{INDENT_WIDTH, OUTPUT_BUFFER_CAPACITY};

/// Line-oriented text buffer with a tracked indentation level.
///
/// Every line written through [`StubWriter::println`] is prefixed with the
/// current indentation, including the continuation lines of multi-line text,
/// so pre-formatted blocks (multi-line `sig do ... end`, verbatim delegator
/// source) nest correctly.
pub struct StubWriter {
    buf: String,
    indent_level: u32,
    tab: String,
}

impl Default for StubWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StubWriter {
    pub fn new() -> Self {
        StubWriter {
            buf: String::with_capacity(OUTPUT_BUFFER_CAPACITY),
            indent_level: 0,
            tab: String::new(),
        }
    }

    pub fn println(&mut self, text: &str) {
        self.buf.push_str(&self.tab);
        if self.tab.is_empty() {
            self.buf.push_str(text);
        } else {
            let mut lines = text.split('\n');
            if let Some(first) = lines.next() {
                self.buf.push_str(first);
            }
            for line in lines {
                self.buf.push('\n');
                self.buf.push_str(&self.tab);
                self.buf.push_str(line);
            }
        }
        self.buf.push('\n');
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
        self.reset_tab();
    }

    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
        self.reset_tab();
    }

    fn reset_tab(&mut self) {
        self.tab = " ".repeat(self.indent_level as usize * INDENT_WIDTH);
    }

    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Take the accumulated text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_println_indents_every_line() {
        let mut out = StubWriter::new();
        out.println("class A");
        out.increase_indent();
        out.println("sig do\n  void\nend");
        out.decrease_indent();
        out.println("end");
        assert_eq!(out.take(), "class A\n  sig do\n    void\n  end\nend\n");
    }

    #[test]
    fn test_take_resets_buffer_but_not_indent() {
        let mut out = StubWriter::new();
        out.increase_indent();
        out.println("x");
        assert_eq!(out.take(), "  x\n");
        assert!(out.is_empty());
        assert_eq!(out.indent_level(), 1);
    }

    #[test]
    fn test_decrease_indent_saturates() {
        let mut out = StubWriter::new();
        out.decrease_indent();
        out.println("top");
        assert_eq!(out.take(), "top\n");
    }
}

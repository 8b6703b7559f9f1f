//! Live parse trace
//!
//! The parser announces every rule application as it happens. [`TraceLog`]
//! collects those announcements as pre-indented lines. A failed parse leaves
//! the lines recorded up to the failure point, so callers can still print
//! the partial trace.

/// Collected rule-application lines, two spaces of indent per nesting level.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    lines: Vec<String>,
}

impl TraceLog {
    pub fn new() -> Self {
        TraceLog { lines: Vec::new() }
    }

    /// Records one rule application at the given nesting depth.
    pub fn rule(&mut self, depth: usize, production: &str) {
        self.lines.push(format!("{}{}", "  ".repeat(depth), production));
    }

    /// The lines recorded so far, in application order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

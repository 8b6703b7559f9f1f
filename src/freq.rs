//! Character frequency report
//!
//! Streams characters, counts occurrences, and reports one `char : count`
//! line per distinct character in order of first appearance. Printable
//! characters are shown literally; everything else as hex, so control
//! characters stay visible in the report.

use rustc_hash::FxHashMap;

/// Character counts with a stable first-appearance reporting order.
#[derive(Debug, Clone, Default)]
pub struct FreqTable {
    counts: FxHashMap<char, u64>,
    order: Vec<char>,
}

impl FreqTable {
    pub fn new() -> Self {
        FreqTable {
            counts: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Counts every character the iterator yields.
    pub fn tally(chars: impl Iterator<Item = char>) -> Self {
        let mut table = FreqTable::new();
        for c in chars {
            table.record(c);
        }
        table
    }

    /// Counts one character.
    pub fn record(&mut self, c: char) {
        let count = self.counts.entry(c).or_insert(0);
        if *count == 0 {
            self.order.push(c);
        }
        *count += 1;
    }

    /// Occurrence count for one character.
    pub fn count(&self, c: char) -> u64 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Distinct characters in first-appearance order.
    pub fn chars(&self) -> &[char] {
        &self.order
    }

    /// Report lines, one per distinct character, in first-appearance order.
    pub fn report(&self) -> Vec<String> {
        self.order
            .iter()
            .map(|&c| format!("{} : {}", render(c), self.count(c)))
            .collect()
    }
}

/// Printable ASCII (space included) stays literal; everything else renders
/// as hex so each report line is unambiguous.
fn render(c: char) -> String {
    if c.is_ascii_graphic() || c == ' ' {
        c.to_string()
    } else if (c as u32) <= 0xFF {
        format!("0x{:02X}", c as u32)
    } else {
        format!("U+{:04X}", c as u32)
    }
}

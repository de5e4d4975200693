//! Parsing statistics for decoded reports
//!
//! Field extraction gaps never abort a parse. They are counted here so
//! callers can tell a clean report from one the parser only partly read.

/// Statistics of a single parse pass
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Lines in the report text, including blank ones
    pub total_lines: usize,

    /// Lines whose header was recognized
    pub recognized_lines: usize,

    /// Recognized lines whose data could not be extracted
    pub field_gaps: usize,

    /// Extraction failures for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            recognized_lines: 0,
            field_gaps: 0,
            errors: Vec::new(),
        }
    }

    /// Record a field that was recognized but not extracted
    pub fn record_gap(&mut self, error: impl ToString) {
        self.field_gaps += 1;
        self.errors.push(error.to_string());
    }

    /// True when every recognized line was extracted
    pub fn is_clean(&self) -> bool {
        self.field_gaps == 0
    }

    /// Share of lines with a recognized header, as a percentage
    pub fn recognition_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.recognized_lines as f64 / self.total_lines as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

use kit::types::diagnostics::{Diagnostic, DiagnosticLevel};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationResult {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub notes: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a diagnostic under the bucket matching its level
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Error => self.errors.push(diagnostic),
            DiagnosticLevel::Warning => self.warnings.push(diagnostic),
            DiagnosticLevel::Note => self.notes.push(diagnostic),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.notes.is_empty()
    }

    /// All diagnostics, most severe first
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter()).chain(self.notes.iter())
    }
}

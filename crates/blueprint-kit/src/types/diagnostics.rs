use std::fmt::Display;

pub use super::diagnostic_types::DiagnosticLevel;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    pub code: Option<String>,
    pub context: Option<String>,
    pub documentation: Option<String>,
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error_from_string(message: String) -> Diagnostic {
        Diagnostic::with_level(DiagnosticLevel::Error, message)
    }

    pub fn warning_from_string(message: String) -> Diagnostic {
        Diagnostic::with_level(DiagnosticLevel::Warning, message)
    }

    pub fn note_from_string(message: String) -> Diagnostic {
        Diagnostic::with_level(DiagnosticLevel::Note, message)
    }

    fn with_level(level: DiagnosticLevel, message: String) -> Diagnostic {
        Diagnostic {
            level,
            message,
            code: None,
            context: None,
            documentation: None,
            suggestion: None,
        }
    }

    // Builder methods
    pub fn error(message: impl Into<String>) -> Self {
        Self::error_from_string(message.into())
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::warning_from_string(message.into())
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::note_from_string(message.into())
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = &self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(context) = &self.context {
            write!(f, "\n  --> {}", context)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  help: {}", suggestion)?;
        }
        Ok(())
    }
}

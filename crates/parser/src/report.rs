//! ParseReport - tagged success/failure result used by the equipment path.
//!
//! The equipment assembler accumulates every error it finds in a subtree
//! instead of raising the first one, so its natural return shape is a report
//! carrying either the built value or the full message list, never both.

use sheetforge_domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport<T> {
    data: Option<T>,
    errors: Vec<String>,
}

impl<T> ParseReport<T> {
    /// A successful report carrying the built value.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// A failed report carrying every collected message.
    pub fn fail(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }

    pub fn success(&self) -> bool {
        self.data.is_some() && self.errors.is_empty()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Escalates the report to a `Result`, wrapping the message list into a
    /// composite [`DomainError::Invalid`] on failure.
    pub fn into_result(self) -> Result<T, DomainError> {
        match self.data {
            Some(data) if self.errors.is_empty() => Ok(data),
            _ => Err(DomainError::invalid(self.errors)),
        }
    }
}

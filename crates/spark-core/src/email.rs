//! Validated waitlist email input.

use std::fmt;

use crate::error::SubmitError;

/// A validated, trimmed email address.
///
/// The accept rule matches the signup form: no whitespace anywhere, exactly
/// one `@` with a non-empty local part, and a domain containing a dot that
/// is neither its first nor its last character. This is a deliberately
/// permissive format gate, not a deliverability check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse raw field input, trimming surrounding whitespace first.
    pub fn parse(raw: &str) -> Result<Self, SubmitError> {
        let candidate = raw.trim();
        if Self::is_valid(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(SubmitError::InvalidEmail)
        }
    }

    /// Apply the accept rule to an already-trimmed candidate.
    pub fn is_valid(candidate: &str) -> bool {
        if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
            return false;
        }
        let (local, domain) = match candidate.split_once('@') {
            Some(parts) => parts,
            None => return false,
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        // The dot must have at least one character on each side.
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }

    /// The validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

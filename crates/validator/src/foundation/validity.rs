//! Result-style outcome of a validation.

use crate::foundation::ValidationError;

/// The outcome of [`Rule::validate`](crate::foundation::Rule::validate).
///
/// Equivalent to `Result<(), ValidationError>`, for callers that would rather
/// match on an outcome than propagate a failure with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Validity {
    /// The input satisfied the rule.
    Valid,
    /// The input was rejected; the report explains why.
    Invalid(ValidationError),
}

impl Validity {
    /// Returns true if the input was accepted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns true if the input was rejected.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the report, if the input was rejected.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        self.into()
    }
}

impl From<Result<(), ValidationError>> for Validity {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(error) => Self::Invalid(error),
        }
    }
}

impl From<Validity> for Result<(), ValidationError> {
    fn from(validity: Validity) -> Self {
        match validity {
            Validity::Valid => Ok(()),
            Validity::Invalid(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let valid: Validity = Ok(()).into();
        assert!(valid.is_valid());
        assert!(valid.error().is_none());
        assert!(valid.into_result().is_ok());

        let invalid: Validity = Err(ValidationError::new("odd", "must be odd")).into();
        assert!(invalid.is_invalid());
        assert_eq!(invalid.error().map(|e| e.id.as_ref()), Some("odd"));
        assert!(invalid.into_result().is_err());
    }
}

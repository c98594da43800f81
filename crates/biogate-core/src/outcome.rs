//! Terminal outcome of a single authentication request.

use crate::error::BiometricError;

/// Result of one `authenticate` call, delivered exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    /// The platform accepted the biometric challenge.
    Success,
    /// The challenge did not succeed; carries the platform diagnostic.
    Failure(BiometricError),
}

impl AuthenticationOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<Result<(), BiometricError>> for AuthenticationOutcome {
    fn from(result: Result<(), BiometricError>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(e) => Self::Failure(e),
        }
    }
}

impl From<AuthenticationOutcome> for Result<(), BiometricError> {
    fn from(outcome: AuthenticationOutcome) -> Self {
        match outcome {
            AuthenticationOutcome::Success => Ok(()),
            AuthenticationOutcome::Failure(e) => Err(e),
        }
    }
}

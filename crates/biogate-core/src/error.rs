//! Biometric error types for `biogate-core`.

use thiserror::Error;

/// `LAErrorAuthenticationFailed`
pub const LA_ERROR_AUTHENTICATION_FAILED: i64 = -1;
/// `LAErrorUserCancel`
pub const LA_ERROR_USER_CANCEL: i64 = -2;
/// `LAErrorBiometryNotAvailable`
pub const LA_ERROR_BIOMETRY_NOT_AVAILABLE: i64 = -6;
/// `LAErrorBiometryNotEnrolled`
pub const LA_ERROR_BIOMETRY_NOT_ENROLLED: i64 = -7;
/// `LAErrorBiometryLockout`
pub const LA_ERROR_BIOMETRY_LOCKOUT: i64 = -8;

/// Errors reported by the platform authentication service.
///
/// String payloads carry the platform's localized description verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BiometricError {
    /// No biometric sensor on this device.
    #[error("biometric hardware not available: {0}")]
    HardwareUnavailable(String),

    /// Sensor present but no biometric data registered.
    #[error("no biometrics enrolled: {0}")]
    NotEnrolled(String),

    /// Too many recent failures; a fallback credential is required to re-enable biometry.
    #[error("biometry locked out: {0}")]
    LockedOut(String),

    /// The user dismissed the system prompt.
    #[error("authentication cancelled by user: {0}")]
    UserCanceled(String),

    /// The sensor read did not match the enrolled biometric.
    #[error("biometric challenge failed: {0}")]
    ChallengeFailed(String),

    /// Any other platform failure code.
    #[error("platform error (code {code}): {message}")]
    Platform {
        /// Raw platform error code.
        code: i64,
        /// Localized description supplied by the platform.
        message: String,
    },

    /// The platform reported failure without a structured error.
    #[error("unknown error")]
    Unknown,
}

impl BiometricError {
    /// Classify a platform error code and its localized description.
    #[must_use]
    pub fn from_platform(code: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            LA_ERROR_AUTHENTICATION_FAILED => Self::ChallengeFailed(message),
            LA_ERROR_USER_CANCEL => Self::UserCanceled(message),
            LA_ERROR_BIOMETRY_NOT_AVAILABLE => Self::HardwareUnavailable(message),
            LA_ERROR_BIOMETRY_NOT_ENROLLED => Self::NotEnrolled(message),
            LA_ERROR_BIOMETRY_LOCKOUT => Self::LockedOut(message),
            _ => Self::Platform { code, message },
        }
    }

    /// Raw platform code this error was built from, if any.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::ChallengeFailed(_) => Some(LA_ERROR_AUTHENTICATION_FAILED),
            Self::UserCanceled(_) => Some(LA_ERROR_USER_CANCEL),
            Self::HardwareUnavailable(_) => Some(LA_ERROR_BIOMETRY_NOT_AVAILABLE),
            Self::NotEnrolled(_) => Some(LA_ERROR_BIOMETRY_NOT_ENROLLED),
            Self::LockedOut(_) => Some(LA_ERROR_BIOMETRY_LOCKOUT),
            Self::Platform { code, .. } => Some(*code),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_classified() {
        assert_eq!(
            BiometricError::from_platform(-1, "mismatch"),
            BiometricError::ChallengeFailed("mismatch".into())
        );
        assert_eq!(
            BiometricError::from_platform(-2, "cancel"),
            BiometricError::UserCanceled("cancel".into())
        );
        assert_eq!(
            BiometricError::from_platform(-6, "no sensor"),
            BiometricError::HardwareUnavailable("no sensor".into())
        );
        assert_eq!(
            BiometricError::from_platform(-7, "no enrollment"),
            BiometricError::NotEnrolled("no enrollment".into())
        );
        assert_eq!(
            BiometricError::from_platform(-8, "lockout"),
            BiometricError::LockedOut("lockout".into())
        );
    }

    #[test]
    fn unknown_code_keeps_code_and_message() {
        let err = BiometricError::from_platform(-1004, "not interactive");
        assert_eq!(
            err,
            BiometricError::Platform {
                code: -1004,
                message: "not interactive".into()
            }
        );
        assert_eq!(err.code(), Some(-1004));
    }

    #[test]
    fn code_matches_classification() {
        for code in [-1, -2, -6, -7, -8, -4, -10] {
            assert_eq!(BiometricError::from_platform(code, "x").code(), Some(code));
        }
        assert_eq!(BiometricError::Unknown.code(), None);
    }

    #[test]
    fn display_forwards_platform_description() {
        assert_eq!(
            BiometricError::LockedOut("Biometry is locked out.".into()).to_string(),
            "biometry locked out: Biometry is locked out."
        );
        assert_eq!(
            BiometricError::Platform {
                code: -4,
                message: "System canceled".into()
            }
            .to_string(),
            "platform error (code -4): System canceled"
        );
        assert_eq!(BiometricError::Unknown.to_string(), "unknown error");
    }
}

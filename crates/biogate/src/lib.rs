//! `biogate` — Touch ID / Face ID / Optic ID behind one stateless facade.
//!
//! [`BiometricGate`] runs a biometric challenge, checks availability, and
//! reports the supported biometry class. All security decisions belong to
//! the host's authentication service; the gate only forwards its answers
//! and delivers callbacks on a UI-safe context.
//!
//! The free functions below use [`BiometricGate::system`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod context;
pub mod dispatch;
pub mod gate;
pub mod platform;
pub mod report;

pub use biogate_core::{
    AuthenticationOutcome, BiometricError, BiometryClass, GateConfig, HostKind,
};
pub use context::{AuthContext, ContextFactory, Reply};
#[cfg(target_vendor = "apple")]
pub use dispatch::MainQueue;
pub use dispatch::{DefaultDispatcher, Job, RuntimeDispatcher, ThreadDispatcher, UiDispatcher};
pub use gate::BiometricGate;
pub use platform::{SystemContextFactory, UnsupportedContext};
pub use report::CapabilityReport;

/// Run a biometric challenge with the system gate.
///
/// See [`BiometricGate::authenticate`].
pub fn authenticate<S, E>(reason: &str, on_success: S, on_failure: E)
where
    S: FnOnce() + Send + 'static,
    E: FnOnce(BiometricError) + Send + 'static,
{
    BiometricGate::system().authenticate(reason, on_success, on_failure);
}

/// Whether biometric authentication is available with the system gate.
#[must_use]
pub fn is_available() -> bool {
    BiometricGate::system().is_available()
}

/// Biometry class exposed by the current hardware.
#[must_use]
pub fn supported_type() -> BiometryClass {
    BiometricGate::system().supported_type()
}

/// Display name of [`supported_type`].
#[must_use]
pub fn supported_type_name() -> &'static str {
    BiometricGate::system().supported_type_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_consistent_with_type() {
        assert_eq!(supported_type_name(), supported_type().display_name());
    }

    #[cfg(not(target_vendor = "apple"))]
    #[test]
    fn system_gate_without_service_is_unavailable() {
        assert!(!is_available());
        assert_eq!(supported_type(), BiometryClass::None);
        assert_eq!(
            supported_type_name(),
            "The device does not support biometry"
        );
    }

    #[cfg(not(target_vendor = "apple"))]
    #[test]
    fn system_authenticate_fails_synchronously() {
        use std::sync::{Arc, Mutex};

        let failure = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&failure);
        authenticate(
            "Unlock",
            || panic!("success must not fire"),
            move |e| *sink.lock().unwrap() = Some(e),
        );
        assert!(matches!(
            failure.lock().unwrap().take(),
            Some(BiometricError::HardwareUnavailable(_))
        ));
    }
}

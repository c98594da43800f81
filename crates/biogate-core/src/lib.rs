//! `biogate-core` — platform-independent types for the biometric gate.
//!
//! Zero FFI, zero async: the biometry classes the platform can report,
//! the error taxonomy forwarded to callers, and the host-kind policy that
//! decides which classes count as "available".

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod biometry;
pub mod config;
pub mod error;
pub mod host;
pub mod outcome;

pub use biometry::BiometryClass;
pub use config::GateConfig;
pub use error::BiometricError;
pub use host::HostKind;
pub use outcome::AuthenticationOutcome;

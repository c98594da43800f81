//! Serializable capability snapshot for host applications.

use biogate_core::{BiometryClass, HostKind};
use serde::{Deserialize, Serialize};

/// Biometric capability of the current device, taken from one context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityReport {
    /// Whether biometric authentication is available under the host policy.
    pub available: bool,
    /// Detected biometry class.
    pub biometry: BiometryClass,
    /// Human-readable name of `biometry` (e.g., "Touch ID").
    pub display_name: String,
    /// Host kind whose policy produced `available`.
    pub host: HostKind,
}

impl CapabilityReport {
    /// Report for a device with nothing to offer.
    #[must_use]
    pub fn unavailable(host: HostKind) -> Self {
        Self {
            available: false,
            biometry: BiometryClass::None,
            display_name: BiometryClass::None.display_name().to_string(),
            host,
        }
    }
}

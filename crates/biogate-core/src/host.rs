//! Host kind — which biometry classes count as "available" on this build.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::biometry::BiometryClass;

/// Kind of host the gate runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostKind {
    /// Desktop-class hardware (macOS): only Touch ID exists.
    Desktop,
    /// Phones and tablets (iOS, iPadOS).
    Handheld,
    /// Head-mounted devices (visionOS).
    Headset,
}

impl HostKind {
    /// Host kind of the current compile target.
    #[must_use]
    pub const fn current() -> Self {
        #[cfg(target_os = "ios")]
        {
            Self::Handheld
        }
        #[cfg(target_os = "visionos")]
        {
            Self::Headset
        }
        #[cfg(not(any(target_os = "ios", target_os = "visionos")))]
        {
            Self::Desktop
        }
    }

    /// Whether a detected class counts as available on this host.
    #[must_use]
    pub const fn accepts(&self, class: BiometryClass) -> bool {
        match self {
            Self::Desktop => matches!(class, BiometryClass::Fingerprint),
            Self::Handheld | Self::Headset => class.is_sensor(),
        }
    }

    /// String representation for logs and serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Handheld => "handheld",
            Self::Headset => "headset",
        }
    }
}

impl Default for HostKind {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_accepts_only_fingerprint() {
        let host = HostKind::Desktop;
        assert!(host.accepts(BiometryClass::Fingerprint));
        assert!(!host.accepts(BiometryClass::Face));
        assert!(!host.accepts(BiometryClass::Iris));
        assert!(!host.accepts(BiometryClass::None));
    }

    #[test]
    fn handheld_and_headset_accept_all_sensors() {
        for host in [HostKind::Handheld, HostKind::Headset] {
            assert!(host.accepts(BiometryClass::Fingerprint));
            assert!(host.accepts(BiometryClass::Face));
            assert!(host.accepts(BiometryClass::Iris));
            assert!(!host.accepts(BiometryClass::None));
            assert!(!host.accepts(BiometryClass::Unrecognized(9)));
        }
    }

    #[test]
    fn default_is_current() {
        assert_eq!(HostKind::default(), HostKind::current());
    }

    #[test]
    fn as_str() {
        assert_eq!(HostKind::Desktop.as_str(), "desktop");
        assert_eq!(HostKind::Handheld.as_str(), "handheld");
        assert_eq!(HostKind::Headset.to_string(), "headset");
    }
}

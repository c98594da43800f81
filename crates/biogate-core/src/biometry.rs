//! Biometry classes reported by the platform authentication service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display string for hardware without a usable biometric sensor.
pub const NO_BIOMETRY_NAME: &str = "The device does not support biometry";

/// Display string for a class this crate does not recognize.
pub const UNKNOWN_BIOMETRY_NAME: &str = "Unknown";

/// Class of biometric sensor the current hardware exposes.
///
/// Recomputed on every query and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BiometryClass {
    /// No sensor present or usable.
    None,
    /// Touch ID.
    Fingerprint,
    /// Face ID.
    Face,
    /// Optic ID.
    Iris,
    /// A raw `LABiometryType` value newer than this crate.
    Unrecognized(i64),
}

impl BiometryClass {
    /// Map a raw `LABiometryType` value.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::Fingerprint,
            2 => Self::Face,
            4 => Self::Iris,
            other => Self::Unrecognized(other),
        }
    }

    /// Human-readable name ("Touch ID", "Face ID", ...).
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fingerprint => "Touch ID",
            Self::Face => "Face ID",
            Self::Iris => "Optic ID",
            Self::None => NO_BIOMETRY_NAME,
            Self::Unrecognized(_) => UNKNOWN_BIOMETRY_NAME,
        }
    }

    /// Whether this is one of the known sensor classes.
    #[must_use]
    pub const fn is_sensor(&self) -> bool {
        matches!(self, Self::Fingerprint | Self::Face | Self::Iris)
    }
}

impl fmt::Display for BiometryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

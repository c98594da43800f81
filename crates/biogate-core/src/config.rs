//! Gate configuration — embeddable in a host application's own settings.
//!
//! This crate never reads files; the host app deserializes `GateConfig`
//! from wherever it keeps preferences and hands it to the gate.

use serde::{Deserialize, Serialize};

use crate::host::HostKind;

/// Configuration applied to a biometric gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateConfig {
    /// Host kind whose availability policy applies. Defaults to the compile target.
    #[serde(default)]
    pub host: HostKind,
}

impl GateConfig {
    #[must_use]
    pub const fn for_host(host: HostKind) -> Self {
        Self { host }
    }
}

//! Context for hosts without a platform authentication service.

use biogate_core::{BiometricError, BiometryClass};

use crate::context::{AuthContext, Reply};

const UNSUPPORTED: &str = "biometric authentication is not supported on this platform";

/// Always reports missing hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedContext;

impl AuthContext for UnsupportedContext {
    fn can_evaluate(&self) -> Result<(), BiometricError> {
        Err(BiometricError::HardwareUnavailable(UNSUPPORTED.into()))
    }

    fn biometry_class(&self) -> BiometryClass {
        BiometryClass::None
    }

    fn evaluate(self: Box<Self>, _reason: &str, reply: Reply) {
        reply.send(Err(BiometricError::HardwareUnavailable(UNSUPPORTED.into())));
    }
}

//! `LAContext` bindings via `objc2` message sends.
//!
//! The framework is linked below so the `LAContext` class is registered
//! at load time; classes are still looked up by name, and a missing class
//! (stripped OS images, some VMs) degrades to "unsupported".

use std::ptr;
use std::sync::Mutex;

use biogate_core::{BiometricError, BiometryClass};
use block2::RcBlock;
use objc2::msg_send;
use objc2::rc::Retained;
use objc2::runtime::{AnyClass, AnyObject, Bool};
use objc2_foundation::{NSError, NSString};

use crate::context::{AuthContext, Reply};

// No symbols are imported; linking registers the framework's classes.
#[link(name = "LocalAuthentication", kind = "framework")]
extern "C" {}

/// `LAPolicyDeviceOwnerAuthenticationWithBiometrics`
const POLICY_BIOMETRICS: isize = 1;

/// One `LAContext` instance.
pub struct LaContext {
    inner: Retained<AnyObject>,
}

impl LaContext {
    /// Allocate a new `LAContext`, or `None` if the class is not loaded.
    #[must_use]
    pub fn new() -> Option<Self> {
        let cls = AnyClass::get(c"LAContext")?;
        // SAFETY: `+[LAContext new]` returns a retained instance or nil.
        let inner: Option<Retained<AnyObject>> = unsafe { msg_send![cls, new] };
        inner.map(|inner| Self { inner })
    }
}

impl AuthContext for LaContext {
    fn can_evaluate(&self) -> Result<(), BiometricError> {
        let mut error: *mut NSError = ptr::null_mut();
        // SAFETY: `canEvaluatePolicy:error:` takes an NSInteger and an
        // NSError** out-parameter that is nil or autoreleased on return.
        let can_evaluate: bool = unsafe {
            msg_send![&*self.inner, canEvaluatePolicy: POLICY_BIOMETRICS, error: &mut error]
        };
        if can_evaluate {
            Ok(())
        } else {
            Err(error_from_ptr(error))
        }
    }

    fn biometry_class(&self) -> BiometryClass {
        // SAFETY: `biometryType` is a readonly NSInteger-backed property.
        let raw: isize = unsafe { msg_send![&*self.inner, biometryType] };
        BiometryClass::from_raw(i64::try_from(raw).unwrap_or(i64::MIN))
    }

    fn evaluate(self: Box<Self>, reason: &str, reply: Reply) {
        let reply = Mutex::new(Some(reply));
        // The block holds a reference so the context outlives the challenge.
        let context = self.inner.clone();
        let block = RcBlock::new(move |success: Bool, error: *mut NSError| {
            let _context = &context;
            let result = if success.as_bool() {
                Ok(())
            } else {
                Err(error_from_ptr(error))
            };
            let pending = reply.lock().ok().and_then(|mut slot| slot.take());
            if let Some(reply) = pending {
                reply.send(result);
            }
        });

        let reason = NSString::from_str(reason);
        // SAFETY: `evaluatePolicy:localizedReason:reply:` copies the block
        // and invokes it once on a private queue.
        unsafe {
            let _: () = msg_send![
                &*self.inner,
                evaluatePolicy: POLICY_BIOMETRICS,
                localizedReason: &*reason,
                reply: &*block
            ];
        }
    }
}

/// Map a possibly-nil `NSError*` to a [`BiometricError`].
fn error_from_ptr(error: *mut NSError) -> BiometricError {
    // SAFETY: the pointer is nil or a valid NSError owned by the caller.
    let error = unsafe { Retained::retain(error) };
    error.map_or(BiometricError::Unknown, |e| {
        let code = i64::try_from(e.code()).unwrap_or(i64::MIN);
        BiometricError::from_platform(code, e.localizedDescription().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_error_is_unknown() {
        assert_eq!(error_from_ptr(ptr::null_mut()), BiometricError::Unknown);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn la_context_class_is_linked() {
        assert!(AnyClass::get(c"LAContext").is_some());
        assert!(LaContext::new().is_some());
    }

    #[test]
    fn context_queries_do_not_panic() {
        // Hardware-dependent; only check that the FFI round trip works.
        if let Some(ctx) = LaContext::new() {
            let _ = ctx.can_evaluate();
            let _ = ctx.biometry_class();
        }
    }
}

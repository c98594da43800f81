//! Platform seam — one [`AuthContext`] per gate operation.
//!
//! An `AuthContext` is a single handle to the platform authentication
//! service (an `LAContext` on Apple platforms). The gate never reuses a
//! context: a [`ContextFactory`] builds a fresh one for every call so a
//! stale evaluability result can never outlive an enrollment change.

use biogate_core::{AuthenticationOutcome, BiometricError, BiometryClass};

type Handler = Box<dyn FnOnce(AuthenticationOutcome) + Send + 'static>;

/// Single-shot completion handler for [`AuthContext::evaluate`].
///
/// The platform may send from any thread. A reply dropped without being
/// sent delivers [`BiometricError::Unknown`], so the handler always runs
/// exactly once.
pub struct Reply {
    handler: Option<Handler>,
}

impl Reply {
    #[must_use]
    pub fn new<H>(handler: H) -> Self
    where
        H: FnOnce(AuthenticationOutcome) + Send + 'static,
    {
        Self {
            handler: Some(Box::new(handler)),
        }
    }

    /// Deliver the platform result.
    pub fn send(mut self, result: Result<(), BiometricError>) {
        if let Some(handler) = self.handler.take() {
            handler(result.into());
        }
    }
}

impl Drop for Reply {
    fn drop(&mut self) {
        if let Some(handler) = self.handler.take() {
            tracing::warn!("Platform dropped authentication reply without answering");
            handler(AuthenticationOutcome::Failure(BiometricError::Unknown));
        }
    }
}

/// One handle to the platform authentication service.
pub trait AuthContext {
    /// Whether biometric-only authentication can be evaluated right now
    /// (hardware present, enrolled, not locked out).
    ///
    /// # Errors
    ///
    /// Returns the platform diagnostic, or [`BiometricError::Unknown`]
    /// when the platform supplied none.
    fn can_evaluate(&self) -> Result<(), BiometricError>;

    /// Biometry class the hardware exposes.
    ///
    /// Only meaningful after [`AuthContext::can_evaluate`] has run on this context.
    fn biometry_class(&self) -> BiometryClass;

    /// Start the biometric challenge with a user-facing prompt.
    ///
    /// Should send `reply` once; dropping it reports [`BiometricError::Unknown`]. Consumes the context: the platform
    /// keeps it alive until the challenge completes.
    fn evaluate(self: Box<Self>, reason: &str, reply: Reply);
}

/// Builds a fresh [`AuthContext`] per gate operation.
pub trait ContextFactory: Send + Sync {
    fn create(&self) -> Box<dyn AuthContext>;
}

impl<F> ContextFactory for F
where
    F: Fn() -> Box<dyn AuthContext> + Send + Sync,
{
    fn create(&self) -> Box<dyn AuthContext> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc};

    struct Fixed(BiometryClass);

    impl AuthContext for Fixed {
        fn can_evaluate(&self) -> Result<(), BiometricError> {
            Ok(())
        }
        fn biometry_class(&self) -> BiometryClass {
            self.0
        }
        fn evaluate(self: Box<Self>, _reason: &str, reply: Reply) {
            reply.send(Ok(()));
        }
    }

    #[test]
    fn closures_are_factories() {
        let created = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&created);
        let factory = move || -> Box<dyn AuthContext> {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::new(Fixed(BiometryClass::Face))
        };

        assert_eq!(factory.create().biometry_class(), BiometryClass::Face);
        assert_eq!(factory.create().biometry_class(), BiometryClass::Face);
        assert_eq!(created.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn sent_reply_delivers_once() {
        let (tx, rx) = mpsc::channel();
        let reply = Reply::new(move |outcome| tx.send(outcome).unwrap());
        reply.send(Err(BiometricError::UserCanceled("Canceled.".into())));

        assert_eq!(
            rx.recv().unwrap(),
            AuthenticationOutcome::Failure(BiometricError::UserCanceled("Canceled.".into()))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_reply_reports_unknown() {
        let (tx, rx) = mpsc::channel();
        drop(Reply::new(move |outcome| tx.send(outcome).unwrap()));

        assert_eq!(
            rx.recv().unwrap(),
            AuthenticationOutcome::Failure(BiometricError::Unknown)
        );
        assert!(rx.try_recv().is_err());
    }
}

//! `BiometricGate` — stateless facade over the platform authentication service.
//!
//! Every operation builds a fresh [`AuthContext`] from the gate's
//! [`ContextFactory`]; nothing is cached between calls. Asynchronous
//! results are marshaled onto the gate's [`UiDispatcher`].

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use biogate_core::{AuthenticationOutcome, BiometricError, BiometryClass, GateConfig};
use tokio::sync::oneshot;

use crate::context::{AuthContext, ContextFactory, Reply};
use crate::dispatch::{DefaultDispatcher, UiDispatcher};
use crate::platform::SystemContextFactory;
use crate::report::CapabilityReport;

/// Facade over the platform biometric authentication service.
pub struct BiometricGate<F = SystemContextFactory, D = DefaultDispatcher> {
    factory: F,
    dispatcher: Arc<D>,
    config: GateConfig,
}

impl BiometricGate {
    /// Gate over the system service, dispatching onto the platform UI context.
    #[must_use]
    pub fn system() -> Self {
        Self::default()
    }
}

impl Default for BiometricGate {
    fn default() -> Self {
        Self::new(SystemContextFactory, DefaultDispatcher::default())
    }
}

impl<F, D> BiometricGate<F, D>
where
    F: ContextFactory,
    D: UiDispatcher + 'static,
{
    /// Gate with the compile target's default [`GateConfig`].
    #[must_use]
    pub fn new(factory: F, dispatcher: D) -> Self {
        Self {
            factory,
            dispatcher: Arc::new(dispatcher),
            config: GateConfig::default(),
        }
    }

    /// Replace the gate configuration.
    #[must_use]
    pub const fn with_config(mut self, config: GateConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> GateConfig {
        self.config
    }

    /// Run a biometric challenge and report the outcome through exactly one callback.
    ///
    /// If biometrics cannot be evaluated, `on_failure` runs synchronously on
    /// the calling thread with the platform diagnostic. Otherwise the
    /// challenge runs asynchronously and the callback is posted to the
    /// dispatcher once the platform replies.
    pub fn authenticate<S, E>(&self, reason: &str, on_success: S, on_failure: E)
    where
        S: FnOnce() + Send + 'static,
        E: FnOnce(BiometricError) + Send + 'static,
    {
        let context = match self.prepare() {
            Ok(context) => context,
            Err(error) => {
                on_failure(error);
                return;
            }
        };

        let dispatcher = Arc::clone(&self.dispatcher);
        context.evaluate(
            reason,
            Reply::new(move |outcome| {
                dispatcher.dispatch(Box::new(move || match outcome {
                    AuthenticationOutcome::Success => {
                        tracing::info!("Biometric authentication succeeded");
                        on_success();
                    }
                    AuthenticationOutcome::Failure(error) => {
                        tracing::warn!(%error, "Biometric authentication failed");
                        on_failure(error);
                    }
                }));
            }),
        );
    }

    /// Awaitable variant of [`BiometricGate::authenticate`].
    ///
    /// The result is not posted through the dispatcher; it resolves on
    /// whichever task awaits it.
    ///
    /// # Errors
    ///
    /// Returns the platform diagnostic when biometrics cannot be evaluated
    /// or the challenge fails, and [`BiometricError::Unknown`] if the
    /// platform drops the request without replying.
    pub async fn authenticate_async(&self, reason: &str) -> Result<(), BiometricError> {
        let receiver = self.start(reason)?;
        let result = receiver
            .await
            .map_or(Err(BiometricError::Unknown), Result::from);
        match &result {
            Ok(()) => tracing::info!("Biometric authentication succeeded"),
            Err(error) => tracing::warn!(%error, "Biometric authentication failed"),
        }
        result
    }

    /// Whether biometric authentication can be evaluated and the detected
    /// class is one the configured host accepts. Never prompts.
    #[must_use]
    pub fn is_available(&self) -> bool {
        let context = self.factory.create();
        let evaluable = context.can_evaluate().is_ok();
        let biometry = context.biometry_class();
        let available = evaluable && self.config.host.accepts(biometry);
        tracing::debug!(
            host = %self.config.host,
            %biometry,
            evaluable,
            available,
            "Biometric availability checked"
        );
        available
    }

    /// Biometry class the hardware exposes, including [`BiometryClass::None`].
    #[must_use]
    pub fn supported_type(&self) -> BiometryClass {
        let context = self.factory.create();
        // The class is only populated after an evaluability check; its error is not surfaced.
        let _ = context.can_evaluate();
        context.biometry_class()
    }

    /// Display name of [`BiometricGate::supported_type`].
    #[must_use]
    pub fn supported_type_name(&self) -> &'static str {
        self.supported_type().display_name()
    }

    /// Availability and detected class from a single context.
    ///
    /// A panic in the platform probe is reported as unavailable.
    #[must_use]
    pub fn capability(&self) -> CapabilityReport {
        let host = self.config.host;
        let probe = panic::catch_unwind(AssertUnwindSafe(|| {
            let context = self.factory.create();
            let evaluable = context.can_evaluate().is_ok();
            let biometry = context.biometry_class();
            (evaluable && host.accepts(biometry), biometry)
        }));

        match probe {
            Ok((available, biometry)) => CapabilityReport {
                available,
                biometry,
                display_name: biometry.display_name().to_string(),
                host,
            },
            Err(_) => {
                tracing::warn!("Biometric capability probe panicked, treating as unavailable");
                CapabilityReport::unavailable(host)
            }
        }
    }

    /// Fresh context that passed the evaluability check.
    fn prepare(&self) -> Result<Box<dyn AuthContext>, BiometricError> {
        tracing::info!("Attempting biometric authentication");
        let context = self.factory.create();
        if let Err(error) = context.can_evaluate() {
            tracing::warn!(%error, "Biometric authentication not available");
            return Err(error);
        }
        tracing::info!(
            biometry = %context.biometry_class(),
            "Biometry available, starting evaluation"
        );
        Ok(context)
    }

    fn start(
        &self,
        reason: &str,
    ) -> Result<oneshot::Receiver<AuthenticationOutcome>, BiometricError> {
        let context = self.prepare()?;
        let (sender, receiver) = oneshot::channel();
        context.evaluate(
            reason,
            Reply::new(move |outcome| {
                // The awaiting side may have been dropped; nobody is left to tell.
                let _ = sender.send(outcome);
            }),
        );
        Ok(receiver)
    }
}

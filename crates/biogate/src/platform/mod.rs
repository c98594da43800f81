//! Platform authentication services — `LAContext` on Apple, unsupported elsewhere.

#[cfg(target_vendor = "apple")]
pub mod apple;
pub mod unsupported;

use crate::context::{AuthContext, ContextFactory};

pub use unsupported::UnsupportedContext;

/// Builds a fresh context for the current platform on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemContextFactory;

impl ContextFactory for SystemContextFactory {
    fn create(&self) -> Box<dyn AuthContext> {
        create_context()
    }
}

/// Create a fresh platform context.
#[must_use]
pub fn create_context() -> Box<dyn AuthContext> {
    #[cfg(target_vendor = "apple")]
    {
        apple::LaContext::new().map_or_else(
            || {
                tracing::warn!("LAContext unavailable, treating biometry as unsupported");
                Box::new(UnsupportedContext) as Box<dyn AuthContext>
            },
            |ctx| Box::new(ctx) as Box<dyn AuthContext>,
        )
    }

    #[cfg(not(target_vendor = "apple"))]
    {
        Box::new(UnsupportedContext)
    }
}

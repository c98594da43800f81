//! UI-safe execution contexts for delivering authentication callbacks.
//!
//! Platform replies arrive on an arbitrary thread. The gate hands each
//! callback to a [`UiDispatcher`] so it runs where UI state may be touched,
//! and never inline on the thread that called `authenticate`.

use std::io;
use std::sync::{Arc, Mutex};

use tokio::runtime::Handle;

/// A unit of work posted to the UI context.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Posts jobs onto a UI-safe execution context.
pub trait UiDispatcher: Send + Sync {
    /// Run `job` later on the dispatcher's context, exactly once. Must not
    /// run it inline unless the context itself is unavailable.
    fn dispatch(&self, job: Job);
}

// ---------------------------------------------------------------------------
// Main queue (Apple)
// ---------------------------------------------------------------------------

/// The Grand Central Dispatch main queue.
#[cfg(target_vendor = "apple")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MainQueue;

#[cfg(target_vendor = "apple")]
impl UiDispatcher for MainQueue {
    fn dispatch(&self, job: Job) {
        dispatch2::DispatchQueue::main().exec_async(job);
    }
}

// ---------------------------------------------------------------------------
// Dedicated thread
// ---------------------------------------------------------------------------

/// Runs each job on a freshly spawned thread.
///
/// Default for hosts without a platform UI loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDispatcher;

impl UiDispatcher for ThreadDispatcher {
    fn dispatch(&self, job: Job) {
        spawn_or_run_inline(job, |work| {
            std::thread::Builder::new()
                .name("biogate-callback".into())
                .spawn(work)
                .map(drop)
        });
    }
}

/// Hand `job` to `spawn`; if spawning fails, run it on the calling thread
/// so the callback still fires exactly once.
fn spawn_or_run_inline<S>(job: Job, spawn: S)
where
    S: FnOnce(Job) -> io::Result<()>,
{
    let slot = Arc::new(Mutex::new(Some(job)));
    let pending = Arc::clone(&slot);
    let spawned = spawn(Box::new(move || {
        if let Some(job) = take_job(&pending) {
            job();
        }
    }));

    if let Err(e) = spawned {
        tracing::error!(error = %e, "Failed to spawn callback thread, running callback inline");
        if let Some(job) = take_job(&slot) {
            job();
        }
    }
}

fn take_job(slot: &Mutex<Option<Job>>) -> Option<Job> {
    slot.lock().ok().and_then(|mut guard| guard.take())
}

// ---------------------------------------------------------------------------
// Tokio runtime
// ---------------------------------------------------------------------------

/// Spawns each job onto a tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeDispatcher {
    handle: Handle,
}

impl RuntimeDispatcher {
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Dispatcher bound to the runtime the caller is running on.
    ///
    /// Returns `None` outside a tokio runtime.
    #[must_use]
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl UiDispatcher for RuntimeDispatcher {
    fn dispatch(&self, job: Job) {
        self.handle.spawn(async move { job() });
    }
}

/// Default dispatcher for the current compile target.
#[cfg(target_vendor = "apple")]
pub type DefaultDispatcher = MainQueue;

/// Default dispatcher for the current compile target.
#[cfg(not(target_vendor = "apple"))]
pub type DefaultDispatcher = ThreadDispatcher;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn thread_dispatcher_runs_job_off_thread() {
        let caller = std::thread::current().id();
        let (tx, rx) = mpsc::channel();
        ThreadDispatcher.dispatch(Box::new(move || {
            tx.send(std::thread::current().id()).unwrap();
        }));
        let ran_on = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_ne!(ran_on, caller);
    }

    #[test]
    fn failed_spawn_still_runs_job() {
        let (tx, rx) = mpsc::channel();
        spawn_or_run_inline(
            Box::new(move || tx.send("ran").unwrap()),
            |_work| Err(io::Error::other("thread limit reached")),
        );
        assert_eq!(rx.try_recv().unwrap(), "ran");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn spawned_job_runs_once() {
        let (tx, rx) = mpsc::channel();
        spawn_or_run_inline(Box::new(move || tx.send(1).unwrap()), |work| {
            work();
            Ok(())
        });
        assert_eq!(rx.try_recv().unwrap(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn runtime_dispatcher_outside_runtime_is_none() {
        assert!(RuntimeDispatcher::current().is_none());
    }

    #[tokio::test]
    async fn runtime_dispatcher_runs_job() {
        let dispatcher = RuntimeDispatcher::current().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel();
        dispatcher.dispatch(Box::new(move || {
            let _ = tx.send(42);
        }));
        assert_eq!(rx.await.unwrap(), 42);
    }
}

//! # Deferred Values
//!
//! A `Deferred<T, E>` is a handle to a result that is not available yet. It is what a
//! route loader hands back *synchronously* while the actual work (usually a catalog
//! request) keeps running on its own task.
//!
//! The consumer decides how to wait:
//!
//! | Style | API |
//! |-------|-----|
//! | Block (await) | `deferred.await` |
//! | Poll without blocking | [`Deferred::try_result`] / [`Deferred::is_settled`] |
//! | Continuation | [`Deferred::on_settle`] |
//!
//! A handle settles exactly once, to `Ok(T)` or `Err(E)`. After that the result is
//! frozen: repeated `try_result` calls return the same value.
//!
//! # Cancellation
//! Every handle carries its own `CancellationToken`. Cancelling a pending handle stops
//! the spawned task from waiting on its future, and the handle settles with
//! `FrameworkError::Cancelled` (converted into `E`). Cancelling an already settled
//! handle has no effect.

use crate::error::FrameworkError;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, Instrument};

enum State<T, E> {
    Pending(oneshot::Receiver<Result<T, E>>),
    Settled(Result<T, E>),
    Taken,
}

/// Handle to an eventually-settling result.
///
/// # Example
///
/// ```rust
/// use cyprus_framework::{Deferred, FrameworkError};
///
/// #[tokio::main]
/// async fn main() {
///     let mut answer: Deferred<u32, FrameworkError> = Deferred::spawn(async { Ok(42) });
///     // The handle exists before the work has settled.
///     let _maybe = answer.try_result();
///     assert_eq!(answer.await, Ok(42));
/// }
/// ```
#[must_use = "a Deferred does nothing useful unless it is awaited, polled or cancelled"]
pub struct Deferred<T, E> {
    state: State<T, E>,
    token: CancellationToken,
}

// The state is never structurally pinned: the receiver is `Unpin` and the settled
// result is only ever moved out by value.
impl<T, E> Unpin for Deferred<T, E> {}

impl<T, E> Deferred<T, E>
where
    T: Send + 'static,
    E: From<FrameworkError> + Send + 'static,
{
    /// Starts `future` on the current Tokio runtime and returns its handle immediately.
    ///
    /// The future runs inside the caller's tracing span.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime, like `tokio::spawn`.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (settle, receiver) = oneshot::channel();
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(
            async move {
                let result = tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => {
                        debug!("Deferred cancelled before settling");
                        Err(E::from(FrameworkError::Cancelled))
                    }
                    result = future => result,
                };
                // Nobody is listening any more if the handle was dropped.
                let _ = settle.send(result);
            }
            .in_current_span(),
        );

        Self {
            state: State::Pending(receiver),
            token,
        }
    }

    /// Wraps a result that is already available.
    pub fn ready(result: Result<T, E>) -> Self {
        Self {
            state: State::Settled(result),
            token: CancellationToken::new(),
        }
    }

    /// Returns the settled result without blocking, or `None` while still pending.
    ///
    /// Once this returns `Some`, the result is cached and every later call returns the
    /// same value.
    pub fn try_result(&mut self) -> Option<&Result<T, E>> {
        if let State::Pending(receiver) = &mut self.state {
            let result = match receiver.try_recv() {
                Ok(result) => result,
                Err(oneshot::error::TryRecvError::Empty) => return None,
                Err(oneshot::error::TryRecvError::Closed) => {
                    Err(E::from(FrameworkError::Abandoned))
                }
            };
            self.state = State::Settled(result);
        }

        match &self.state {
            State::Settled(result) => Some(result),
            State::Pending(_) | State::Taken => None,
        }
    }

    /// Whether the handle has settled. Never blocks.
    pub fn is_settled(&mut self) -> bool {
        self.try_result().is_some()
    }

    /// Requests cancellation of the pending work.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// A clone of this handle's cancellation token, e.g. to tie it to a navigation.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Registers a continuation that runs once with the settled result.
    ///
    /// The continuation runs on its own task; the returned handle can be awaited to know
    /// when it has finished.
    pub fn on_settle<F>(self, continuation: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<T, E>) + Send + 'static,
    {
        tokio::spawn(
            async move {
                let result = self.await;
                continuation(result);
            }
            .in_current_span(),
        )
    }
}

impl<T, E> Future for Deferred<T, E>
where
    E: From<FrameworkError>,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match std::mem::replace(&mut this.state, State::Taken) {
            State::Settled(result) => Poll::Ready(result),
            State::Pending(mut receiver) => match Pin::new(&mut receiver).poll(cx) {
                Poll::Ready(Ok(result)) => Poll::Ready(result),
                Poll::Ready(Err(_)) => Poll::Ready(Err(E::from(FrameworkError::Abandoned))),
                Poll::Pending => {
                    this.state = State::Pending(receiver);
                    Poll::Pending
                }
            },
            State::Taken => panic!("Deferred polled after completion"),
        }
    }
}

impl<T, E> std::fmt::Debug for Deferred<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Pending(_) => "Pending",
            State::Settled(Ok(_)) => "Resolved",
            State::Settled(Err(_)) => "Rejected",
            State::Taken => "Taken",
        };
        f.debug_struct("Deferred").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_spawn_returns_before_settling() {
        let (release, wait) = oneshot::channel::<()>();
        let mut deferred: Deferred<u32, FrameworkError> = Deferred::spawn(async move {
            let _ = wait.await;
            Ok(7)
        });

        // Nothing can settle until we release the future.
        assert!(!deferred.is_settled());
        release.send(()).unwrap();

        assert_eq!(deferred.await, Ok(7));
    }

    #[tokio::test]
    async fn test_settled_result_is_frozen() {
        let mut deferred: Deferred<&'static str, FrameworkError> =
            Deferred::spawn(async { Ok("first") });

        while !deferred.is_settled() {
            tokio::task::yield_now().await;
        }

        assert_eq!(deferred.try_result(), Some(&Ok("first")));
        assert_eq!(deferred.try_result(), Some(&Ok("first")));
        assert_eq!(deferred.await, Ok("first"));
    }

    #[tokio::test]
    async fn test_ready_is_settled_immediately() {
        let mut deferred: Deferred<u8, FrameworkError> =
            Deferred::ready(Err(FrameworkError::ActorClosed));
        assert_eq!(deferred.try_result(), Some(&Err(FrameworkError::ActorClosed)));
        assert_eq!(deferred.await, Err(FrameworkError::ActorClosed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_settles_with_cancelled() {
        let deferred: Deferred<u32, FrameworkError> = Deferred::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(1)
        });

        deferred.cancel();
        assert_eq!(deferred.await, Err(FrameworkError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_after_settle_keeps_result() {
        let mut deferred: Deferred<u32, FrameworkError> = Deferred::ready(Ok(3));
        deferred.cancel();
        assert_eq!(deferred.try_result(), Some(&Ok(3)));
    }

    #[tokio::test]
    async fn test_on_settle_runs_continuation_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();

        let deferred: Deferred<u32, FrameworkError> = Deferred::spawn(async { Ok(5) });
        let handle = deferred.on_settle(move |result| {
            assert_eq!(result, Ok(5));
            seen.fetch_add(1, Ordering::SeqCst);
        });

        handle.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_panicking_task_is_abandoned() {
        let deferred: Deferred<u32, FrameworkError> = Deferred::spawn(async {
            if true {
                panic!("boom");
            }
            Ok(0)
        });

        assert_eq!(deferred.await, Err(FrameworkError::Abandoned));
    }
}

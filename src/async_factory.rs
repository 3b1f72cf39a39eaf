//! Asynchronous assertion factories.
//!
//! The condition is evaluated and the producer is invoked when `check` is
//! called. Only the producer's future is awaited, so a passing check is
//! ready on its first poll and a failing one suspends exactly while the
//! producer's future is pending. Dropping the returned future drops the
//! producer's future with it.

use crate::truthy::Truthy;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Future returned by [`AsyncInvariant::check`].
#[must_use = "futures do nothing unless polled"]
pub struct Checked<Fut> {
    pending: Option<Pin<Box<Fut>>>,
}

impl<Fut> Checked<Fut> {
    fn passed() -> Self {
        Self { pending: None }
    }

    fn failed(fut: Fut) -> Self {
        Self {
            pending: Some(Box::pin(fut)),
        }
    }

    /// Whether the condition held when the check was made.
    pub fn is_passed(&self) -> bool {
        self.pending.is_none()
    }
}

impl<Fut: Future> Future for Checked<Fut> {
    type Output = Result<(), Fut::Output>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.pending.as_mut() {
            None => Poll::Ready(Ok(())),
            Some(fut) => fut.as_mut().poll(cx).map(Err),
        }
    }
}

impl<Fut> fmt::Debug for Checked<Fut> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checked")
            .field("passed", &self.is_passed())
            .finish()
    }
}

/// Future returned by [`TryAsyncInvariant::check`].
#[must_use = "futures do nothing unless polled"]
pub struct TryChecked<Fut> {
    inner: Checked<Fut>,
}

impl<Fut> TryChecked<Fut> {
    pub fn is_passed(&self) -> bool {
        self.inner.is_passed()
    }
}

impl<Fut, E> Future for TryChecked<Fut>
where
    Fut: Future<Output = Result<E, E>>,
{
    type Output = Result<(), E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner)
            .poll(cx)
            .map(|outcome| outcome.map_err(|produced| produced.unwrap_or_else(|failure| failure)))
    }
}

impl<Fut> fmt::Debug for TryChecked<Fut> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryChecked")
            .field("passed", &self.is_passed())
            .finish()
    }
}

/// Asynchronous assertion function; the producer resolves to the exception.
pub struct AsyncInvariant<P, D> {
    producer: P,
    _data: PhantomData<fn(D)>,
}

impl<P, D, Fut> AsyncInvariant<P, D>
where
    P: Fn(D) -> Fut,
    Fut: Future,
{
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            _data: PhantomData,
        }
    }

    /// Resolve to `Ok(())` if `condition` is truthy, otherwise to the
    /// exception the producer's future resolves to.
    pub fn check<C: Truthy>(&self, condition: C, data: D) -> Checked<Fut> {
        if condition.is_truthy() {
            return Checked::passed();
        }
        tracing::trace!(target: "invariant", "async invariant violated");
        Checked::failed((self.producer)(data))
    }
}

impl<P: Clone, D> Clone for AsyncInvariant<P, D> {
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
            _data: PhantomData,
        }
    }
}

impl<P: Copy, D> Copy for AsyncInvariant<P, D> {}

impl<P, D> fmt::Debug for AsyncInvariant<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncInvariant").finish_non_exhaustive()
    }
}

/// Asynchronous assertion function whose producer may itself fail.
///
/// The producer resolves to `Ok(exception)` or `Err(failure)`; either value
/// becomes the outward error unchanged.
pub struct TryAsyncInvariant<P, D> {
    inner: AsyncInvariant<P, D>,
}

impl<P, D, Fut, E> TryAsyncInvariant<P, D>
where
    P: Fn(D) -> Fut,
    Fut: Future<Output = Result<E, E>>,
{
    pub fn new(producer: P) -> Self {
        Self {
            inner: AsyncInvariant::new(producer),
        }
    }

    pub fn check<C: Truthy>(&self, condition: C, data: D) -> TryChecked<Fut> {
        TryChecked {
            inner: self.inner.check(condition, data),
        }
    }
}

impl<P: Clone, D> Clone for TryAsyncInvariant<P, D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P, D> fmt::Debug for TryAsyncInvariant<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryAsyncInvariant").finish_non_exhaustive()
    }
}

/// Build an asynchronous assertion function around `producer`.
pub fn async_invariant_factory<P, D, Fut>(producer: P) -> AsyncInvariant<P, D>
where
    P: Fn(D) -> Fut,
    Fut: Future,
{
    AsyncInvariant::new(producer)
}

/// Build an asynchronous assertion function around a fallible `producer`.
pub fn try_async_invariant_factory<P, D, Fut, E>(producer: P) -> TryAsyncInvariant<P, D>
where
    P: Fn(D) -> Fut,
    Fut: Future<Output = Result<E, E>>,
{
    TryAsyncInvariant::new(producer)
}

//! Synchronous assertion factories.

use crate::truthy::Truthy;
use std::fmt;
use std::marker::PhantomData;

/// Assertion function whose producer takes exception data of type `D`.
///
/// Built by [`invariant_factory`]. Holds nothing but the producer, so it can
/// be copied, shared across threads and called any number of times.
pub struct Invariant<P, D> {
    producer: P,
    _data: PhantomData<fn(D)>,
}

impl<P, D, E> Invariant<P, D>
where
    P: Fn(D) -> E,
{
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            _data: PhantomData,
        }
    }

    /// Return `Ok(())` if `condition` is truthy, otherwise the producer's
    /// exception for `data`. The producer runs only on failure.
    pub fn check<C: Truthy>(&self, condition: C, data: D) -> Result<(), E> {
        if condition.is_truthy() {
            return Ok(());
        }
        tracing::trace!(target: "invariant", "invariant violated");
        Err((self.producer)(data))
    }

    /// Unwrap `value` when it holds a truthy value, otherwise fail like
    /// [`check`](Self::check).
    pub fn narrow<T: Truthy>(&self, value: Option<T>, data: D) -> Result<T, E> {
        match value {
            Some(inner) if inner.is_truthy() => Ok(inner),
            _ => {
                tracing::trace!(target: "invariant", "invariant violated while narrowing");
                Err((self.producer)(data))
            }
        }
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }
}

impl<P: Clone, D> Clone for Invariant<P, D> {
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
            _data: PhantomData,
        }
    }
}

impl<P: Copy, D> Copy for Invariant<P, D> {}

impl<P, D> fmt::Debug for Invariant<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invariant").finish_non_exhaustive()
    }
}

/// Assertion function whose producer takes no exception data.
///
/// Built by [`bare_invariant_factory`].
#[derive(Clone, Copy)]
pub struct BareInvariant<P> {
    producer: P,
}

impl<P, E> BareInvariant<P>
where
    P: Fn() -> E,
{
    pub fn new(producer: P) -> Self {
        Self { producer }
    }

    pub fn check<C: Truthy>(&self, condition: C) -> Result<(), E> {
        if condition.is_truthy() {
            return Ok(());
        }
        tracing::trace!(target: "invariant", "invariant violated");
        Err((self.producer)())
    }

    pub fn narrow<T: Truthy>(&self, value: Option<T>) -> Result<T, E> {
        match value {
            Some(inner) if inner.is_truthy() => Ok(inner),
            _ => {
                tracing::trace!(target: "invariant", "invariant violated while narrowing");
                Err((self.producer)())
            }
        }
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }
}

impl<P> fmt::Debug for BareInvariant<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BareInvariant").finish_non_exhaustive()
    }
}

/// Build an assertion function that raises `producer(data)` on failure.
///
/// ```
/// use invariant::invariant_factory;
///
/// #[derive(Debug, PartialEq)]
/// struct Rejected(&'static str);
///
/// let ensure = invariant_factory(Rejected);
/// assert_eq!(ensure.check(1, "unused"), Ok(()));
/// assert_eq!(ensure.check(0, "zero"), Err(Rejected("zero")));
/// ```
pub fn invariant_factory<P, D, E>(producer: P) -> Invariant<P, D>
where
    P: Fn(D) -> E,
{
    Invariant::new(producer)
}

/// Build an assertion function that takes only a condition and raises
/// `producer()` on failure.
pub fn bare_invariant_factory<P, E>(producer: P) -> BareInvariant<P>
where
    P: Fn() -> E,
{
    BareInvariant::new(producer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_producer_skipped_on_success() {
        let calls = Cell::new(0);
        let ensure = invariant_factory(|msg: &str| {
            calls.set(calls.get() + 1);
            msg.to_string()
        });

        assert!(ensure.check(true, "never").is_ok());
        assert!(ensure.check("text", "never").is_ok());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_producer_called_once_per_failure() {
        let calls = Cell::new(0);
        let ensure = bare_invariant_factory(|| {
            calls.set(calls.get() + 1);
            "failed"
        });

        assert_eq!(ensure.check(0), Err("failed"));
        assert_eq!(ensure.check(0), Err("failed"));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_narrow() {
        let ensure = bare_invariant_factory(|| "missing");
        assert_eq!(ensure.narrow(Some("name")), Ok("name"));
        assert_eq!(ensure.narrow(Some("")), Err("missing"));
        assert_eq!(ensure.narrow(None::<&str>), Err("missing"));
    }

    #[test]
    fn test_copy_when_producer_is_copy() {
        fn produce(code: u16) -> u16 {
            code
        }
        let ensure = invariant_factory(produce);
        let copied = ensure;
        assert_eq!(ensure.check(false, 404), Err(404));
        assert_eq!(copied.check(false, 500), Err(500));
    }
}

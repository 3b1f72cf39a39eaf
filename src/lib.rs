//! Invariant - inline assertions with pluggable exception producers
//!
//! An assertion checks a condition and, when it is falsy, returns the
//! exception built by its producer. The producer only runs on failure.

pub mod async_factory;
pub mod data;
pub mod defaults;
pub mod error;
pub mod factory;
pub mod truthy;

pub use async_factory::{
    async_invariant_factory, try_async_invariant_factory, AsyncInvariant, Checked,
    TryAsyncInvariant, TryChecked,
};
pub use data::ExceptionData;
pub use defaults::{default_exception_producer, invariant, narrow};
pub use error::{InvariantError, InvariantResult, DEFAULT_MESSAGE};
pub use factory::{bare_invariant_factory, invariant_factory, BareInvariant, Invariant};
pub use truthy::Truthy;

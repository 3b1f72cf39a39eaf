//! The ready-made assertion function and its producer.

use crate::data::ExceptionData;
use crate::error::{InvariantError, InvariantResult};
use crate::factory::invariant_factory;
use crate::truthy::Truthy;

/// Turn exception data into an [`InvariantError`].
///
/// Absent data yields `"Invariant error"`, text is used verbatim and a lazy
/// closure is called once for its return value.
pub fn default_exception_producer(data: ExceptionData<'_>) -> InvariantError {
    data.into_message()
        .map(InvariantError::from)
        .unwrap_or_default()
}

/// Assert that `condition` is truthy.
///
/// Pass `()` or `None` for the default message, a string for a fixed one,
/// or [`ExceptionData::lazy`] to build the message only on failure.
///
/// ```
/// use invariant::{invariant, ExceptionData};
///
/// let username: Option<&str> = Some("leumasic");
/// assert!(invariant(username, "Username is required").is_ok());
///
/// let err = invariant(0, ()).unwrap_err();
/// assert_eq!(err.to_string(), "Invariant error");
///
/// let err = invariant("", ExceptionData::lazy(|| format!("{} is empty", "name"))).unwrap_err();
/// assert_eq!(err.message(), "name is empty");
/// ```
pub fn invariant<'a, C, M>(condition: C, data: M) -> InvariantResult<()>
where
    C: Truthy,
    M: Into<ExceptionData<'a>>,
{
    invariant_factory(default_exception_producer).check(condition, data.into())
}

/// Unwrap `value` when it holds a truthy value, failing like [`invariant`]
/// otherwise.
pub fn narrow<'a, T, M>(value: Option<T>, data: M) -> InvariantResult<T>
where
    T: Truthy,
    M: Into<ExceptionData<'a>>,
{
    invariant_factory(default_exception_producer).narrow(value, data.into())
}

/// Return early with an [`InvariantError`] when a condition is falsy.
///
/// The error is converted with `Into`, so the enclosing function may return
/// any error type that implements `From<InvariantError>`. Format arguments
/// are only evaluated when the condition fails.
///
/// ```
/// use invariant::{invariant, InvariantResult};
///
/// fn divide(a: i32, b: i32) -> InvariantResult<i32> {
///     invariant!(b, "cannot divide {} by zero", a);
///     Ok(a / b)
/// }
///
/// assert_eq!(divide(6, 3), Ok(2));
/// assert_eq!(divide(6, 0).unwrap_err().message(), "cannot divide 6 by zero");
/// ```
#[macro_export]
macro_rules! invariant {
    ($cond:expr $(,)?) => {
        if let ::core::result::Result::Err(err) = $crate::invariant($cond, ()) {
            return ::core::result::Result::Err(::core::convert::From::from(err));
        }
    };
    ($cond:expr, $msg:literal $(,)?) => {
        if let ::core::result::Result::Err(err) =
            $crate::invariant($cond, $crate::ExceptionData::lazy(|| ::std::format!($msg)))
        {
            return ::core::result::Result::Err(::core::convert::From::from(err));
        }
    };
    ($cond:expr, $fmt:literal, $($arg:tt)+) => {
        if let ::core::result::Result::Err(err) = $crate::invariant(
            $cond,
            $crate::ExceptionData::lazy(|| ::std::format!($fmt, $($arg)+)),
        ) {
            return ::core::result::Result::Err(::core::convert::From::from(err));
        }
    };
}

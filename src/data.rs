//! Exception data accepted by the default producer.

use std::borrow::Cow;
use std::fmt;

/// Caller-supplied context for the default exception.
///
/// Only three shapes are accepted: nothing, a message, or a closure that
/// computes the message. Any other value has no conversion into this type
/// and is rejected at compile time.
pub enum ExceptionData<'a> {
    /// No data; the default message is used.
    Absent,
    /// A message used verbatim.
    Text(Cow<'a, str>),
    /// A message computed on demand, at most once.
    Lazy(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> ExceptionData<'a> {
    /// Wrap a closure whose return value becomes the message.
    pub fn lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> String + 'a,
    {
        Self::Lazy(Box::new(f))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Resolve into a message, invoking a lazy closure if there is one.
    pub fn into_message(self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Text(text) => Some(text.into_owned()),
            Self::Lazy(f) => Some(f()),
        }
    }
}

impl Default for ExceptionData<'_> {
    fn default() -> Self {
        Self::Absent
    }
}

impl fmt::Debug for ExceptionData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<()> for ExceptionData<'_> {
    fn from(_: ()) -> Self {
        Self::Absent
    }
}

impl<'a> From<&'a str> for ExceptionData<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for ExceptionData<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for ExceptionData<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for ExceptionData<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::Text(text)
    }
}

impl<'a, T> From<Option<T>> for ExceptionData<'a>
where
    T: Into<ExceptionData<'a>>,
{
    fn from(data: Option<T>) -> Self {
        data.map_or(Self::Absent, Into::into)
    }
}

//! The default error value, and the wrapping relation between errors.

use alloc::{boxed::Box, string::String};
use core::fmt;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Errors that may wrap a cause.
///
/// The containment test behind [`Result::contains_err`](crate::Result::contains_err)
/// walks from an error through its causes, comparing one link at a time.
pub trait Chain: fmt::Display {
    /// The error this one wraps, if any.
    fn cause(&self) -> Option<&Self> {
        None
    }

    /// Compares this link alone, ignoring causes.
    fn matches(&self, target: &Self) -> bool;

    /// Iterates over `self`, then its cause, then the cause's cause...
    fn causes(&self) -> Causes<'_, Self> {
        Causes { next: Some(self) }
    }

    /// Whether `target` is `self` or anything `self` wraps.
    fn contains(&self, target: &Self) -> bool {
        self.causes().any(|link| link.matches(target))
    }
}

/// Iterator over an error chain, see [`Chain::causes`].
pub struct Causes<'a, E: ?Sized> {
    next: Option<&'a E>,
}

impl<'a, E: Chain + ?Sized> Iterator for Causes<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

/// A failure with a message, possibly wrapping the failure that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    message: String,
    cause: Option<Box<Error>>,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None }
    }

    /// Wraps `self` in a new outer error.
    ///
    /// The outer error renders as `"{context}: {self}"`, and still
    /// [contains](Chain::contains) `self`.
    pub fn wrap(self, context: impl Into<String>) -> Self {
        Self { message: context.into(), cause: Some(Box::new(self)) }
    }

    /// The message of this link only; `Display` renders the whole chain.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_deref()
    }

    /// The innermost error of the chain (`self` if nothing is wrapped).
    pub fn root_cause(&self) -> &Error {
        self.causes().last().unwrap_or(self)
    }
}

impl Chain for Error {
    fn cause(&self) -> Option<&Self> {
        Error::cause(self)
    }

    fn matches(&self, target: &Self) -> bool {
        self == target
    }
}

impl Chain for &str {
    fn matches(&self, target: &Self) -> bool {
        self == target
    }
}

impl Chain for String {
    fn matches(&self, target: &Self) -> bool {
        self == target
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Error {
    /// Wipes the message and every cause, leaving an empty leaf.
    fn zeroize(&mut self) {
        self.message.zeroize();
        if let Some(cause) = self.cause.as_mut() {
            cause.zeroize();
        }
        self.cause = None;
    }
}

//! The two-state container and its combinators.
//!
//! Every combinator consumes or borrows its input and hands back a new value;
//! nothing here mutates a `Result` in place. Closures passed in are called
//! in-line, at most once, and only on the variant they are meant for.

use alloc::string::ToString;
use core::fmt;

use crate::{Chain, Error};

mod trait_implementations;

use self::abort::wrong_variant;
use self::Result::{Err, Ok};

/// Either success, holding a `T`, or failure, holding an `E`.
///
/// The error defaults to [`Error`], which renders a message and remembers
/// what it wraps. Any other error type works too; the few operations that
/// need more from it say so in their bounds.
#[derive(Clone, Copy, Debug)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<T, E = Error> {
    /// Contains the success value
    Ok(T),
    /// Contains the error value
    Err(E),
}

impl<T> Result<T, Error> {
    /// Failure from a bare message, wrapped into an [`Error`].
    pub fn err_msg(message: impl Into<Error>) -> Self {
        Err(message.into())
    }
}

impl<T, E> Result<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// `true` if `Ok` and the value satisfies `predicate`.
    pub fn is_ok_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Ok(value) => predicate(value),
            Err(_) => false,
        }
    }

    /// `true` if `Err` and the error satisfies `predicate`.
    pub fn is_err_and(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Ok(_) => false,
            Err(error) => predicate(error),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => None,
            Err(error) => Some(error),
        }
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error),
        }
    }

    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error),
        }
    }

    /// Hands over to `?`-based code.
    pub fn into_std(self) -> core::result::Result<T, E> {
        self.into()
    }

    /// Applies `f` to the success value; an error passes through as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Ok(value) => Ok(f(value)),
            Err(error) => Err(error),
        }
    }

    /// Applies `f` to the error; a success value passes through as is.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(f(error)),
        }
    }

    /// `f(value)` on `Ok`, else `fallback`. Leaves the `Result` behind.
    pub fn map_or<U>(self, fallback: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Ok(value) => f(value),
            Err(_) => fallback,
        }
    }

    /// Like [`map_or`](Self::map_or), computing the fallback from the error
    /// only when needed.
    pub fn map_or_else<U>(self, fallback: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Ok(value) => f(value),
            Err(error) => fallback(error),
        }
    }

    /// Shows the success value to `f`, then returns `self` unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Shows the error to `f`, then returns `self` unchanged.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Err(error) = &self {
            f(error);
        }
        self
    }

    /// `other` if `self` is `Ok`, else the error of `self`.
    ///
    /// `other` is built before the call whatever `self` turns out to be;
    /// use [`and_then`](Self::and_then) to defer it.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Ok(_) => other,
            Err(error) => Err(error),
        }
    }

    /// Continues with `f` on success, short-circuits on failure.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        match self {
            Ok(value) => f(value),
            Err(error) => Err(error),
        }
    }

    /// `self` if `Ok`, else `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Ok(_) => self,
            Err(_) => other,
        }
    }

    /// `self` if `Ok`, else whatever `f` makes of the error.
    pub fn or_else(self, f: impl FnOnce(E) -> Self) -> Self {
        match self {
            Ok(_) => self,
            Err(error) => f(error),
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(_) => fallback,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Ok(value) => value,
            Err(error) => f(error),
        }
    }
}

impl<T: Default, E> Result<T, E> {
    /// The success value, or `T::default()` on failure.
    pub fn unwrap_or_default(self) -> T {
        match self {
            Ok(value) => value,
            Err(_) => T::default(),
        }
    }
}

/// Extraction that treats the wrong variant as a bug.
///
/// These panic, which is not a way to handle an expected failure: reach for
/// them only where the other variant would break an invariant of the caller.
impl<T, E: fmt::Debug> Result<T, E> {
    /// The success value.
    ///
    /// Panics on `Err`, with `msg` followed by the error.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Ok(value) => value,
            Err(error) => wrong_variant(msg, &error),
        }
    }

    /// The success value.
    ///
    /// Panics on `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => wrong_variant("called `Result::unwrap()` on an `Err` value", &error),
        }
    }
}

impl<T: fmt::Debug, E> Result<T, E> {
    /// The error.
    ///
    /// Panics on `Ok`, with `msg` followed by the success value.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Ok(value) => wrong_variant(msg, &value),
            Err(error) => error,
        }
    }

    /// The error.
    ///
    /// Panics on `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Ok(value) => wrong_variant("called `Result::unwrap_err()` on an `Ok` value", &value),
            Err(error) => error,
        }
    }
}

impl<T: PartialEq, E> Result<T, E> {
    /// `true` iff `Ok` with a value equal to `x`.
    pub fn contains(&self, x: &T) -> bool {
        self.is_ok_and(|value| value == x)
    }
}

impl<T, E: Chain> Result<T, E> {
    /// `true` iff `Err` with an error that is, or wraps, `target`.
    ///
    /// Stronger than [`equal`](Self::equal): a wrapping error is found here,
    /// while its rendered message differs from the one it wraps.
    pub fn contains_err(&self, target: &E) -> bool {
        self.is_err_and(|error| error.contains(target))
    }
}

impl<T: Clone, E: Clone> Result<T, E> {
    /// Independent copy: changes made through one are never seen by the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<T: PartialEq, E: fmt::Display> Result<T, E> {
    /// Both `Ok` with equal values, or both `Err` rendering the same message.
    ///
    /// Errors are compared by text only, not by what they wrap.
    pub fn equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Ok(left), Ok(right)) => left == right,
            (Err(left), Err(right)) => left.to_string() == right.to_string(),
            _ => false,
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Result<T, E> {
        match self {
            Ok(inner) => inner,
            Err(error) => Err(error),
        }
    }
}

// Kept apart from the `Ok`/`Err` imports above: the logging macros expand
// to code that expects the prelude's variants.
mod abort {
    use core::fmt;

    #[cold]
    #[inline(never)]
    #[track_caller]
    pub(super) fn wrong_variant(msg: &str, payload: &dyn fmt::Debug) -> ! {
        error!("{}: {:?}", msg, payload);
        panic!("{}: {:?}", msg, payload)
    }
}

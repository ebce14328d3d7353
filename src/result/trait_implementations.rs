use core::{fmt, result::Result as StdResult};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use super::Result::{self, Err, Ok};

/// Same as [`Result::equal`]: errors compare by rendered message.
impl<T: PartialEq, E: fmt::Display> PartialEq for Result<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Eq, E: fmt::Display> Eq for Result<T, E> {}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(result: StdResult<T, E>) -> Self {
        match result {
            StdResult::Ok(value) => Ok(value),
            StdResult::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => StdResult::Ok(value),
            Err(error) => StdResult::Err(error),
        }
    }
}

/// Wipes whichever payload is active, in place.
#[cfg(feature = "zeroize")]
impl<T: Zeroize, E: Zeroize> Zeroize for Result<T, E> {
    fn zeroize(&mut self) {
        match self {
            Ok(value) => value.zeroize(),
            Err(error) => error.zeroize(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    fn parse(input: &str) -> Result<i32> {
        input.parse::<i32>().map_err(|_| Error::new("not a number")).into()
    }

    fn increment(input: &str) -> StdResult<i32, Error> {
        let x = parse(input).into_std()?;
        StdResult::Ok(x + 1)
    }

    #[test]
    fn from_std() {
        assert_eq!(parse("41"), Ok(41));
        assert_eq!(parse("forty-one"), Err(Error::new("not a number")));
    }

    #[test]
    fn into_std() {
        assert_eq!(increment("41"), StdResult::Ok(42));
        assert_eq!(increment("x"), StdResult::Err(Error::new("not a number")));

        let r: StdResult<i32, Error> = Result::<i32>::err_msg("bad").into();
        assert!(r.is_err());
    }

    #[test]
    fn partial_eq() {
        let a: Result<&str> = Ok("hello");
        assert_eq!(a, Ok("hello"));
        assert_ne!(a, Ok("world"));
        assert_ne!(a, Err(Error::new("hello")));

        // structure is ignored, only the rendered text counts
        let flat: Result<&str> = Err(Error::new("outer: inner"));
        assert_eq!(flat, Err(Error::new("inner").wrap("outer")));
    }

    #[test]
    #[cfg(feature = "zeroize")]
    fn zeroize() {
        let mut secret: Result<Vec<u8>> = Ok(vec![1, 2, 3]);
        let untouched = secret.copy();
        secret.zeroize();

        assert!(secret.is_ok_and(|bytes| bytes.is_empty()));
        assert_eq!(untouched, Ok(vec![1, 2, 3]));

        let mut failure: Result<Vec<u8>> = Err(Error::new("key 0xdeadbeef rejected"));
        failure.zeroize();
        assert!(failure.is_err_and(|e| e.message().is_empty()));
    }
}

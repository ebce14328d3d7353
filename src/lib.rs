//! A two-state container: success with a value, or failure with an error.
//!
//! [`Result`] carries the combinators you'd expect (mapping, chaining,
//! fallbacks, extraction, flattening). Its default error, [`Error`],
//! remembers what it wraps, so a failure can be asked whether it
//! [contains](Result::contains_err) some deeper cause.
//!
//! ```
//! use tagged_result::{Error, Result};
//!
//! fn halve(x: i32) -> Result<i32> {
//!     if x % 2 == 0 {
//!         Result::Ok(x / 2)
//!     } else {
//!         Result::err_msg("odd")
//!     }
//! }
//!
//! let r = halve(8).and_then(halve).map(|x| x * 10);
//! assert_eq!(r.unwrap_or(0), 20);
//!
//! let odd = Error::new("odd");
//! let r = halve(3).map_err(|e| e.wrap("halving 3"));
//! assert!(r.contains_err(&odd));
//! assert_eq!(r.unwrap_err().to_string(), "halving 3: odd");
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]
extern crate alloc;

delog::generate_macros!();

mod error;
pub use error::{Causes, Chain, Error};
mod result;
pub use result::Result;

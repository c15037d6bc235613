//! Combinators for merging two optional values.
//!
//! A [`Pair`] holds two independently-optional values and derives a combined
//! result only when both are present; absence on either side propagates
//! silently instead of raising an error. [`join`] builds the same holder
//! from two asynchronous sources, failing fast with a [`JoinError`] if
//! either source fails.
//!
//! # Example
//!
//! ```
//! use optpair::pair;
//!
//! let merged = pair(Some(10), Some(20)).map(|a, b| a + b);
//! assert_eq!(merged, Some(30));
//!
//! let merged = pair(Some(10), None::<i32>).map(|a, b| a + b);
//! assert_eq!(merged, None);
//! ```
//!
//! The asynchronous form resolves both sources before constructing the
//! holder:
//!
//! ```
//! use futures::future;
//! use optpair::pair_async;
//!
//! let first = future::ok::<_, failure::Error>(Some(5));
//! let second = future::ok::<_, failure::Error>(Some("x"));
//!
//! let pair = pair_async(first, second).unwrap();
//! assert_eq!(pair.map(|a, b| format!("{}{}", a, b)), Some("5x".into()));
//! ```
//!
//! [`Pair`]: ./struct.Pair.html
//! [`join`]: ./fn.join.html
//! [`JoinError`]: ./struct.JoinError.html

#![doc(html_root_url = "https://docs.rs/optpair/0.1.0")]
#![warn(
    missing_docs,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    unused
)]
#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(test, deny(warnings))]
// The `Fail` derive from the pinned `failure_derive 0.1` emits a
// `non_local_definitions` warning under newer rustc; allow it so the
// `deny(warnings)` test build is not broken by a dependency macro.
#![cfg_attr(test, allow(non_local_definitions))]
#![cfg_attr(test, doc(test(attr(deny(warnings)))))]

mod error;
mod join;
mod maybe_done;
mod pair;

// re-exports
pub use crate::error::JoinError;
pub use crate::join::{join, pair_async, IsOption, Join};
pub use crate::pair::{pair, Both, Pair};

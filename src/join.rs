//! Joining two asynchronous optional sources.

use futures::{Async, Future, Poll};
use log::trace;
use std::fmt;

use crate::error::JoinError;
use crate::maybe_done::MaybeDone;
use crate::pair::{pair, Pair};

/// A helper trait enforcing that the resolved value of a source is an
/// `Option`.
pub trait IsOption: sealed::Sealed {
    /// The type of inner value.
    type Item;

    /// Consume itself and get the value of `Option`.
    fn into_option(self) -> Option<Self::Item>;
}

impl<T> IsOption for Option<T> {
    type Item = T;

    #[inline(always)]
    fn into_option(self) -> Option<Self::Item> {
        self
    }
}

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for Option<T> {}
}

/// Create a future which resolves both sources and yields a `Pair` of
/// their results.
///
/// The two sources are polled jointly and their relative completion order
/// has no effect on the result. If either source fails, the returned
/// future fails with a [`JoinError`] wrapping the cause, and the value of
/// the other source is discarded even if it has already resolved. A
/// source which never resolves leaves the returned future pending
/// indefinitely.
///
/// [`JoinError`]: ./struct.JoinError.html
pub fn join<F1, F2>(first: F1, second: F2) -> Join<F1, F2>
where
    F1: Future,
    F2: Future,
    F1::Item: IsOption,
    F2::Item: IsOption,
    F1::Error: Into<failure::Error>,
    F2::Error: Into<failure::Error>,
{
    Join {
        first: MaybeDone::Pending(first),
        second: MaybeDone::Pending(second),
    }
}

/// Resolve both sources, blocking the calling thread until they complete.
///
/// Behaves as [`pair`] applied to the resolved values. If either source
/// fails, the error is returned as a [`JoinError`] and no holder is
/// constructed; the failed computation is not retried. Blocks forever if
/// a source never resolves.
///
/// [`pair`]: ./fn.pair.html
/// [`JoinError`]: ./struct.JoinError.html
pub fn pair_async<F1, F2>(
    first: F1,
    second: F2,
) -> Result<Pair<<F1::Item as IsOption>::Item, <F2::Item as IsOption>::Item>, JoinError>
where
    F1: Future,
    F2: Future,
    F1::Item: IsOption,
    F2::Item: IsOption,
    F1::Error: Into<failure::Error>,
    F2::Error: Into<failure::Error>,
{
    trace!("blocking on two pending sources");
    join(first, second).wait()
}

/// A future returned from [`join`].
///
/// [`join`]: ./fn.join.html
pub struct Join<F1: Future, F2: Future> {
    first: MaybeDone<F1>,
    second: MaybeDone<F2>,
}

impl<F1, F2> fmt::Debug for Join<F1, F2>
where
    F1: Future + fmt::Debug,
    F2: Future + fmt::Debug,
    F1::Item: fmt::Debug,
    F2::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Join")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<F1, F2> Future for Join<F1, F2>
where
    F1: Future,
    F2: Future,
    F1::Item: IsOption,
    F2::Item: IsOption,
    F1::Error: Into<failure::Error>,
    F2::Error: Into<failure::Error>,
{
    type Item = Pair<<F1::Item as IsOption>::Item, <F2::Item as IsOption>::Item>;
    type Error = JoinError;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        let mut all_done = match self.first.poll_done() {
            Ok(done) => done,
            Err(e) => {
                self.first.erase();
                self.second.erase();
                return Err(JoinError::new(e));
            }
        };
        all_done = match self.second.poll_done() {
            Ok(done) => all_done && done,
            Err(e) => {
                self.first.erase();
                self.second.erase();
                return Err(JoinError::new(e));
            }
        };

        if all_done {
            Ok(Async::Ready(pair(
                self.first.take_item().into_option(),
                self.second.take_item().into_option(),
            )))
        } else {
            Ok(Async::NotReady)
        }
    }
}

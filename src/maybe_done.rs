use futures::{Async, Future};
use std::mem;

/// The per-slot state of a join on two sources.
#[derive(Debug)]
pub(crate) enum MaybeDone<A: Future> {
    Pending(A),
    Done(A::Item),
    Gone,
}

impl<A: Future> MaybeDone<A> {
    pub(crate) fn poll_done(&mut self) -> Result<bool, A::Error> {
        let item = match *self {
            MaybeDone::Pending(ref mut f) => match f.poll()? {
                Async::Ready(item) => item,
                Async::NotReady => return Ok(false),
            },
            MaybeDone::Done(..) => return Ok(true),
            MaybeDone::Gone => panic!("cannot resolve twice"),
        };
        *self = MaybeDone::Done(item);
        Ok(true)
    }

    pub(crate) fn take_item(&mut self) -> A::Item {
        match mem::replace(self, MaybeDone::Gone) {
            MaybeDone::Done(item) => item,
            _ => panic!(),
        }
    }

    pub(crate) fn erase(&mut self) {
        *self = MaybeDone::Gone;
    }
}

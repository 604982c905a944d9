use std::marker::PhantomData;

pub struct EnumerateIdxIter<I, Idx> {
    inner: std::iter::Enumerate<I>,
    _marker: PhantomData<Idx>,
}

/// Like `Iterator::enumerate`, but yields a typed index instead of a raw `usize`.
pub trait EnumerateIdx: Iterator + Sized {
    fn enumerate_idx<Idx: From<usize>>(self) -> EnumerateIdxIter<Self, Idx> {
        EnumerateIdxIter {
            inner: self.enumerate(),
            _marker: PhantomData,
        }
    }
}

impl<I: Iterator> EnumerateIdx for I {}

impl<I: Iterator, Idx: From<usize>> Iterator for EnumerateIdxIter<I, Idx> {
    type Item = (Idx, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, item)| (Idx::from(i), item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator, Idx: From<usize>> ExactSizeIterator for EnumerateIdxIter<I, Idx> {}

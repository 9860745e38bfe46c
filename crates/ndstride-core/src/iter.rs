//! Row-major traversal cursors

use std::cell::RefCell;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::layout::Layout;

/// Cursor over the elements of an array or view in row-major order.
///
/// The cursor walks the logical index space of its layout and translates
/// every index through the layout's offset and strides, so a view yields its
/// own elements rather than the underlying buffer order. Each cursor keeps
/// its own position; the storage is only borrowed while one element is read.
pub struct Iter<T> {
    storage: Rc<RefCell<Vec<T>>>,
    layout: Layout,
    index: Vec<usize>,
    remaining: usize,
}

impl<T: Clone> Iter<T> {
    pub(crate) fn new(storage: Rc<RefCell<Vec<T>>>, layout: Layout) -> Self {
        let remaining = layout.size();
        let index = vec![0; layout.ndim()];
        Self {
            storage,
            layout,
            index,
            remaining,
        }
    }

    /// Logical index of the next element, if any.
    pub fn position(&self) -> Option<&[usize]> {
        (self.remaining > 0).then_some(self.index.as_slice())
    }

    fn advance(&mut self) {
        self.remaining -= 1;
        for axis in (0..self.index.len()).rev() {
            self.index[axis] += 1;
            if self.index[axis] < self.layout.shape()[axis] {
                return;
            }
            self.index[axis] = 0;
        }
    }
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.storage.borrow()[self.layout.position(&self.index)].clone();
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<T> {}

impl<T: Clone> FusedIterator for Iter<T> {}

/// Like [`Iter`], but yields each element together with its logical index.
pub struct IndexedIter<T> {
    inner: Iter<T>,
}

impl<T: Clone> IndexedIter<T> {
    pub(crate) fn new(inner: Iter<T>) -> Self {
        Self { inner }
    }
}

impl<T: Clone> Iterator for IndexedIter<T> {
    type Item = (Vec<usize>, T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.inner.position()?.to_vec();
        let value = self.inner.next()?;
        Some((index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Clone> ExactSizeIterator for IndexedIter<T> {}

impl<T: Clone> FusedIterator for IndexedIter<T> {}

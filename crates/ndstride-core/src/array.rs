//! The strided array type

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{NdError, Result};
use crate::iter::{IndexedIter, Iter};
use crate::layout::{validate_shape, Layout};
use crate::slice::SliceSpec;

/// Fixed-shape N-dimensional array over shared flat storage.
///
/// Every array holds a handle to its storage plus a [`Layout`]. Arrays built
/// with [`create`](StridedArray::create) or [`from_vec`](StridedArray::from_vec)
/// allocate fresh storage; [`slice`](StridedArray::slice) and
/// [`select`](StridedArray::select) return views that share it. The storage
/// lives until the last array referring to it is dropped.
pub struct StridedArray<T> {
    storage: Rc<RefCell<Vec<T>>>,
    layout: Layout,
}

impl<T: Clone> StridedArray<T> {
    /// Create an array of `shape` with every element set to `default_value`.
    ///
    /// # Errors
    ///
    /// Returns [`NdError::InvalidShape`] if `shape` is empty or has a zero
    /// extent.
    pub fn create(shape: &[usize], default_value: T) -> Result<Self> {
        let layout = Layout::row_major(shape)?;
        let size = layout.size();
        log::debug!("allocating {size} elements for shape {shape:?}");
        Ok(Self {
            storage: Rc::new(RefCell::new(vec![default_value; size])),
            layout,
        })
    }

    /// Wrap `data`, laid out in row-major order, as an array of `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`NdError::InvalidShape`] if `shape` is invalid or its element
    /// count differs from `data.len()`.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected_size = validate_shape(shape)?;
        if data.len() != expected_size {
            return Err(NdError::InvalidShape(format!(
                "Data length {} doesn't match shape {:?} (expected {})",
                data.len(),
                shape,
                expected_size
            )));
        }
        let layout = Layout::row_major(shape)?;
        log::debug!("wrapping {} elements as shape {shape:?}", data.len());
        Ok(Self {
            storage: Rc::new(RefCell::new(data)),
            layout,
        })
    }

    /// Element at `indices`, one per axis. Negative indices count from the end.
    ///
    /// # Errors
    ///
    /// [`NdError::RankMismatch`] if the number of indices differs from the
    /// rank, [`NdError::IndexOutOfRange`] if an index is outside its axis.
    pub fn get(&self, indices: &[isize]) -> Result<T> {
        let position = self.layout.storage_index(indices)?;
        Ok(self.storage.borrow()[position].clone())
    }

    /// Overwrite the element at `indices`.
    ///
    /// The write lands in the shared storage, so it is visible through every
    /// array that addresses the same position.
    ///
    /// # Errors
    ///
    /// Same as [`get`](StridedArray::get); nothing is written on error.
    pub fn set(&self, indices: &[isize], value: T) -> Result<()> {
        let position = self.layout.storage_index(indices)?;
        self.storage.borrow_mut()[position] = value;
        Ok(())
    }

    /// Row-major traversal of this array's elements.
    ///
    /// Every call returns a fresh cursor starting at the first element.
    pub fn iter(&self) -> Iter<T> {
        Iter::new(Rc::clone(&self.storage), self.layout.clone())
    }

    /// Row-major traversal yielding `(index, value)` pairs.
    pub fn indexed_iter(&self) -> IndexedIter<T> {
        IndexedIter::new(self.iter())
    }

    /// Copy the elements out in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// View selected by `specs`, one per leading axis.
    ///
    /// Trailing axes without a spec are fully selected. The view shares
    /// storage with `self`; no element is copied.
    ///
    /// # Errors
    ///
    /// Returns [`NdError::InvalidSlice`] for a zero step, more specs than
    /// axes, or a selection that is empty along some axis.
    pub fn slice(&self, specs: &[SliceSpec]) -> Result<Self> {
        let layout = self.layout.slice(specs)?;
        log::debug!(
            "slice view: shape {:?} strides {:?} offset {}",
            layout.shape(),
            layout.strides(),
            layout.offset()
        );
        Ok(self.view(layout))
    }

    /// View with `axis` fixed at `index` and removed.
    ///
    /// # Errors
    ///
    /// See [`Layout::select`].
    pub fn select(&self, axis: usize, index: isize) -> Result<Self> {
        let layout = self.layout.select(axis, index)?;
        log::debug!(
            "select view: axis {axis} index {index}, shape {:?} offset {}",
            layout.shape(),
            layout.offset()
        );
        Ok(self.view(layout))
    }
}

impl<T> StridedArray<T> {
    fn view(&self, layout: Layout) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            layout,
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    pub fn offset(&self) -> usize {
        self.layout.offset()
    }

    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Number of elements addressed by this array or view.
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Whether `self` and `other` read and write the same storage.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }

    pub(crate) fn storage(&self) -> &RefCell<Vec<T>> {
        &self.storage
    }
}

impl<T> fmt::Debug for StridedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StridedArray")
            .field("shape", &self.shape())
            .field("strides", &self.strides())
            .field("offset", &self.offset())
            .finish_non_exhaustive()
    }
}

//! Shape, strides and offset of an array or view

use crate::error::{NdError, Result};
use crate::slice::SliceSpec;

/// Addressing metadata: maps logical indices to positions in flat storage.
///
/// A layout never owns data. Fresh arrays get a row-major layout with offset
/// zero; views get layouts derived from their source through [`Layout::slice`]
/// or [`Layout::select`], which only ever address positions the source could.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Vec<usize>,
    strides: Vec<isize>,
    offset: usize,
}

impl Layout {
    /// Row-major layout for `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`NdError::InvalidShape`] if `shape` is empty, has a zero
    /// extent, or its element count overflows `usize`.
    pub fn row_major(shape: &[usize]) -> Result<Self> {
        validate_shape(shape)?;
        Ok(Self {
            shape: shape.to_vec(),
            strides: compute_strides(shape),
            offset: 0,
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of logical elements.
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether the layout addresses a dense row-major block.
    pub fn is_contiguous(&self) -> bool {
        let mut expected = 1isize;
        for (&dim, &stride) in self.shape.iter().zip(&self.strides).rev() {
            if dim != 1 && stride != expected {
                return false;
            }
            expected *= dim as isize;
        }
        true
    }

    /// Validated storage position of `indices`.
    ///
    /// Negative components count back from the end of their axis.
    ///
    /// # Errors
    ///
    /// [`NdError::RankMismatch`] if `indices.len()` differs from the rank,
    /// [`NdError::IndexOutOfRange`] if a component falls outside its axis.
    pub fn storage_index(&self, indices: &[isize]) -> Result<usize> {
        if indices.len() != self.ndim() {
            return Err(NdError::RankMismatch {
                expected: self.ndim(),
                got: indices.len(),
            });
        }
        let mut position = self.offset as isize;
        for (axis, (&index, &stride)) in indices.iter().zip(&self.strides).enumerate() {
            let index = normalize_index(axis, index, self.shape[axis])?;
            position += index as isize * stride;
        }
        Ok(position as usize)
    }

    /// Storage position of an in-bounds logical index, without validation.
    pub(crate) fn position(&self, index: &[usize]) -> usize {
        let position = index
            .iter()
            .zip(&self.strides)
            .fold(self.offset as isize, |acc, (&i, &stride)| {
                acc + i as isize * stride
            });
        position as usize
    }

    /// Layout of the view selected by `specs`, one spec per leading axis.
    ///
    /// Axes without a spec stay fully selected.
    ///
    /// # Errors
    ///
    /// [`NdError::InvalidSlice`] if there are more specs than axes, a step is
    /// zero, or an axis would end up with no elements.
    pub fn slice(&self, specs: &[SliceSpec]) -> Result<Self> {
        if specs.len() > self.ndim() {
            return Err(NdError::InvalidSlice(format!(
                "{} slice specs for array with {} dimensions",
                specs.len(),
                self.ndim()
            )));
        }

        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        let mut offset = self.offset as isize;

        for (axis, spec) in specs.iter().enumerate() {
            let resolved = spec.resolve(self.shape[axis])?;
            if resolved.len == 0 {
                return Err(NdError::InvalidSlice(format!(
                    "{spec} selects no elements on axis {axis} of size {}",
                    self.shape[axis]
                )));
            }
            offset += resolved.start * self.strides[axis];
            shape[axis] = resolved.len;
            // a single selected position never moves along the axis
            if resolved.len > 1 {
                strides[axis] = self.strides[axis]
                    .checked_mul(resolved.step)
                    .ok_or_else(|| {
                        NdError::InvalidSlice(format!(
                            "{spec} overflows the stride of axis {axis}"
                        ))
                    })?;
            }
        }

        Ok(Self {
            shape,
            strides,
            offset: offset as usize,
        })
    }

    /// Layout with `axis` fixed at `index` and removed.
    ///
    /// # Errors
    ///
    /// [`NdError::InvalidAxis`] if `axis` is not below the rank,
    /// [`NdError::IndexOutOfRange`] if `index` is outside the axis, and
    /// [`NdError::InvalidSlice`] when removing the only remaining axis.
    pub fn select(&self, axis: usize, index: isize) -> Result<Self> {
        if axis >= self.ndim() {
            return Err(NdError::InvalidAxis {
                axis,
                ndim: self.ndim(),
            });
        }
        if self.ndim() == 1 {
            return Err(NdError::InvalidSlice(
                "cannot select away the last remaining axis".to_string(),
            ));
        }
        let index = normalize_index(axis, index, self.shape[axis])?;

        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape.remove(axis);
        let stride = strides.remove(axis);

        Ok(Self {
            shape,
            strides,
            offset: (self.offset as isize + index as isize * stride) as usize,
        })
    }
}

/// Checks that `shape` describes a non-empty array and returns its size.
pub(crate) fn validate_shape(shape: &[usize]) -> Result<usize> {
    if shape.is_empty() {
        return Err(NdError::InvalidShape(
            "shape must have at least one dimension".to_string(),
        ));
    }
    if let Some(axis) = shape.iter().position(|&dim| dim == 0) {
        return Err(NdError::InvalidShape(format!(
            "dimension {axis} of shape {shape:?} must be positive"
        )));
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .filter(|&size| size <= isize::MAX as usize)
        .ok_or_else(|| NdError::InvalidShape(format!("shape {shape:?} is too large")))
}

fn compute_strides(shape: &[usize]) -> Vec<isize> {
    let mut strides = vec![1isize; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1] as isize;
    }
    strides
}

fn normalize_index(axis: usize, index: isize, size: usize) -> Result<usize> {
    let resolved = if index < 0 {
        index + size as isize
    } else {
        index
    };
    if resolved < 0 || resolved >= size as isize {
        return Err(NdError::IndexOutOfRange { axis, index, size });
    }
    Ok(resolved as usize)
}

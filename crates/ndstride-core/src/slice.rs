//! Per-axis slice specifications

use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::{NdError, Result};

/// A `start:stop:step` selection along one axis.
///
/// Missing bounds take their defaults when resolved against an axis: step 1,
/// and for a positive step start 0 and stop at the extent. With a negative
/// step the defaults run from the last element back past the first. Negative
/// bounds count from the end and out-of-range bounds are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

/// A [`SliceSpec`] resolved against a concrete axis extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlice {
    /// First selected position along the axis.
    pub start: isize,
    pub step: isize,
    /// Number of selected positions.
    pub len: usize,
}

impl SliceSpec {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// Select the whole axis.
    pub fn full() -> Self {
        Self::default()
    }

    pub fn range(start: isize, stop: isize) -> Self {
        Self::new(Some(start), Some(stop), None)
    }

    /// Whole axis with the given step.
    pub fn step(step: isize) -> Self {
        Self::new(None, None, Some(step))
    }

    /// The single position `index`, keeping the axis with extent 1.
    pub fn at(index: isize) -> Self {
        // -1..0 would be empty, so the last element needs an open stop
        let stop = match index.checked_add(1) {
            Some(0) | None => None,
            stop => stop,
        };
        Self::new(Some(index), stop, None)
    }

    /// Resolve against an axis of `extent` elements.
    ///
    /// # Errors
    ///
    /// Returns [`NdError::InvalidSlice`] if the step is zero.
    pub fn resolve(&self, extent: usize) -> Result<ResolvedSlice> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(NdError::InvalidSlice(format!("{self} has a zero step")));
        }

        let extent = extent as isize;
        let (lower, upper) = if step > 0 {
            (0, extent)
        } else {
            (-1, extent - 1)
        };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + extent).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let (default_start, default_stop) = if step > 0 {
            (lower, upper)
        } else {
            (upper, lower)
        };
        let start = self.start.map_or(default_start, clamp);
        let stop = self.stop.map_or(default_stop, clamp);

        // start and stop are clamped to [-1, extent], so only the step can be extreme
        let len = if step > 0 && stop > start {
            (stop - start - 1) as usize / step.unsigned_abs() + 1
        } else if step < 0 && start > stop {
            (start - stop - 1) as usize / step.unsigned_abs() + 1
        } else {
            0
        };

        log::trace!("resolved {self} on extent {extent}: start={start} step={step} len={len}");
        Ok(ResolvedSlice {
            start,
            step,
            len,
        })
    }
}

impl fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |value: Option<isize>| value.map(|v| v.to_string()).unwrap_or_default();
        write!(f, "{}:{}", bound(self.start), bound(self.stop))?;
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

impl From<Range<isize>> for SliceSpec {
    fn from(range: Range<isize>) -> Self {
        Self::range(range.start, range.end)
    }
}

impl From<RangeFrom<isize>> for SliceSpec {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceSpec {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

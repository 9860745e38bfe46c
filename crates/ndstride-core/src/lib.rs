//! NdStride Core - strided N-dimensional arrays
//!
//! A [`StridedArray`] is a fixed-shape, homogeneous array whose elements live
//! in a flat buffer. Element positions are computed from a layout of shape,
//! strides and offset, so slicing only has to produce a new layout: the view
//! shares the buffer with its source and writes through one are visible
//! through the other.
//!
//! ```
//! use ndstride_core::{SliceSpec, StridedArray};
//!
//! let a = StridedArray::create(&[4, 4], 0)?;
//! let b = a.slice(&[SliceSpec::step(2)])?;
//! assert_eq!(b.shape(), &[2, 4]);
//!
//! b.set(&[1, 3], 7)?;
//! assert_eq!(a.get(&[2, 3])?, 7);
//! # Ok::<(), ndstride_core::NdError>(())
//! ```
//!
//! Storage is shared through `Rc<RefCell<_>>`, so arrays are not `Send`.
//! Nothing here is internally synchronized; callers sharing a set of views
//! must serialize their writers.

pub mod array;
pub mod error;
mod fmt;
pub mod iter;
pub mod layout;
pub mod slice;

pub use array::StridedArray;
pub use error::{NdError, Result};
pub use iter::{IndexedIter, Iter};
pub use layout::Layout;
pub use slice::SliceSpec;

//! Nested-bracket display

use std::fmt;

use crate::array::StridedArray;
use crate::layout::Layout;

impl<T: fmt::Display> fmt::Display for StridedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.storage().borrow();
        write_axis(f, &data, self.layout(), 0, self.offset() as isize)
    }
}

fn write_axis<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    data: &[T],
    layout: &Layout,
    axis: usize,
    base: isize,
) -> fmt::Result {
    let last = axis + 1 == layout.ndim();
    f.write_str("[")?;
    for i in 0..layout.shape()[axis] {
        if i > 0 {
            f.write_str(", ")?;
        }
        let position = base + i as isize * layout.strides()[axis];
        if last {
            write!(f, "{}", data[position as usize])?;
        } else {
            write_axis(f, data, layout, axis + 1, position)?;
        }
    }
    f.write_str("]")
}

//! Shared behavioural test suite for ndstride
//!
//! Slicing results are cross-checked against ndarray wherever both libraries
//! agree on the semantics (positive steps, in-range bounds).

pub mod access;
pub mod creation;
pub mod iteration;
pub mod slicing;

/// Test utilities
pub mod utils {
    use ndstride_core::StridedArray;

    /// Array of `shape` holding `0, 1, 2, ...` in storage order
    pub fn seq(shape: &[usize]) -> StridedArray<i64> {
        let len: usize = shape.iter().product();
        StridedArray::from_vec((0..len as i64).collect(), shape)
            .expect("test shapes are valid")
    }

    /// Storage positions visited by a row-major traversal of `arr`
    pub fn storage_positions<T: Clone>(arr: &StridedArray<T>) -> Vec<usize> {
        arr.indexed_iter()
            .map(|(index, _)| {
                let index: Vec<isize> = index.iter().map(|&i| i as isize).collect();
                arr.layout()
                    .storage_index(&index)
                    .expect("indices from traversal are in range")
            })
            .collect()
    }

    /// Every valid index tuple of `shape`, in row-major order
    pub fn all_indices(shape: &[usize]) -> Vec<Vec<isize>> {
        let mut out = vec![vec![]];
        for &dim in shape {
            out = out
                .into_iter()
                .flat_map(|prefix| {
                    (0..dim as isize).map(move |i| {
                        let mut next = prefix.clone();
                        next.push(i);
                        next
                    })
                })
                .collect();
        }
        out
    }

    /// Install a test logger once; honours `RUST_LOG`.
    #[cfg(test)]
    pub fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}

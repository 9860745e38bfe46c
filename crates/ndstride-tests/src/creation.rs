//! Construction tests

#[cfg(test)]
mod tests {
    use crate::utils::*;
    use ndstride_core::{NdError, StridedArray};

    // ============ create ============

    #[test]
    fn test_create_fill_everywhere() {
        let shapes: [Vec<usize>; 5] = [
            vec![1],
            vec![5],
            vec![2, 3],
            vec![3, 1, 4],
            vec![2, 2, 2, 2],
        ];
        for shape in shapes {
            let arr = StridedArray::create(&shape, 7u8).unwrap();
            for idx in all_indices(&shape) {
                assert_eq!(arr.get(&idx).unwrap(), 7);
            }
        }
    }

    #[test]
    fn test_create_non_numeric_elements() {
        let arr = StridedArray::create(&[2, 2], String::from("x")).unwrap();
        assert_eq!(arr.get(&[1, 1]).unwrap(), "x");
        arr.set(&[0, 1], "y".to_string()).unwrap();
        assert_eq!(arr.to_vec(), vec!["x", "y", "x", "x"]);
    }

    #[test]
    fn test_create_default_strides() {
        let arr = StridedArray::create(&[3, 4, 5, 6], 2).unwrap();
        assert_eq!(arr.strides(), &[120, 30, 6, 1]);
        assert_eq!(arr.offset(), 0);
        assert!(arr.is_contiguous());
    }

    #[test]
    fn test_create_rejects_empty_shape() {
        assert!(matches!(
            StridedArray::create(&[], 0.0),
            Err(NdError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_create_rejects_zero_extent() {
        let shapes: [Vec<usize>; 3] = [vec![0], vec![3, 0], vec![0, 2, 2]];
        for shape in shapes {
            assert!(matches!(
                StridedArray::create(&shape, 0.0),
                Err(NdError::InvalidShape(_))
            ));
        }
    }

    // ============ from_vec ============

    #[test]
    fn test_from_vec_row_major() {
        let arr = StridedArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        assert_eq!(arr.get(&[0, 2]).unwrap(), 3);
        assert_eq!(arr.get(&[1, 0]).unwrap(), 4);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        assert!(matches!(
            StridedArray::from_vec(vec![1, 2, 3, 4, 5], &[2, 3]),
            Err(NdError::InvalidShape(_))
        ));
        assert!(matches!(
            StridedArray::<i32>::from_vec(vec![], &[]),
            Err(NdError::InvalidShape(_))
        ));
    }
}

//! Slicing tests - cross-checked against ndarray

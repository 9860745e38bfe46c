//! Element access tests

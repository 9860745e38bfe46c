//! Traversal order tests

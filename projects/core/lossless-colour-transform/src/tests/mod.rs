//! Whole-row properties exercised through the public API.

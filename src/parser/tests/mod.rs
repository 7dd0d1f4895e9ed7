//! Parser test suite.
//!
//! Split by component: splitting (top-level commas), classification
//! (name/type/default tie-breaks), assembly (whole headers), and headers
//! (keyword recognition and line joining).

mod splitting;

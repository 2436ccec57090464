//! UI Components module - business-specific composite components
//!
//! Components combine primitives with application logic.
//! They are the only layer besides pages that imports from `crate::app`.

pub mod description;
pub mod interaction;
pub mod summary;
pub mod title;

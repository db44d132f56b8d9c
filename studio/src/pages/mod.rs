//! Page-level components.

pub mod builder;

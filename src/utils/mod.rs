// Utility functions
// Fixed copy and error types

pub mod copy;
pub mod errors;

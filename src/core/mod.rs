/*!
 * Core Module
 * Primitive types, limits and error handling
 */

pub mod data_structures;
pub mod errors;
pub mod limits;
pub mod sync;

// Re-export for convenience
pub use errors::*;

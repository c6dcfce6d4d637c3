/*!
 * Monitoring
 * Structured logging setup for programs embedding the primitives
 */

pub mod tracer;

pub use tracer::{init_tracing, try_init_tracing};

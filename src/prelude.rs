//! Prelude module for the eumnyeok crate.
//!
//! Re-exports the derive macros and logging macros used across modules.

#[allow(unused_imports)]
pub use derive_more::Display;
#[allow(unused_imports)]
pub use tracing::{debug, trace};

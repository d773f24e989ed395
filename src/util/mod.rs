//! Browser implementations of the `state` seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here wraps `web-sys` handles and only exists in the `browser`
//! build; native tests use in-memory fakes instead.

#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod storage;

//! Declaration nodes for the two C# layers.

mod bridge_fn;
mod raw_fn;

pub use bridge_fn::BridgeFn;
pub use raw_fn::{RawFn, dll_import};

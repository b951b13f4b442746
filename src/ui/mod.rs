//! Console presentation: the `Frontend` seam and text renderers.

pub mod frontend;
pub mod render;

pub use frontend::*;

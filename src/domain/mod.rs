//! Domain types for filecompare.
//! Spans, line pairs and per-line results shared by the engine, the session and the renderers.

pub mod error;
pub mod mode;
pub mod span;

pub use error::*;
pub use mode::*;
pub use span::*;

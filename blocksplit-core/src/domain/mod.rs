//! Domain layer: pure boundary and block algorithms
//!
//! Nothing here performs I/O or calls external collaborators.

pub mod boundary;
pub mod document;
pub mod offset;
pub mod refine;
pub mod span;
pub mod split;

pub use boundary::{BoundaryKind, BoundaryList, RefinedBoundaryList};
pub use document::Document;
pub use offset::to_absolute;
pub use refine::refine;
pub use span::Span;
pub use split::{split, Block};

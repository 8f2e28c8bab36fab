//! Application layer: orchestration over the domain algorithms

mod processor;

pub use processor::BlockProcessor;

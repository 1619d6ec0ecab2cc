// Library exports for disjoint-set
pub mod error;
pub mod graph;
pub mod union_find;

pub use error::{Error, Result};
pub use union_find::{DisjointSet, MergePolicy};

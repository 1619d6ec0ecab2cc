use thiserror::Error;

/// Errors raised by [`DisjointSet`](crate::union_find::DisjointSet) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("element {index} is out of range for a disjoint set of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid disjoint set size {size}")]
    InvalidConstruction { size: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod mmheap;
pub mod select;

use std::{error, fmt};

/// The two ways an operation on a fixed-capacity min-max heap can fail.
/// Both are recoverable and leave the heap exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// A peek or remove was attempted on a heap with no elements
    Empty,
    /// An insert was attempted on a heap already holding `capacity` elements
    CapacityExceeded
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::CapacityExceeded => write!(f, "heap is at fixed capacity")
        }
    }
}

impl error::Error for HeapError {}

//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.

pub mod deletion;
mod handle;
pub mod insertion;
pub mod tree;

pub use self::handle::RedBlackTree;

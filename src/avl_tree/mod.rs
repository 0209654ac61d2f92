//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod handle;
pub mod tree;

pub use self::handle::AvlTree;

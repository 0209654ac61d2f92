//! Ordered multisets built on binary search trees that count duplicate insertions.
//!
//! Three trees share one node type and one set of search routines:
//!
//! - [`BsTree`](bs_tree::BsTree) places values by plain binary search tree insertion.
//! - [`AvlTree`](avl_tree::AvlTree) rotates after every insertion and removal so that the heights
//!   of the two subtrees of any node differ by at most one.
//! - [`RedBlackTree`](red_black_tree::RedBlackTree) colors each node and recolors or rotates so
//!   that no red node has a red child and every path holds the same number of black nodes.
//!
//! Every node carries its height, so the local consistency of a node only depends on its
//! children. The [`validate`] module checks the invariants of a whole tree and [`pretty`]
//! renders one as ASCII art.

pub mod avl_tree;
pub mod bs_tree;
pub mod node;
pub mod pretty;
pub mod red_black_tree;
pub mod validate;

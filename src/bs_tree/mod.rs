//! Binary search tree without balancing. Its search, insertion and removal routines are the
//! backbone the balanced trees build on.

mod handle;
pub mod tree;

pub use self::handle::BsTree;
pub use self::tree::Iter;

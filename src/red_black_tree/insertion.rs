//! Elimination of a red-red violation below a black node after an insertion.
//!
//! The neighborhood of a black node `g` is `g` itself, its red child `p`, the red child `x` of
//! `p` and the sibling `y` of `p`:
//!
//! ```text
//!   LeftLeft     LeftRight    RightLeft    RightRight
//!      g            g            g             g
//!     / \          / \          / \           / \
//!   [p]  y       [p]  y        y  [p]        y  [p]
//!   /              \              /                \
//! [x]              [x]          [x]                [x]
//! ```

use crate::node::{self, Color, Direction, Node, Tree};
use log::trace;

/// The position of a red-red violation relative to the root of its neighborhood.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

impl Shape {
    fn new(parent_side: Direction, child_side: Direction) -> Self {
        match (parent_side, child_side) {
            (Direction::Left, Direction::Left) => Shape::LeftLeft,
            (Direction::Left, Direction::Right) => Shape::LeftRight,
            (Direction::Right, Direction::Left) => Shape::RightLeft,
            (Direction::Right, Direction::Right) => Shape::RightRight,
        }
    }

    /// The side of `g` on which the red parent `p` hangs.
    pub fn parent_side(self) -> Direction {
        match self {
            Shape::LeftLeft | Shape::LeftRight => Direction::Left,
            Shape::RightLeft | Shape::RightRight => Direction::Right,
        }
    }

    /// The side of `p` on which the red child `x` hangs.
    pub fn child_side(self) -> Direction {
        match self {
            Shape::LeftLeft | Shape::RightLeft => Direction::Left,
            Shape::LeftRight | Shape::RightRight => Direction::Right,
        }
    }
}

/// Finds the red-red violation between a child and a grandchild of `node`.
///
/// Returns `None` if `node` is red, has no grandchildren, or has no violation below it.
///
/// # Panics
///
/// Panics if more than one red-red violation sits below `node`. Insertion only ever disturbs a
/// single path, so a second violation means the tree was already broken.
pub fn violation<T>(node: &Node<T>) -> Option<Shape> {
    if node.color == Color::Red || node.height <= 1 {
        return None;
    }

    let mut ret = None;
    for &parent_side in &[Direction::Left, Direction::Right] {
        let parent = match node.child(parent_side) {
            Some(parent) if parent.color == Color::Red => parent,
            _ => continue,
        };
        for &child_side in &[Direction::Left, Direction::Right] {
            if node::is_red(parent.child(child_side)) {
                assert!(
                    ret.is_none(),
                    "Expected at most one red-red violation below a black node."
                );
                ret = Some(Shape::new(parent_side, child_side));
            }
        }
    }
    ret
}

/// Eliminates the red-red violation, if any, in the neighborhood of the root of `tree`.
///
/// With a black uncle the neighborhood is rotated so that a black node roots it and the
/// violation disappears. With a red uncle `g` is recolored red and its children black, which
/// moves any violation up to the parent of `g`. Either way the black-height of the subtree is
/// unchanged, but its root may be left red.
pub fn fix_red_red<T>(tree: &mut Tree<T>) {
    let shape = match tree.as_deref().and_then(violation) {
        Some(shape) => shape,
        None => return,
    };

    let side = shape.parent_side();
    let node = tree.as_mut().expect("Expected a non-empty tree.");

    if node::is_red(node.child(side.opposite())) {
        trace!("red uncle above {:?} violation, recoloring", shape);
        node.color = Color::Red;
        node.set_child_color(Direction::Left, Color::Black);
        node.set_child_color(Direction::Right, Color::Black);
    } else {
        trace!("black uncle above {:?} violation, rotating", shape);
        if shape.child_side() != side {
            node::rotate_tree(node.child_mut(side), side);
        }
        node::rotate_tree(tree, side.opposite());
        tree.as_mut()
            .expect("Expected a non-empty tree.")
            .swap_color_with_child(side.opposite());
    }
}

//! Audits of the structural invariants of a tree.
//!
//! Every check walks the whole tree, so these are meant for tests and debugging rather than for
//! use after every mutation.

use crate::node::{self, Color, Tree};
use std::cmp;
use std::error;
use std::fmt;

/// A broken tree invariant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Violation {
    /// A value is not strictly between the values of its ancestors.
    Order,
    /// A real node has a count of zero.
    ZeroCount,
    /// A stored height disagrees with the heights of the node's children.
    Height { stored: i32, computed: i32 },
    /// The heights of the two children of a node differ by more than one.
    Unbalanced { diff: i32 },
    /// The root of a red black tree is red.
    RedRoot,
    /// A red node has a red child.
    RedRed,
    /// Two paths from the same node reach empty subtrees through different numbers of black
    /// nodes.
    BlackHeight { left: usize, right: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Order => write!(f, "values are out of order"),
            Violation::ZeroCount => write!(f, "node has a count of zero"),
            Violation::Height { stored, computed } => {
                write!(f, "stored height {} but children give {}", stored, computed)
            },
            Violation::Unbalanced { diff } => write!(f, "children heights differ by {}", diff),
            Violation::RedRoot => write!(f, "root is red"),
            Violation::RedRed => write!(f, "red node has a red child"),
            Violation::BlackHeight { left, right } => {
                write!(f, "unbalanced blacks left:{}, right:{}", left, right)
            },
        }
    }
}

impl error::Error for Violation {}

/// Checks search order, positive counts and stored heights.
pub fn check_search_tree<T>(tree: &Tree<T>) -> Result<(), Violation>
where
    T: Ord,
{
    check_bounds(tree, None, None)?;
    check_heights(tree).map(|_| ())
}

fn check_bounds<T>(tree: &Tree<T>, low: Option<&T>, high: Option<&T>) -> Result<(), Violation>
where
    T: Ord,
{
    let node = match tree {
        Some(node) => node,
        None => return Ok(()),
    };

    if low.map_or(false, |low| node.value <= *low) || high.map_or(false, |high| node.value >= *high) {
        return Err(Violation::Order);
    }
    if node.count == 0 {
        return Err(Violation::ZeroCount);
    }

    check_bounds(&node.left, low, Some(&node.value))?;
    check_bounds(&node.right, Some(&node.value), high)
}

fn check_heights<T>(tree: &Tree<T>) -> Result<i32, Violation> {
    match tree {
        None => Ok(-1),
        Some(node) => {
            let computed = cmp::max(check_heights(&node.left)?, check_heights(&node.right)?) + 1;
            if computed != node.height {
                return Err(Violation::Height {
                    stored: node.height,
                    computed,
                });
            }
            Ok(computed)
        },
    }
}

/// Checks that the heights of the children of every node differ by at most one. Assumes stored
/// heights are correct.
pub fn check_avl<T>(tree: &Tree<T>) -> Result<(), Violation> {
    match tree {
        None => Ok(()),
        Some(node) => {
            let diff = node.height_diff();
            if diff.abs() > 1 {
                return Err(Violation::Unbalanced { diff });
            }
            check_avl(&node.left)?;
            check_avl(&node.right)
        },
    }
}

/// Checks the red black coloring and returns the black-height of the root: the number of black
/// nodes, empty subtrees included, on any path below it.
pub fn check_red_black<T>(tree: &Tree<T>) -> Result<usize, Violation> {
    if node::is_red(tree) {
        return Err(Violation::RedRoot);
    }
    match tree {
        None => Ok(0),
        Some(_) => count_blacks(tree, false).map(|blacks| blacks - 1),
    }
}

// Returns the number of black nodes on every path from the root of `tree` down to an empty
// subtree, counting both ends.
fn count_blacks<T>(tree: &Tree<T>, from_red: bool) -> Result<usize, Violation> {
    let node = match tree {
        Some(node) => node,
        None => return Ok(1),
    };

    let red = node.color == Color::Red;
    if from_red && red {
        return Err(Violation::RedRed);
    }

    let left = count_blacks(&node.left, red)?;
    let right = count_blacks(&node.right, red)?;
    if left != right {
        return Err(Violation::BlackHeight { left, right });
    }

    Ok(if red { left } else { left + 1 })
}

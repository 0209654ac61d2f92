use crate::node::{Color, Direction, Node, Tree};
use crate::red_black_tree::{deletion, insertion};
use log::trace;
use std::cmp::Ordering;

// What a removal left behind in the subtree it was applied to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    Missing,
    Balanced,
    // every path in the subtree is one black node short
    Deficit,
}

/// Inserts one occurrence of `value` as a red node and removes any red-red violation on the way
/// back up. The root may be left red.
pub fn insert<T>(tree: &mut Tree<T>, value: T)
where
    T: Ord,
{
    match tree {
        Some(node) => {
            match value.cmp(&node.value) {
                Ordering::Less => insert(&mut node.left, value),
                Ordering::Greater => insert(&mut node.right, value),
                Ordering::Equal => {
                    node.count += 1;
                    return;
                },
            }
            node.update();
        },
        None => {
            *tree = Some(Box::new(Node::new_red(value)));
            return;
        },
    }

    insertion::fix_red_red(tree);
}

// Repairs a deficit reported by the child of `tree` on side `dir` and refreshes the height of
// the root of `tree`.
fn settle<T>(tree: &mut Tree<T>, dir: Direction, outcome: Outcome) -> Outcome {
    let ret = match outcome {
        Outcome::Deficit if deletion::fix_black_height(tree, dir) => Outcome::Deficit,
        Outcome::Deficit => Outcome::Balanced,
        outcome => outcome,
    };
    if let Some(node) = tree {
        node.update();
    }
    ret
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> (Box<Node<T>>, Outcome) {
    if let Some(node) = tree {
        if node.left.is_some() {
            let (min, outcome) = remove_min(&mut node.left);
            return (min, settle(tree, Direction::Left, outcome));
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    let outcome = match node.right.take() {
        Some(mut child) => {
            child.color = node.color;
            *tree = Some(child);
            Outcome::Balanced
        },
        None if node.color == Color::Black => Outcome::Deficit,
        None => Outcome::Balanced,
    };
    (node, outcome)
}

fn remove_from<T>(tree: &mut Tree<T>, value: &T) -> Outcome
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return Outcome::Missing,
    };

    let (dir, outcome) = match value.cmp(&node.value) {
        Ordering::Less => (Direction::Left, remove_from(&mut node.left, value)),
        Ordering::Greater => (Direction::Right, remove_from(&mut node.right, value)),
        Ordering::Equal if node.count > 1 => {
            node.count -= 1;
            *tree = Some(node);
            return Outcome::Balanced;
        },
        Ordering::Equal => {
            let Node {
                left, right, color, ..
            } = *node;
            match (left, right) {
                (None, None) if color == Color::Black => return Outcome::Deficit,
                (None, None) => return Outcome::Balanced,
                (Some(mut child), None) | (None, Some(mut child)) => {
                    child.color = color;
                    *tree = Some(child);
                    return Outcome::Balanced;
                },
                (left, mut right) => {
                    let (mut successor, outcome) = remove_min(&mut right);
                    successor.left = left;
                    successor.right = right;
                    successor.color = color;
                    *tree = Some(successor);
                    return settle(tree, Direction::Right, outcome);
                },
            }
        },
    };

    *tree = Some(node);
    settle(tree, dir, outcome)
}

/// Removes one occurrence of `value`, repairing the black-height of every path on the way back
/// up. Returns `false` if `value` is not in the tree.
pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    match remove_from(tree, value) {
        Outcome::Missing => false,
        Outcome::Balanced => true,
        Outcome::Deficit => {
            // every path lost the same black node, so there is nothing left to repair
            let case = deletion::Neighborhood::at_root().classify();
            trace!("black-height deficit at the root: {:?}", case);
            true
        },
    }
}

use crate::node::{self, Direction, Node, Tree};
use log::trace;
use std::cmp::Ordering;

/// Restores the AVL invariant at the root of `tree`, assuming both of its children are already
/// AVL trees and their heights differ by at most two.
pub fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let diff = node.height_diff();
    if diff > 1 {
        let child_diff = node.right.as_ref().map_or(0, |child| child.height_diff());
        if child_diff < 0 {
            trace!("avl right-left rotation");
            node::rotate_tree(&mut node.right, Direction::Right);
        } else {
            trace!("avl right-right rotation");
        }
        node = node::rotate(node, Direction::Left);
    } else if diff < -1 {
        let child_diff = node.left.as_ref().map_or(0, |child| child.height_diff());
        if child_diff > 0 {
            trace!("avl left-right rotation");
            node::rotate_tree(&mut node.left, Direction::Left);
        } else {
            trace!("avl left-left rotation");
        }
        node = node::rotate(node, Direction::Right);
    }

    *tree = Some(node);
}

pub fn insert<T>(tree: &mut Tree<T>, value: T)
where
    T: Ord,
{
    match tree {
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => {
                node.count += 1;
                return;
            },
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return;
        },
    }

    balance(tree);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => {
            let ret = match value.cmp(&node.value) {
                Ordering::Less => remove(&mut node.left, value),
                Ordering::Greater => remove(&mut node.right, value),
                Ordering::Equal if node.count > 1 => {
                    node.count -= 1;
                    true
                },
                Ordering::Equal => {
                    let Node { left, right, .. } = *node;
                    *tree = match (left, right) {
                        (None, right) => right,
                        (left, None) => left,
                        (left, right) => combine_subtrees(left, right),
                    };
                    balance(tree);
                    return true;
                },
            };
            *tree = Some(node);
            ret
        },
        None => return false,
    };

    balance(tree);
    ret
}

#[cfg(test)]
mod tests {
    use super::{balance, insert, remove};
    use crate::bs_tree::tree::{count_total, Iter};
    use crate::node::{height, Node, Tree};
    use crate::validate;

    fn build(values: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for value in values {
            insert(&mut tree, *value);
        }
        tree
    }

    fn chain(values: &[u32], dirs: &[bool]) -> Tree<u32> {
        // builds an unbalanced chain where `true` hangs the next node on the right
        let mut tree: Tree<u32> = None;
        let mut slot = &mut tree;
        for (i, value) in values.iter().enumerate() {
            *slot = Some(Box::new(Node::new(*value)));
            let node = slot.as_mut().unwrap();
            slot = if dirs.get(i).cloned().unwrap_or(false) {
                &mut node.right
            } else {
                &mut node.left
            };
        }
        fix_heights(&mut tree);
        tree
    }

    fn fix_heights(tree: &mut Tree<u32>) {
        if let Some(node) = tree {
            fix_heights(&mut node.left);
            fix_heights(&mut node.right);
            node.update();
        }
    }

    fn root(tree: &Tree<u32>) -> u32 {
        tree.as_ref().map(|node| node.value).unwrap()
    }

    #[test]
    fn test_balance_right_right() {
        let mut tree = chain(&[1, 2, 3], &[true, true]);
        balance(&mut tree);
        assert_eq!(root(&tree), 2);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_balance_right_left() {
        let mut tree = chain(&[1, 3, 2], &[true, false]);
        balance(&mut tree);
        assert_eq!(root(&tree), 2);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_balance_left_left() {
        let mut tree = chain(&[3, 2, 1], &[false, false]);
        balance(&mut tree);
        assert_eq!(root(&tree), 2);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_balance_left_right() {
        let mut tree = chain(&[3, 1, 2], &[false, true]);
        balance(&mut tree);
        assert_eq!(root(&tree), 2);
        assert_eq!(height(&tree), 1);
    }

    #[test]
    fn test_balance_noop() {
        let mut tree = build(&[2, 1, 3]);
        balance(&mut tree);
        assert_eq!(root(&tree), 2);
    }

    #[test]
    fn test_insert_ascending() {
        let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(height(&tree), 2);
        assert_eq!(root(&tree), 4);
        assert_eq!(validate::check_avl(&tree), Ok(()));
    }

    #[test]
    fn test_remove_rebalances() {
        let mut tree = build(&[2, 1, 3, 4]);
        assert!(remove(&mut tree, &1));
        assert_eq!(root(&tree), 3);
        assert_eq!(height(&tree), 1);
        assert_eq!(validate::check_search_tree(&tree), Ok(()));
    }

    #[test]
    fn test_remove_balanced_sibling() {
        // removing 1 leaves the right child with two children of equal height
        let mut tree = build(&[2, 1, 4, 3, 5]);
        assert!(remove(&mut tree, &1));
        assert_eq!(root(&tree), 4);
        assert_eq!(validate::check_avl(&tree), Ok(()));
        assert_eq!(validate::check_search_tree(&tree), Ok(()));
    }

    #[test]
    fn test_remove_two_children_rebalances_successor_path() {
        let mut tree = build(&[8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15, 16]);
        for value in &[8, 9, 10, 11] {
            assert!(remove(&mut tree, value));
            assert_eq!(validate::check_search_tree(&tree), Ok(()));
            assert_eq!(validate::check_avl(&tree), Ok(()));
        }
        assert_eq!(count_total(&tree), 12);
    }

    #[test]
    fn test_remove_keeps_duplicates() {
        let mut tree = build(&[2, 1, 3, 3]);
        assert!(remove(&mut tree, &3));
        assert_eq!(Iter::new(&tree).collect::<Vec<_>>(), vec![(&1, 1), (&2, 1), (&3, 1)]);
        assert!(!remove(&mut tree, &4));
    }
}

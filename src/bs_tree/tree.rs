use crate::node::{Node, Tree};
use std::cmp::Ordering;

pub fn search<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match value.cmp(&node.value) {
        Ordering::Less => search(&node.left, value),
        Ordering::Greater => search(&node.right, value),
        Ordering::Equal => Some(&**node),
    })
}

pub fn insert<T>(tree: &mut Tree<T>, value: T)
where
    T: Ord,
{
    match tree {
        Some(node) => {
            match value.cmp(&node.value) {
                Ordering::Less => insert(&mut node.left, value),
                Ordering::Greater => insert(&mut node.right, value),
                Ordering::Equal => node.count += 1,
            }
            node.update();
        },
        None => *tree = Some(Box::new(Node::new(value))),
    }
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return false,
    };

    let ret = match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal if node.count > 1 => {
            node.count -= 1;
            true
        },
        Ordering::Equal => {
            *tree = splice(node);
            return true;
        },
    };

    node.update();
    *tree = Some(node);
    ret
}

// Unlinks a node whose last occurrence was removed and returns the subtree taking its place.
fn splice<T>(node: Box<Node<T>>) -> Tree<T> {
    let Node { left, right, .. } = *node;
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (left, mut right) => {
            let mut successor = remove_min(&mut right);
            successor.left = left;
            successor.right = right;
            successor.update();
            Some(successor)
        },
    }
}

// precondition: there exists a minimum node in the tree
pub(crate) fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            node.update();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

pub fn min<T>(tree: &Tree<T>) -> Option<&Node<T>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(left_node) = &curr.left {
            curr = left_node;
        }
        &**curr
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&Node<T>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(right_node) = &curr.right {
            curr = right_node;
        }
        &**curr
    })
}

/// Returns the parent of the node holding `value`, or `None` if `value` is at the root or absent.
pub fn parent_of<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    let mut parent = None;
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match value.cmp(&node.value) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return parent,
        };
        parent = Some(&**node);
    }
    None
}

pub fn node_count<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => node_count(&node.left) + node_count(&node.right) + 1,
    }
}

pub fn count_total<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => count_total(&node.left) + count_total(&node.right) + node.count,
    }
}

/// An iterator over a tree.
///
/// This iterator traverses the nodes in-order and yields each value together with its count.
pub struct Iter<'a, T> {
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(tree: &'a Tree<T>) -> Self {
        Iter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: 'a,
{
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            (&node.value, node.count)
        })
    }
}

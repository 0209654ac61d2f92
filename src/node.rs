//! Node representation shared by the naive, AVL and red black trees.

use log::trace;
use std::cmp;
use std::fmt;
use std::mem;

/// The color of a node in a red black tree.
///
/// Trees that do not track colors leave every node `Black`, and an empty subtree is always
/// considered `Black`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// The side of a node on which a child hangs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A handle to a subtree. `None` is the empty subtree: it has a height of `-1`, a count of `0`,
/// is colored `Black` and has no children.
pub type Tree<T> = Option<Box<Node<T>>>;

/// A struct representing a real node of a tree.
///
/// `count` is the number of live insertions of `value` and is always at least one. `height` is
/// one more than the greater of the heights of the two children.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) count: usize,
    pub(crate) height: i32,
    pub(crate) color: Color,
    pub(crate) left: Tree<T>,
    pub(crate) right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            count: 1,
            height: 0,
            color: Color::Black,
            left: None,
            right: None,
        }
    }

    pub fn new_red(value: T) -> Self {
        Node {
            color: Color::Red,
            ..Node::new(value)
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    pub fn child(&self, dir: Direction) -> &Tree<T> {
        match dir {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, dir: Direction) -> &mut Tree<T> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Recomputes the height of this node from the heights of its children. Must be called after
    /// any change to `left` or `right`.
    pub(crate) fn update(&mut self) {
        self.height = cmp::max(height(&self.left), height(&self.right)) + 1;
    }

    /// Returns the height of the right subtree minus the height of the left subtree.
    pub fn height_diff(&self) -> i32 {
        height(&self.right) - height(&self.left)
    }

    pub(crate) fn swap_color_with_child(&mut self, dir: Direction) {
        let child = match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        let child = child
            .as_mut()
            .expect("Expected a child node to swap colors with.");
        mem::swap(&mut self.color, &mut child.color);
    }

    pub(crate) fn set_child_color(&mut self, dir: Direction, color: Color) {
        if let Some(child) = self.child_mut(dir) {
            child.color = color;
        }
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    /// Writes the value followed by a decoration: nothing for a black node with a count of one,
    /// `*` for a black node with duplicates, `r` for a red node and `R` for a red node with
    /// duplicates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decoration = match (self.color, self.count > 1) {
            (Color::Black, false) => "",
            (Color::Black, true) => "*",
            (Color::Red, false) => "r",
            (Color::Red, true) => "R",
        };
        write!(f, "{}{}", self.value, decoration)
    }
}

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(node) => node.height,
    }
}

pub fn color<T>(tree: &Tree<T>) -> Color {
    match tree {
        None => Color::Black,
        Some(node) => node.color,
    }
}

pub fn is_red<T>(tree: &Tree<T>) -> bool {
    color(tree) == Color::Red
}

/// Returns the display string of `node`, or an empty string for an empty subtree.
pub fn label<T>(node: Option<&Node<T>>) -> String
where
    T: fmt::Display,
{
    node.map_or_else(String::new, |node| node.to_string())
}

/// Rotates `node` toward `dir`: the child opposite to `dir` becomes the new root and `node`
/// becomes its child on `dir`. Colors are left untouched.
pub(crate) fn rotate<T>(mut node: Box<Node<T>>, dir: Direction) -> Box<Node<T>> {
    let opposite = dir.opposite();
    let mut pivot = node
        .child_mut(opposite)
        .take()
        .expect("Expected a child opposite to the direction of the rotation.");
    *node.child_mut(opposite) = pivot.child_mut(dir).take();
    node.update();
    *pivot.child_mut(dir) = Some(node);
    pivot.update();
    trace!("rotated {:?}", dir);
    pivot
}

pub(crate) fn rotate_tree<T>(tree: &mut Tree<T>, dir: Direction) {
    let node = tree.take().expect("Expected a non-empty tree to rotate.");
    *tree = Some(rotate(node, dir));
}

#[cfg(test)]
mod tests {
    use super::{height, label, rotate, Color, Direction, Node, Tree};

    fn leaf(value: u32) -> Tree<u32> {
        Some(Box::new(Node::new(value)))
    }

    fn join(value: u32, left: Tree<u32>, right: Tree<u32>) -> Box<Node<u32>> {
        let mut node = Box::new(Node::new(value));
        node.left = left;
        node.right = right;
        node.update();
        node
    }

    fn in_order(tree: &Tree<u32>, out: &mut Vec<(u32, usize)>) {
        if let Some(node) = tree {
            in_order(&node.left, out);
            out.push((node.value, node.count));
            in_order(&node.right, out);
        }
    }

    #[test]
    fn test_empty_height() {
        let tree: Tree<u32> = None;
        assert_eq!(height(&tree), -1);
    }

    #[test]
    fn test_update() {
        let node = join(2, leaf(1), Some(join(4, leaf(3), None)));
        assert_eq!(node.height, 2);
        assert_eq!(node.height_diff(), 1);
    }

    #[test]
    fn test_rotate_left() {
        let node = join(2, leaf(1), Some(join(4, leaf(3), leaf(5))));
        let root = rotate(node, Direction::Left);

        assert_eq!(root.value, 4);
        assert_eq!(root.height, 2);
        assert_eq!(root.left.as_ref().map(|node| node.value), Some(2));
        assert_eq!(root.left.as_ref().map(|node| node.height), Some(1));
    }

    #[test]
    fn test_rotate_preserves_order_and_counts() {
        let mut node = join(2, leaf(1), Some(join(4, leaf(3), leaf(5))));
        node.count = 3;
        let mut before = Vec::new();
        in_order(&Some(node.clone()), &mut before);

        let root = rotate(rotate(node, Direction::Left), Direction::Right);
        let mut after = Vec::new();
        in_order(&Some(root), &mut after);

        assert_eq!(before, after);
    }

    #[test]
    #[should_panic]
    fn test_rotate_without_pivot() {
        rotate(Box::new(Node::new(1)), Direction::Right);
    }

    #[test]
    fn test_label() {
        let mut node = Node::new(5);
        assert_eq!(node.to_string(), "5");
        node.count = 2;
        assert_eq!(node.to_string(), "5*");
        node.color = Color::Red;
        assert_eq!(node.to_string(), "5R");
        node.count = 1;
        assert_eq!(node.to_string(), "5r");
        assert_eq!(label::<u32>(None), "");
        assert_eq!(label(Some(&node)), "5r");
    }

    #[test]
    fn test_swap_color_with_child() {
        let mut node = join(2, Some(Box::new(Node::new_red(1))), None);
        node.swap_color_with_child(Direction::Left);
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left.as_ref().map(|node| node.color), Some(Color::Black));
    }
}

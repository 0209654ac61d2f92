use crate::bs_tree::tree as bs_tree;
use crate::bs_tree::Iter;
use crate::node::{self, Color, Tree};
use crate::pretty::{self, PrettyOptions};
use crate::red_black_tree::tree;
use crate::validate::{self, Violation};
use log::debug;
use std::fmt;

/// An ordered multiset implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors each node red or black.
/// The root is black, no red node has a red child, and every path from a node down to an empty
/// subtree passes through the same number of black nodes. Together these keep the longest path
/// at most twice as long as the shortest one. Each node counts the live insertions of its value.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for value in &[50, 25, 75, 10, 30, 60, 80] {
///     tree.insert(*value);
/// }
///
/// assert!(tree.remove(&25));
/// assert_eq!(tree.minimum_value(), Some(&10));
/// assert_eq!(tree.black_height(), Ok(2));
/// ```
#[derive(Clone)]
pub struct RedBlackTree<T> {
    root: Tree<T>,
}

impl<T> RedBlackTree<T> {
    /// Constructs a new, empty `RedBlackTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RedBlackTree { root: None }
    }

    /// Returns the root of the tree for read-only traversal.
    pub fn root(&self) -> &Tree<T> {
        &self.root
    }

    /// Returns the height of the tree. An empty tree has a height of `-1`.
    pub fn tree_height(&self) -> i32 {
        node::height(&self.root)
    }

    /// Returns the number of distinct values in the tree.
    pub fn node_count(&self) -> usize {
        bs_tree::node_count(&self.root)
    }

    /// Returns the number of live insertions, duplicates included.
    pub fn count_total(&self) -> usize {
        bs_tree::count_total(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns an iterator over the tree that yields each value with its count in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Returns the number of black nodes, empty subtrees included, on every path from the root
    /// down to an empty subtree, excluding the root itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.black_height(), Ok(0));
    ///
    /// tree.insert(10);
    /// tree.insert(20);
    /// tree.insert(30);
    /// assert_eq!(tree.black_height(), Ok(1));
    /// ```
    pub fn black_height(&self) -> Result<usize, Violation> {
        validate::check_red_black(&self.root)
    }

    fn blacken_root(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.color = Color::Black;
        }
    }
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Inserts one occurrence of `value`, recoloring and rotating on the way back up.
    pub fn insert(&mut self, value: T) {
        tree::insert(&mut self.root, value);
        self.blacken_root();
    }

    /// Removes one occurrence of `value`. Returns `false` if `value` is not in the tree.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = tree::remove(&mut self.root, value);
        self.blacken_root();
        debug!(
            "red black remove, found: {}, height: {}",
            removed,
            self.tree_height()
        );
        removed
    }

    pub fn contains(&self, value: &T) -> bool {
        bs_tree::search(&self.root, value).is_some()
    }

    /// Returns the number of occurrences of `value`, or `0` if it is not in the tree.
    pub fn count_of(&self, value: &T) -> usize {
        bs_tree::search(&self.root, value).map_or(0, |node| node.count())
    }

    /// Returns the minimum value in the tree, or `None` if the tree is empty.
    pub fn minimum_value(&self) -> Option<&T> {
        bs_tree::min(&self.root).map(|node| node.value())
    }

    /// Returns the maximum value in the tree, or `None` if the tree is empty.
    pub fn maximum_value(&self) -> Option<&T> {
        bs_tree::max(&self.root).map(|node| node.value())
    }

    /// Returns the value of the parent of the node holding `value`. Returns `None` if `value` is
    /// at the root or is not in the tree.
    pub fn parent_of(&self, value: &T) -> Option<&T> {
        bs_tree::parent_of(&self.root, value).map(|node| node.value())
    }

    /// Returns the color of the node holding `value`, or `None` if it is not in the tree.
    pub fn color_of(&self, value: &T) -> Option<Color> {
        bs_tree::search(&self.root, value).map(|node| node.color())
    }

    /// Checks search order, counts, heights and the red black coloring.
    pub fn validate(&self) -> Result<(), Violation> {
        validate::check_search_tree(&self.root)?;
        validate::check_red_black(&self.root).map(|_| ())
    }
}

impl<T> RedBlackTree<T>
where
    T: fmt::Display,
{
    pub fn render(&self, options: &PrettyOptions) -> String {
        pretty::render(&self.root, options)
    }

    /// Pretty-prints the tree to standard output.
    pub fn print_tree(&self) {
        print!("{}", self);
    }
}

impl<T> fmt::Display for RedBlackTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PrettyOptions::default()))
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T>
where
    T: 'a,
{
    type IntoIter = Iter<'a, T>;
    type Item = (&'a T, usize);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

use crate::avl_tree::tree;
use crate::bs_tree::tree as bs_tree;
use crate::bs_tree::Iter;
use crate::node::{self, Tree};
use crate::pretty::{self, PrettyOptions};
use crate::validate::{self, Violation};
use log::debug;
use std::fmt;

/// An ordered multiset implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Each node counts the live
/// insertions of its value.
///
/// # Examples
///
/// ```
/// use balanced_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for value in 1..8 {
///     tree.insert(value);
/// }
/// tree.insert(4);
///
/// assert_eq!(tree.tree_height(), 2);
/// assert_eq!(tree.count_of(&4), 2);
/// assert_eq!(tree.node_count(), 7);
/// assert_eq!(tree.count_total(), 8);
///
/// assert!(tree.remove(&4));
/// assert_eq!(tree.count_of(&4), 1);
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    root: Tree<T>,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert_eq!(tree.tree_height(), -1);
    /// ```
    pub fn new() -> Self {
        AvlTree { root: None }
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
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![(&1, 1), (&3, 2)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Inserts one occurrence of `value`, rebalancing on the way back up.
    pub fn insert(&mut self, value: T) {
        tree::insert(&mut self.root, value);
    }

    /// Removes one occurrence of `value`. Returns `false` if `value` is not in the tree.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = tree::remove(&mut self.root, value);
        debug!("avl remove, found: {}, height: {}", removed, self.tree_height());
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

    /// Checks search order, counts, heights and the avl balance of every node.
    pub fn validate(&self) -> Result<(), Violation> {
        validate::check_search_tree(&self.root)?;
        validate::check_avl(&self.root)
    }
}

impl<T> AvlTree<T>
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

impl<T> fmt::Display for AvlTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PrettyOptions::default()))
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a,
{
    type IntoIter = Iter<'a, T>;
    type Item = (&'a T, usize);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

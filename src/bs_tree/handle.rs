use crate::bs_tree::tree::{self, Iter};
use crate::node::{self, Tree};
use crate::pretty::{self, PrettyOptions};
use crate::validate::{self, Violation};
use log::debug;
use std::fmt;

/// An unbalanced binary search tree that counts duplicate insertions.
///
/// Values are placed by plain binary search tree insertion, so the height of the tree depends
/// on the insertion order. Inserting a value that is already present increments its count, and
/// removing it decrements the count until the last occurrence unlinks the node.
///
/// # Examples
///
/// ```
/// use balanced_trees::bs_tree::BsTree;
///
/// let mut tree = BsTree::new();
/// tree.insert(3);
/// tree.insert(1);
/// tree.insert(3);
///
/// assert_eq!(tree.count_of(&3), 2);
/// assert_eq!(tree.node_count(), 2);
/// assert_eq!(tree.count_total(), 3);
///
/// assert_eq!(tree.minimum_value(), Some(&1));
/// assert!(tree.remove(&1));
/// assert!(!tree.remove(&1));
/// ```
#[derive(Clone)]
pub struct BsTree<T> {
    root: Tree<T>,
}

impl<T> BsTree<T> {
    /// Constructs a new, empty `BsTree<T>`.
    pub fn new() -> Self {
        BsTree { root: None }
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
        tree::node_count(&self.root)
    }

    /// Returns the number of live insertions, duplicates included.
    pub fn count_total(&self) -> usize {
        tree::count_total(&self.root)
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
}

impl<T> BsTree<T>
where
    T: Ord,
{
    /// Inserts one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        tree::insert(&mut self.root, value);
    }

    /// Removes one occurrence of `value`. Returns `false` if `value` is not in the tree.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = tree::remove(&mut self.root, value);
        debug!("bs tree remove, found: {}", removed);
        removed
    }

    pub fn contains(&self, value: &T) -> bool {
        tree::search(&self.root, value).is_some()
    }

    /// Returns the number of occurrences of `value`, or `0` if it is not in the tree.
    pub fn count_of(&self, value: &T) -> usize {
        tree::search(&self.root, value).map_or(0, |node| node.count())
    }

    /// Returns the minimum value in the tree, or `None` if the tree is empty.
    pub fn minimum_value(&self) -> Option<&T> {
        tree::min(&self.root).map(|node| node.value())
    }

    /// Returns the maximum value in the tree, or `None` if the tree is empty.
    pub fn maximum_value(&self) -> Option<&T> {
        tree::max(&self.root).map(|node| node.value())
    }

    /// Returns the value of the parent of the node holding `value`. Returns `None` if `value` is
    /// at the root or is not in the tree.
    pub fn parent_of(&self, value: &T) -> Option<&T> {
        tree::parent_of(&self.root, value).map(|node| node.value())
    }

    /// Checks search order, counts and heights across the whole tree.
    pub fn validate(&self) -> Result<(), Violation> {
        validate::check_search_tree(&self.root)
    }
}

impl<T> BsTree<T>
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

impl<T> fmt::Display for BsTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PrettyOptions::default()))
    }
}

impl<'a, T> IntoIterator for &'a BsTree<T>
where
    T: 'a,
{
    type IntoIter = Iter<'a, T>;
    type Item = (&'a T, usize);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for BsTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BsTree;

    #[test]
    fn test_empty() {
        let tree: BsTree<u32> = BsTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.tree_height(), -1);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.count_total(), 0);
        assert_eq!(tree.minimum_value(), None);
        assert_eq!(tree.maximum_value(), None);
        assert_eq!(tree.count_of(&1), 0);
    }

    #[test]
    fn test_ascending_inserts_form_a_chain() {
        let mut tree = BsTree::new();
        for value in 1..8 {
            tree.insert(value);
        }
        assert_eq!(tree.tree_height(), 6);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_duplicates() {
        let mut tree = BsTree::new();
        tree.insert(5);
        tree.insert(5);
        assert!(tree.remove(&5));
        assert_eq!(tree.count_of(&5), 1);
        assert!(tree.remove(&5));
        assert_eq!(tree.count_of(&5), 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut tree = BsTree::new();
        tree.insert(2);
        tree.insert(1);

        let mut copy = tree.clone();
        copy.insert(3);
        copy.remove(&1);

        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![(&1, 1), (&2, 1)]);
        assert_eq!(copy.iter().collect::<Vec<_>>(), vec![(&2, 1), (&3, 1)]);
    }

    #[test]
    fn test_parent_of() {
        let mut tree = BsTree::new();
        tree.insert(2);
        tree.insert(1);
        assert_eq!(tree.parent_of(&1), Some(&2));
        assert_eq!(tree.parent_of(&2), None);
    }

    #[test]
    fn test_display_deep_chain() {
        let mut tree = BsTree::new();
        for value in 0..70 {
            tree.insert(value);
        }
        assert_eq!(tree.tree_height(), 69);
        assert!(tree.to_string().ends_with("...\n"));
    }

    #[test]
    fn test_clear() {
        let mut tree = BsTree::new();
        tree.insert(1);
        tree.clear();
        assert!(tree.is_empty());
    }
}

//! Repair of a black-height deficit left behind by unlinking a black node.
//!
//! A subtree with a deficit has one fewer black node on each of its paths than its sibling. The
//! colors of its parent `p`, sibling `s`, close nephew `c` and distant nephew `d` decide how the
//! deficit is resolved:
//!
//! ```text
//!       p
//!      / \
//!    [x]  s
//!        / \
//!       c   d
//! ```

use crate::node::{self, Color, Direction, Node, Tree};
use log::trace;

/// The ways a black-height deficit can be resolved. Cases are tried in declaration order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeletionCase {
    /// The deficient subtree is the whole tree, so every path lost the same black node.
    Root,
    /// `p`, `s`, `c` and `d` are black. Recoloring `s` red moves the deficit up to `p`.
    AllBlack,
    /// `p` is black and `s` is red. Rotating `s` above `p` turns it into one of the cases below.
    RedSibling,
    /// `p` is red, `s`, `c` and `d` are black. Swapping the colors of `p` and `s` resolves it.
    RedParent,
    /// `s` and `d` are black and `c` is red. Rotating `c` above `s` gives a red distant nephew.
    RedCloseNephew,
    /// `s` is black and `d` is red. Rotating `s` above `p` resolves it.
    RedDistantNephew,
}

/// Colors around a black-height deficit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Neighborhood {
    /// The color of the parent, or `None` when there is no parent.
    pub parent: Option<Color>,
    pub sibling: Color,
    /// The child of the sibling on the side of the deficit.
    pub close: Color,
    /// The child of the sibling away from the deficit.
    pub distant: Color,
}

impl Neighborhood {
    /// Reads the neighborhood of a deficit in the child of `parent` on side `dir`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` has no child opposite `dir`. A sibling always exists opposite a
    /// deficit in an otherwise valid red black tree.
    pub fn of<T>(parent: &Node<T>, dir: Direction) -> Self {
        let sibling = parent
            .child(dir.opposite())
            .as_ref()
            .expect("Expected a sibling opposite a black-height deficit.");
        Neighborhood {
            parent: Some(parent.color),
            sibling: sibling.color,
            close: node::color(sibling.child(dir)),
            distant: node::color(sibling.child(dir.opposite())),
        }
    }

    /// The neighborhood of a deficit that has reached the root of the whole tree.
    pub fn at_root() -> Self {
        Neighborhood {
            parent: None,
            sibling: Color::Black,
            close: Color::Black,
            distant: Color::Black,
        }
    }

    /// Returns the first case matching the neighborhood, or `None` if the colors cannot occur
    /// around a deficit in a valid red black tree.
    pub fn classify(&self) -> Option<DeletionCase> {
        use self::Color::{Black, Red};

        let parent = match self.parent {
            Some(parent) => parent,
            None => return Some(DeletionCase::Root),
        };

        match (parent, self.sibling, self.close, self.distant) {
            (Black, Black, Black, Black) => Some(DeletionCase::AllBlack),
            (Black, Red, Black, Black) => Some(DeletionCase::RedSibling),
            (Red, Black, Black, Black) => Some(DeletionCase::RedParent),
            (_, Black, Red, Black) => Some(DeletionCase::RedCloseNephew),
            (_, Black, _, Red) => Some(DeletionCase::RedDistantNephew),
            _ => None,
        }
    }
}

/// Resolves a black-height deficit in the child of the root of `tree` on side `dir`. A deficit
/// in the whole tree has no parent and is left to the caller, see `Neighborhood::at_root`.
///
/// Returns `true` if the deficit could only be moved up, in which case the whole of `tree` is
/// now one black node short and its parent must continue the repair.
///
/// # Panics
///
/// Panics if the neighborhood of the deficit is not one a valid red black tree can produce.
pub fn fix_black_height<T>(tree: &mut Tree<T>, dir: Direction) -> bool {
    let opposite = dir.opposite();
    let mut descended = false;
    let mut cursor = &mut *tree;

    let pending = loop {
        let parent = cursor
            .as_mut()
            .expect("Expected a parent above a black-height deficit.");
        let case = Neighborhood::of(parent, dir)
            .classify()
            .expect("Expected a valid neighborhood around a black-height deficit.");
        trace!("black-height deficit on the {:?}: {:?}", dir, case);

        match case {
            DeletionCase::Root => unreachable!("Expected a parent above the deficit."),
            DeletionCase::AllBlack => {
                parent.set_child_color(opposite, Color::Red);
                break true;
            },
            DeletionCase::RedSibling => {
                node::rotate_tree(cursor, dir);
                let root = cursor.as_mut().expect("Expected a non-empty tree.");
                root.swap_color_with_child(dir);
                descended = true;
                cursor = root.child_mut(dir);
            },
            DeletionCase::RedParent => {
                parent.swap_color_with_child(opposite);
                break false;
            },
            DeletionCase::RedCloseNephew => {
                let sibling = parent.child_mut(opposite);
                node::rotate_tree(sibling, opposite);
                sibling
                    .as_mut()
                    .expect("Expected a non-empty tree.")
                    .swap_color_with_child(opposite);
                parent.update();
            },
            DeletionCase::RedDistantNephew => {
                node::rotate_tree(cursor, dir);
                let root = cursor.as_mut().expect("Expected a non-empty tree.");
                root.swap_color_with_child(dir);
                root.set_child_color(opposite, Color::Black);
                break false;
            },
        }
    };

    if descended {
        if let Some(node) = tree {
            node.update();
        }
    }
    pending
}

#[cfg(test)]
mod tests {
    use super::{fix_black_height, DeletionCase, Neighborhood};
    use crate::node::{Color, Direction, Node, Tree};
    use crate::validate;

    use self::Color::{Black, Red};

    fn node(value: u32, color: Color, left: Tree<u32>, right: Tree<u32>) -> Tree<u32> {
        let mut node = Box::new(Node::new(value));
        node.color = color;
        node.left = left;
        node.right = right;
        node.update();
        Some(node)
    }

    fn leaf(value: u32, color: Color) -> Tree<u32> {
        node(value, color, None, None)
    }

    fn neighborhood(parent: Color, sibling: Color, close: Color, distant: Color) -> Neighborhood {
        Neighborhood {
            parent: Some(parent),
            sibling,
            close,
            distant,
        }
    }

    fn root(tree: &Tree<u32>) -> (u32, Color) {
        tree.as_ref().map(|node| (node.value, node.color)).unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(Neighborhood::at_root().classify(), Some(DeletionCase::Root));

        let cases = [
            ((Black, Black, Black, Black), Some(DeletionCase::AllBlack)),
            ((Black, Red, Black, Black), Some(DeletionCase::RedSibling)),
            ((Red, Black, Black, Black), Some(DeletionCase::RedParent)),
            ((Black, Black, Red, Black), Some(DeletionCase::RedCloseNephew)),
            ((Red, Black, Red, Black), Some(DeletionCase::RedCloseNephew)),
            ((Black, Black, Black, Red), Some(DeletionCase::RedDistantNephew)),
            ((Red, Black, Red, Red), Some(DeletionCase::RedDistantNephew)),
            ((Red, Red, Black, Black), None),
            ((Black, Red, Red, Black), None),
        ];
        for &((p, s, c, d), expected) in &cases {
            assert_eq!(neighborhood(p, s, c, d).classify(), expected);
        }
    }

    #[test]
    fn test_neighborhood_of() {
        let tree = node(2, Black, None, node(4, Black, leaf(3, Red), None));
        assert_eq!(
            Neighborhood::of(tree.as_ref().unwrap(), Direction::Left),
            neighborhood(Black, Black, Red, Black),
        );
    }

    #[test]
    fn test_all_black_moves_deficit_up() {
        // the left leaf of 2 was black and has been unlinked
        let mut tree = node(2, Black, None, leaf(3, Black));
        assert!(fix_black_height(&mut tree, Direction::Left));
        assert_eq!(root(&tree), (2, Black));
        assert_eq!(validate::check_red_black(&tree), Ok(1));
    }

    #[test]
    fn test_red_parent() {
        let mut tree = node(2, Red, None, leaf(3, Black));
        assert!(!fix_black_height(&mut tree, Direction::Left));
        assert_eq!(root(&tree), (2, Black));
        assert_eq!(validate::check_red_black(&tree), Ok(1));
    }

    #[test]
    fn test_red_close_nephew() {
        let mut tree = node(2, Black, None, node(4, Black, leaf(3, Red), None));
        assert!(!fix_black_height(&mut tree, Direction::Left));
        assert_eq!(root(&tree), (3, Black));
        assert_eq!(validate::check_search_tree(&tree), Ok(()));
        assert_eq!(validate::check_red_black(&tree), Ok(2));
    }

    #[test]
    fn test_red_distant_nephew() {
        let mut tree = node(4, Red, node(2, Black, leaf(1, Red), None), None);
        assert!(!fix_black_height(&mut tree, Direction::Right));
        assert_eq!(root(&tree), (2, Red));
        assert_eq!(validate::check_search_tree(&tree), Ok(()));

        let mut tree = node(2, Black, None, node(3, Black, None, leaf(4, Red)));
        assert!(!fix_black_height(&mut tree, Direction::Left));
        assert_eq!(root(&tree), (3, Black));
        assert_eq!(validate::check_red_black(&tree), Ok(2));
        assert_eq!(tree.as_ref().unwrap().height, 1);
    }

    #[test]
    fn test_red_sibling() {
        // the black leaf left of 2 has been unlinked
        let mut tree = node(
            2,
            Black,
            None,
            node(4, Red, leaf(3, Black), leaf(5, Black)),
        );
        assert!(!fix_black_height(&mut tree, Direction::Left));
        assert_eq!(root(&tree), (4, Black));
        assert_eq!(validate::check_search_tree(&tree), Ok(()));
        assert_eq!(validate::check_red_black(&tree), Ok(2));
    }
}
